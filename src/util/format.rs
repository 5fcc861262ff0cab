//! Display helpers shared by the card, the grid and the detail page.

use time::{format_description, Duration, OffsetDateTime};

/// Formats a minor-unit price as a USD display string: `10000` becomes
/// `"$100.00"`.
pub fn format_price(minor_units: u32) -> String {
    let dollars = minor_units / 100;
    let cents = minor_units % 100;
    format!("${}.{cents:02}", group_thousands(dollars))
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Standard English pluralization: `pluralize("Color", 1)` is `"1 Color"`,
/// any other count gets a trailing `s`.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// True when `release_date` falls inside the trailing `window` ending at
/// `now`. The boundary is inclusive, and a future-dated release counts as
/// new as well.
pub fn is_new_release(release_date: OffsetDateTime, now: OffsetDateTime, window: Duration) -> bool {
    now - release_date <= window
}

/// Short human-readable release date, e.g. `"Jan 15, 2025"`.
pub fn format_release_date(date: OffsetDateTime) -> String {
    match format_description::parse("[month repr:short] [day padding:none], [year]") {
        Ok(desc) => date
            .format(&desc)
            .unwrap_or_else(|_| date.date().to_string()),
        Err(_) => date.date().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::format_description::well_known::Rfc3339;

    fn date(value: &str) -> OffsetDateTime {
        OffsetDateTime::parse(value, &Rfc3339).expect("test date")
    }

    #[test]
    fn formats_prices_with_cents_and_grouping() {
        assert_eq!(format_price(10000), "$100.00");
        assert_eq!(format_price(9000), "$90.00");
        assert_eq!(format_price(123456789), "$1,234,567.89");
        assert_eq!(format_price(50), "$0.50");
        assert_eq!(format_price(0), "$0.00");
    }

    #[test]
    fn pluralizes_with_standard_trailing_s() {
        assert_eq!(pluralize("Color", 1), "1 Color");
        assert_eq!(pluralize("Color", 3), "3 Colors");
        assert_eq!(pluralize("Color", 0), "0 Colors");
        assert_eq!(pluralize("Style", 12), "12 Styles");
    }

    #[test]
    fn recency_window_is_inclusive() {
        let now = date("2026-08-06T00:00:00Z");
        let window = Duration::days(30);

        assert!(is_new_release(now - window, now, window));
        assert!(is_new_release(date("2026-08-01T00:00:00Z"), now, window));
        assert!(!is_new_release(date("2026-06-01T00:00:00Z"), now, window));
    }

    #[test]
    fn future_releases_count_as_new() {
        let now = date("2026-08-06T00:00:00Z");
        assert!(is_new_release(
            date("2026-09-01T00:00:00Z"),
            now,
            Duration::days(30)
        ));
    }

    #[test]
    fn release_dates_render_short_form() {
        assert_eq!(
            format_release_date(date("2025-01-15T00:00:00Z")),
            "Jan 15, 2025"
        );
    }
}
