//! Display-variant classification for catalog entries.

use time::{Duration, OffsetDateTime};

use crate::util::format::is_new_release;

/// Promotional display state resolved once per card render.
///
/// Exactly one variant applies. A shoe can qualify as both on sale and
/// newly released; `OnSale` wins that tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    /// Lowercase state label, also used as the style lookup key.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Badge copy: the label with each hyphenated word capitalized.
    /// `Default` cards carry no badge at all.
    pub fn badge_text(&self) -> Option<String> {
        match self {
            Variant::Default => None,
            other => Some(capitalize_label(other.label())),
        }
    }
}

/// Picks the display variant for one catalog entry.
///
/// Precedence: a present sale price always wins, then a release date
/// inside the trailing `window` ending at `now`, then `Default`. Total
/// and deterministic; there is no error case.
pub fn select_variant(
    sale_price: Option<u32>,
    release_date: OffsetDateTime,
    now: OffsetDateTime,
    window: Duration,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if is_new_release(release_date, now, window) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

fn capitalize_label(label: &str) -> String {
    label
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::format_description::well_known::Rfc3339;

    fn date(value: &str) -> OffsetDateTime {
        OffsetDateTime::parse(value, &Rfc3339).expect("test date")
    }

    const WINDOW: Duration = Duration::days(30);

    #[test]
    fn sale_price_wins_regardless_of_release_date() {
        let now = date("2026-08-06T12:00:00Z");
        let stale = date("2019-01-01T00:00:00Z");
        let fresh = date("2026-08-05T12:00:00Z");

        assert_eq!(select_variant(Some(9000), stale, now, WINDOW), Variant::OnSale);
        assert_eq!(select_variant(Some(9000), fresh, now, WINDOW), Variant::OnSale);
    }

    #[test]
    fn recent_release_without_sale_is_new_release() {
        let now = date("2026-08-06T12:00:00Z");
        let released = date("2026-07-20T00:00:00Z");

        assert_eq!(select_variant(None, released, now, WINDOW), Variant::NewRelease);
    }

    #[test]
    fn stale_release_without_sale_is_default() {
        let now = date("2026-08-06T12:00:00Z");
        let released = date("2026-01-15T00:00:00Z");

        assert_eq!(select_variant(None, released, now, WINDOW), Variant::Default);
    }

    #[test]
    fn window_boundary_counts_as_new() {
        let now = date("2026-08-06T12:00:00Z");
        let on_boundary = now - WINDOW;
        let just_past = on_boundary - Duration::seconds(1);

        assert_eq!(select_variant(None, on_boundary, now, WINDOW), Variant::NewRelease);
        assert_eq!(select_variant(None, just_past, now, WINDOW), Variant::Default);
    }

    #[test]
    fn window_is_injected_not_fixed() {
        let now = date("2026-08-06T12:00:00Z");
        let released = date("2026-07-26T00:00:00Z");

        assert_eq!(
            select_variant(None, released, now, Duration::days(7)),
            Variant::Default
        );
        assert_eq!(
            select_variant(None, released, now, Duration::days(14)),
            Variant::NewRelease
        );
    }

    #[test]
    fn badge_text_is_capitalized_label() {
        assert_eq!(Variant::OnSale.badge_text().as_deref(), Some("On-Sale"));
        assert_eq!(
            Variant::NewRelease.badge_text().as_deref(),
            Some("New-Release")
        );
    }

    #[test]
    fn default_variant_has_no_badge() {
        assert_eq!(Variant::Default.badge_text(), None);
    }
}
