use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// A single catalog entry. Constructed fresh for each render pass; there
/// is no identity or lifecycle beyond that.
#[derive(Clone, Debug, PartialEq)]
pub struct Shoe {
    /// Non-empty slug, used to build the card's navigation target.
    pub slug: String,
    pub name: String,
    /// Opaque image URI; the card never inspects it.
    pub image_src: String,
    /// List price in minor units (cents).
    pub price: u32,
    /// Present only while the shoe is on sale; conventionally below `price`.
    pub sale_price: Option<u32>,
    pub release_date: OffsetDateTime,
    pub num_of_colors: u32,
}

impl Shoe {
    /// Price a buyer would pay right now.
    pub fn effective_price(&self) -> u32 {
        self.sale_price.unwrap_or(self.price)
    }
}

/// User-tunable display preferences for the catalog grid.
///
/// The new-release window is configuration, not a constant: the variant
/// selector receives it from here on every render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogPrefs {
    pub new_release_window_days: u16,
    pub sort: ShoeSort,
}

impl CatalogPrefs {
    pub fn new_release_window(&self) -> Duration {
        Duration::days(i64::from(self.new_release_window_days))
    }
}

impl Default for CatalogPrefs {
    fn default() -> Self {
        Self {
            new_release_window_days: 30,
            sort: ShoeSort::Newest,
        }
    }
}

/// Grid ordering options offered on the catalog page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShoeSort {
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
}

impl ShoeSort {
    pub const ALL: [ShoeSort; 3] = [
        ShoeSort::Newest,
        ShoeSort::PriceLowHigh,
        ShoeSort::PriceHighLow,
    ];

    /// Stable key used as the `<select>` option value.
    pub fn key(&self) -> &'static str {
        match self {
            ShoeSort::Newest => "newest",
            ShoeSort::PriceLowHigh => "price-asc",
            ShoeSort::PriceHighLow => "price-desc",
        }
    }

    pub fn from_key(key: &str) -> Option<ShoeSort> {
        ShoeSort::ALL.into_iter().find(|sort| sort.key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShoeSort::Newest => "Newest Releases",
            ShoeSort::PriceLowHigh => "Price: Low to High",
            ShoeSort::PriceHighLow => "Price: High to Low",
        }
    }
}

/// Orders the grid in place. Price orderings use the effective price, so a
/// discounted shoe sorts by what it actually costs.
pub fn sort_shoes(shoes: &mut [Shoe], sort: ShoeSort) {
    match sort {
        ShoeSort::Newest => shoes.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
        ShoeSort::PriceLowHigh => shoes.sort_by_key(Shoe::effective_price),
        ShoeSort::PriceHighLow => {
            shoes.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::format_description::well_known::Rfc3339;

    fn shoe(slug: &str, price: u32, sale_price: Option<u32>, released: &str) -> Shoe {
        Shoe {
            slug: slug.to_string(),
            name: slug.to_string(),
            image_src: String::new(),
            price,
            sale_price,
            release_date: OffsetDateTime::parse(released, &Rfc3339).expect("test date"),
            num_of_colors: 1,
        }
    }

    #[test]
    fn effective_price_prefers_sale_price() {
        assert_eq!(shoe("a", 10000, Some(9000), "2026-01-01T00:00:00Z").effective_price(), 9000);
        assert_eq!(shoe("b", 10000, None, "2026-01-01T00:00:00Z").effective_price(), 10000);
    }

    #[test]
    fn newest_sort_puts_latest_release_first() {
        let mut shoes = vec![
            shoe("old", 5000, None, "2024-03-01T00:00:00Z"),
            shoe("new", 5000, None, "2026-07-01T00:00:00Z"),
            shoe("mid", 5000, None, "2025-06-15T00:00:00Z"),
        ];
        sort_shoes(&mut shoes, ShoeSort::Newest);
        let order: Vec<_> = shoes.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(order, ["new", "mid", "old"]);
    }

    #[test]
    fn price_sorts_use_effective_price() {
        let mut shoes = vec![
            shoe("full", 8000, None, "2026-01-01T00:00:00Z"),
            shoe("discounted", 12000, Some(6000), "2026-01-01T00:00:00Z"),
        ];
        sort_shoes(&mut shoes, ShoeSort::PriceLowHigh);
        assert_eq!(shoes[0].slug, "discounted");

        sort_shoes(&mut shoes, ShoeSort::PriceHighLow);
        assert_eq!(shoes[0].slug, "full");
    }

    #[test]
    fn sort_keys_round_trip() {
        for sort in ShoeSort::ALL {
            assert_eq!(ShoeSort::from_key(sort.key()), Some(sort));
        }
        assert_eq!(ShoeSort::from_key("bogus"), None);
    }
}
