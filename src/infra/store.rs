//! Embedded catalog source.
//!
//! The storefront ships its catalog inside the binary. Decoding and
//! validation happen at this seam, so the domain and UI layers only ever
//! see well-formed entries.

use rust_embed::RustEmbed;
use serde::Deserialize;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::Shoe;

#[derive(RustEmbed)]
#[folder = "assets/data"]
struct CatalogData;

const CATALOG_FILE: &str = "catalog.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("embedded catalog {0} is missing")]
    MissingAsset(&'static str),
    #[error("catalog is not valid UTF-8")]
    Encoding,
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("shoe {slug:?}: invalid release date {value:?}")]
    InvalidDate { slug: String, value: String },
    #[error("catalog entry {index} has an empty slug")]
    EmptySlug { index: usize },
}

/// Raw catalog entry as stored on disk; dates stay strings until the
/// conversion into the domain type validates them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShoeDto {
    slug: String,
    name: String,
    image_src: String,
    price: u32,
    #[serde(default)]
    sale_price: Option<u32>,
    release_date: String,
    num_of_colors: u32,
}

impl ShoeDto {
    fn into_domain(self, index: usize) -> Result<Shoe, CatalogError> {
        if self.slug.trim().is_empty() {
            return Err(CatalogError::EmptySlug { index });
        }
        let release_date =
            OffsetDateTime::parse(&self.release_date, &Rfc3339).map_err(|_| {
                CatalogError::InvalidDate {
                    slug: self.slug.clone(),
                    value: self.release_date.clone(),
                }
            })?;
        Ok(Shoe {
            slug: self.slug,
            name: self.name,
            image_src: self.image_src,
            price: self.price,
            sale_price: self.sale_price,
            release_date,
            num_of_colors: self.num_of_colors,
        })
    }
}

/// Loads and validates the embedded catalog.
pub fn load_catalog() -> Result<Vec<Shoe>, CatalogError> {
    let raw = CatalogData::get(CATALOG_FILE).ok_or(CatalogError::MissingAsset(CATALOG_FILE))?;
    let text = std::str::from_utf8(raw.data.as_ref()).map_err(|_| CatalogError::Encoding)?;
    let shoes = parse_catalog(text)?;
    println!("[store] Loaded {} catalog entries.", shoes.len());
    Ok(shoes)
}

fn parse_catalog(text: &str) -> Result<Vec<Shoe>, CatalogError> {
    let entries: Vec<ShoeDto> = serde_json::from_str(text)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, dto)| dto.into_domain(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn embedded_catalog_loads_and_validates() {
        let shoes = load_catalog().expect("embedded catalog should decode");
        assert!(!shoes.is_empty());

        let slugs: HashSet<_> = shoes.iter().map(|shoe| shoe.slug.as_str()).collect();
        assert_eq!(slugs.len(), shoes.len(), "slugs must be unique");
    }

    #[test]
    fn missing_sale_price_decodes_as_none() {
        let shoes = parse_catalog(
            r#"[{"slug":"plain","name":"Plain","imageSrc":"x.jpg","price":5000,
                 "releaseDate":"2026-01-01T00:00:00Z","numOfColors":2}]"#,
        )
        .expect("entry without salePrice is valid");
        assert_eq!(shoes[0].sale_price, None);
    }

    #[test]
    fn bad_release_date_is_rejected() {
        let result = parse_catalog(
            r#"[{"slug":"broken","name":"Broken","imageSrc":"x.jpg","price":5000,
                 "releaseDate":"yesterday","numOfColors":1}]"#,
        );
        assert!(matches!(result, Err(CatalogError::InvalidDate { .. })));
    }

    #[test]
    fn empty_slug_is_rejected() {
        let result = parse_catalog(
            r#"[{"slug":"  ","name":"Nameless","imageSrc":"x.jpg","price":5000,
                 "releaseDate":"2026-01-01T00:00:00Z","numOfColors":1}]"#,
        );
        assert!(matches!(result, Err(CatalogError::EmptySlug { index: 0 })));
    }
}
