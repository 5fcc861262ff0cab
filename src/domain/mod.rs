//! Domain logic for the storefront catalog lives here.

pub mod app_state;
pub mod catalog;
pub mod variant;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use catalog::{sort_shoes, CatalogPrefs, Shoe, ShoeSort};
#[allow(unused_imports)]
pub use variant::{select_variant, Variant};
