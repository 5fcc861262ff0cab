use serde::{Deserialize, Serialize};

use super::catalog::{CatalogPrefs, Shoe};

/// Shared application state held in a single root signal.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Catalog entries loaded once at startup from the embedded store.
    pub shoes: Vec<Shoe>,
    pub prefs: CatalogPrefs,
}

impl AppState {
    pub fn shoe_by_slug(&self, slug: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|shoe| shoe.slug == slug)
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.prefs = persisted.prefs;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            prefs: self.prefs.clone(),
        }
    }
}

/// Snapshot of the user-owned parts of [`AppState`] written to disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub prefs: CatalogPrefs,
}
