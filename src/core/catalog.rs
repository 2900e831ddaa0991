// UNRaf Academy - core/catalog.rs
//
// The in-memory record catalogue: one collection per listing.
// A sample catalogue is embedded in the binary; a JSON file on disk may
// replace it.

use crate::core::model::{
    Algorithm, Article, CatalogResource, Dataset, DownloadRecord, Favorite, ForecastModel, Paper,
    SystemLog, Upload, UserAccount,
};
use crate::util::constants;
use crate::util::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Sample catalogue shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Every listing known to the portal. Missing sections deserialise as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub users: Vec<UserAccount>,
    pub resources: Vec<CatalogResource>,
    pub logs: Vec<SystemLog>,
    pub papers: Vec<Paper>,
    pub datasets: Vec<Dataset>,
    pub algorithms: Vec<Algorithm>,
    pub forecast_models: Vec<ForecastModel>,
    pub articles: Vec<Article>,
    pub downloads: Vec<DownloadRecord>,
    pub favorites: Vec<Favorite>,
    pub uploads: Vec<Upload>,
}

impl Catalog {
    /// Parse the embedded sample catalogue.
    pub fn builtin() -> Result<Self, CatalogError> {
        serde_json::from_str(BUILTIN_CATALOG).map_err(|source| CatalogError::Builtin { source })
    }

    /// Number of records in one listing.
    pub fn len_of(&self, listing: Listing) -> usize {
        match listing {
            Listing::Users => self.users.len(),
            Listing::Resources => self.resources.len(),
            Listing::Logs => self.logs.len(),
            Listing::Papers => self.papers.len(),
            Listing::Datasets => self.datasets.len(),
            Listing::Algorithms => self.algorithms.len(),
            Listing::ForecastModels => self.forecast_models.len(),
            Listing::Articles => self.articles.len(),
            Listing::Downloads => self.downloads.len(),
            Listing::Favorites => self.favorites.len(),
            Listing::Uploads => self.uploads.len(),
        }
    }

    /// Total records across all listings.
    pub fn total_records(&self) -> usize {
        Listing::all().iter().map(|l| self.len_of(*l)).sum()
    }
}

/// Load a catalogue from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let metadata = std::fs::metadata(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CATALOG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let catalog: Catalog = serde_json::from_str(&content).map_err(|e| CatalogError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        records = catalog.total_records(),
        "Loaded catalogue"
    );
    Ok(catalog)
}

// =============================================================================
// Listing
// =============================================================================

/// Names one listing of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    Users,
    Resources,
    Logs,
    Papers,
    Datasets,
    Algorithms,
    ForecastModels,
    Articles,
    Downloads,
    Favorites,
    Uploads,
}

impl Listing {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Listing] {
        &[
            Listing::Users,
            Listing::Resources,
            Listing::Logs,
            Listing::Papers,
            Listing::Datasets,
            Listing::Algorithms,
            Listing::ForecastModels,
            Listing::Articles,
            Listing::Downloads,
            Listing::Favorites,
            Listing::Uploads,
        ]
    }

    /// Command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Listing::Users => "users",
            Listing::Resources => "resources",
            Listing::Logs => "logs",
            Listing::Papers => "papers",
            Listing::Datasets => "datasets",
            Listing::Algorithms => "algorithms",
            Listing::ForecastModels => "models",
            Listing::Articles => "news",
            Listing::Downloads => "downloads",
            Listing::Favorites => "favorites",
            Listing::Uploads => "uploads",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Listing::Users => "Users",
            Listing::Resources => "Resources",
            Listing::Logs => "System logs",
            Listing::Papers => "Papers",
            Listing::Datasets => "Datasets",
            Listing::Algorithms => "Algorithms",
            Listing::ForecastModels => "UNRafCast models",
            Listing::Articles => "News",
            Listing::Downloads => "Download history",
            Listing::Favorites => "Favourites",
            Listing::Uploads => "Uploads",
        }
    }

    /// Look up a listing by its command-line name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Listing> {
        let lower = name.to_lowercase();
        Listing::all().iter().copied().find(|l| l.name() == lower)
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.users.len(), 6);
        assert_eq!(catalog.articles.len(), 6);
        for listing in Listing::all() {
            assert!(catalog.len_of(*listing) > 0, "{listing} is empty");
        }
    }

    #[test]
    fn test_listing_names_round_trip() {
        for listing in Listing::all() {
            assert_eq!(Listing::from_name(listing.name()), Some(*listing));
        }
        assert_eq!(Listing::from_name("NEWS"), Some(Listing::Articles));
        assert_eq!(Listing::from_name("nope"), None);
    }

    #[test]
    fn test_load_partial_catalog_defaults_missing_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{ "favorites": [ { "id": 1, "name": "X", "author": "Y", "kind": "Dataset" } ] }"#,
        )
        .unwrap();
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.favorites.len(), 1);
        assert!(catalog.users.is_empty());
        assert_eq!(catalog.total_records(), 1);
    }

    #[test]
    fn test_load_malformed_catalog_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, b"{ not json").unwrap();
        assert!(matches!(
            load_catalog(&path),
            Err(CatalogError::JsonParse { .. })
        ));
    }

    #[test]
    fn test_load_missing_catalog_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load_catalog(&path), Err(CatalogError::Io { .. })));
    }
}
