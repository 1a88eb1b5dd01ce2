use crate::error::Result;
use crate::model::{CatalogEntry, EpisodeEntry, SeasonEntry};

/// Provides the catalog for one session. Show lookups take the show and
/// season as explicit arguments.
pub trait CatalogSource {
    fn scan(&self) -> Result<Vec<CatalogEntry>>;
    fn seasons(&self, show: &str) -> Result<Vec<SeasonEntry>>;
    fn episodes(&self, show: &str, season: &str) -> Result<Vec<EpisodeEntry>>;
}

pub mod library;
