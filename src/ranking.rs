use crate::matcher::{self, Weights};
use crate::model::{CatalogEntry, RankedEntry};

/// Catalog entries ordered by similarity to one query. Positions are 1-based.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Scores every entry and sorts descending. The sort is stable, so ties
    /// keep catalog order.
    pub fn rank(catalog: &[CatalogEntry], query: &str, weights: &Weights) -> Self {
        let mut entries: Vec<RankedEntry> = catalog
            .iter()
            .map(|entry| RankedEntry {
                similarity: matcher::score(&entry.title, query, weights),
                entry: entry.clone(),
            })
            .collect();

        entries.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        log::debug!("Ranking: query='{}', ranked_count={}", query, entries.len());
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&RankedEntry> {
        position.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &RankedEntry)> {
        self.entries.iter().enumerate().map(|(idx, e)| (idx + 1, e))
    }

    /// Number of rows to show: at least `min_display`, more when many
    /// entries reach `cutoff`.
    pub fn display_count(&self, min_display: usize, cutoff: f64) -> usize {
        let strong = self.entries.iter().filter(|e| e.similarity >= cutoff).count();
        strong.max(min_display)
    }
}
