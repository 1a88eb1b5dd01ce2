use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use rand::Rng;
use crate::config::Config;
use crate::error::{Result, WatchError};
use crate::executor::Launcher;
use crate::matcher::Weights;
use crate::menu::{Console, Menu, Selection};
use crate::random;
use crate::ranking::Ranking;
use crate::resolver;
use crate::sources::CatalogSource;

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Played(PathBuf),
    Searched(String),
}

/// One interactive run over a catalog.
pub struct Session<'a, S: ?Sized, L: ?Sized> {
    source: &'a S,
    launcher: &'a L,
    weights: Weights,
    min_display: usize,
    fallback_label: String,
}

impl<'a, S, L> Session<'a, S, L>
where
    S: CatalogSource + ?Sized,
    L: Launcher + ?Sized,
{
    pub fn new(config: &Config, source: &'a S, launcher: &'a L) -> Self {
        Self {
            source,
            launcher,
            weights: config.weights(),
            min_display: config.min_display,
            fallback_label: config.search.label.clone(),
        }
    }

    fn play<R: BufRead, W: Write>(&self, console: &mut Console<R, W>, location: &Path) -> Result<Outcome> {
        writeln!(console.output(), "Opening...")?;
        self.launcher.play(location)?;
        Ok(Outcome::Played(location.to_path_buf()))
    }

    /// Ranks the catalog against `query`, lets the user pick a title, and
    /// plays it (walking seasons and episodes for shows) or falls back to a
    /// web search.
    pub fn search<R: BufRead, W: Write>(&self, console: &mut Console<R, W>, query: &str) -> Result<Outcome> {
        let catalog = self.source.scan()?;
        let ranking = Ranking::rank(&catalog, query, &self.weights);
        let display_count = ranking.display_count(self.min_display, self.weights.sum());
        let titles = ranking
            .iter()
            .take(display_count)
            .map(|(_, ranked)| ranked.entry.title.clone())
            .collect();
        let menu = Menu::new("Title", titles)
            .with_display_count(display_count)
            .with_fallback(self.fallback_label.clone());

        // With nothing to rank only the fallback row is selectable, so it becomes the default.
        let (default, default_label) = if ranking.is_empty() {
            log::warn!("Catalog is empty, only the search fallback is available");
            writeln!(console.output(), "No titles found in library")?;
            (display_count + 1, "new search")
        } else {
            (1, "closest match")
        };

        let position = match menu.prompt(console, default, default_label)? {
            Selection::Fallback => {
                self.launcher.search(query)?;
                return Ok(Outcome::Searched(query.to_string()));
            }
            Selection::Row(position) => position,
        };

        let chosen = ranking
            .get(position)
            .map(|ranked| &ranked.entry)
            .ok_or_else(|| WatchError::InvalidSelection { input: position.to_string() })?;
        log::info!("Selected '{}' ({:?})", chosen.title, chosen.kind);

        if chosen.is_movie() {
            return self.play(console, &chosen.location);
        }
        let episode = resolver::resolve_show(self.source, console, &chosen.title)?;
        self.play(console, &episode)
    }

    /// Offers random movies until one is accepted, then plays it.
    pub fn random<R, W, G>(&self, console: &mut Console<R, W>, rng: &mut G) -> Result<Outcome>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let catalog = self.source.scan()?;
        let picked = random::pick_random(&catalog, console, rng)?;
        self.play(console, &picked.location)
    }
}
