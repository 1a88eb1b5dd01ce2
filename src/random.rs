use std::io::{BufRead, Write};
use rand::Rng;
use rand::seq::SliceRandom;
use crate::error::{Result, WatchError};
use crate::menu::Console;
use crate::model::CatalogEntry;

/// Offers random movies until one is accepted.
///
/// The loop has no retry limit: it only ends on acceptance, on an invalid
/// answer, or when input closes (e.g. Ctrl-D).
pub fn pick_random<'a, R, W, G>(
    catalog: &'a [CatalogEntry],
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<&'a CatalogEntry>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let movies: Vec<&CatalogEntry> = catalog.iter().filter(|e| e.is_movie()).collect();

    loop {
        let Some(candidate) = movies.choose(rng) else {
            return Err(WatchError::EmptyScope {
                what: "movies",
                scope: "library".to_string(),
            });
        };

        let answer = console.ask(&format!("{}? Y/[N]", candidate.title))?;
        let answer = answer.to_lowercase();
        if answer.starts_with('y') {
            log::info!("Random pick accepted: {:?}", candidate.location);
            return Ok(*candidate);
        }
        if !(answer.is_empty() || answer.starts_with('n')) {
            return Err(WatchError::InvalidSelection { input: answer });
        }
        log::debug!("Random pick rejected: {}", candidate.title);
    }
}
