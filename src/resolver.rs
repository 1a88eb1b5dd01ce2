use std::io::{BufRead, Write};
use std::path::PathBuf;
use crate::error::{Result, WatchError};
use crate::menu::{Console, Menu};
use crate::model::{EpisodeEntry, SeasonEntry};
use crate::sources::CatalogSource;

/// Leading space-separated token of a file name as (digit-group length, value).
fn episode_key(file_name: &str) -> Option<(usize, f64)> {
    let token = file_name.split(' ').next().unwrap_or_default();
    token.parse::<f64>().ok().map(|value| (token.len(), value))
}

/// Orders episodes by their leading number when every file name has one,
/// comparing token length first so "10" lands after "9". Falls back to plain
/// lexicographic order otherwise.
pub fn sort_episodes(episodes: &mut Vec<EpisodeEntry>) {
    let keys: Option<Vec<(usize, f64)>> = episodes.iter().map(|e| episode_key(&e.file_name)).collect();
    let Some(keys) = keys else {
        episodes.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        return;
    };

    let mut keyed: Vec<((usize, f64), EpisodeEntry)> = keys.into_iter().zip(episodes.drain(..)).collect();
    keyed.sort_by(|(ka, _), (kb, _)| ka.0.cmp(&kb.0).then_with(|| ka.1.total_cmp(&kb.1)));
    episodes.extend(keyed.into_iter().map(|(_, episode)| episode));
}

fn choose_season<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    show: &str,
    mut seasons: Vec<SeasonEntry>,
) -> Result<SeasonEntry> {
    seasons.sort_by(|a, b| a.label.cmp(&b.label));
    if seasons.len() <= 1 {
        return seasons.pop().ok_or_else(|| WatchError::EmptyScope {
            what: "seasons",
            scope: show.to_string(),
        });
    }

    writeln!(console.output())?;
    let labels = seasons.iter().map(|s| s.label.clone()).collect();
    let menu = Menu::new("Season", labels);
    let row = menu.prompt_row(console, seasons.len(), "latest season")?;
    Ok(seasons.swap_remove(row - 1))
}

fn choose_episode<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    scope: String,
    mut episodes: Vec<EpisodeEntry>,
) -> Result<EpisodeEntry> {
    if episodes.is_empty() {
        return Err(WatchError::EmptyScope { what: "episodes", scope });
    }
    sort_episodes(&mut episodes);

    writeln!(console.output())?;
    let labels = episodes.iter().map(|e| e.label.clone()).collect();
    let menu = Menu::new("Episode", labels);
    let row = menu.prompt_row(console, episodes.len(), "latest episode")?;
    Ok(episodes.swap_remove(row - 1))
}

/// Walks season then episode selection for `show` and returns the file to play.
pub fn resolve_show<S, R, W>(source: &S, console: &mut Console<R, W>, show: &str) -> Result<PathBuf>
where
    S: CatalogSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let season = choose_season(console, show, source.seasons(show)?)?;
    log::debug!("Resolver: show='{}', season='{}'", show, season.label);

    let scope = format!("{}/{}", show, season.label);
    let episode = choose_episode(console, scope, source.episodes(show, &season.label)?)?;
    log::info!("Resolver: selected {:?}", episode.location);
    Ok(episode.location)
}
