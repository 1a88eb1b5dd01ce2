use crate::error::{Result, WatchError};
use crate::model::{CatalogEntry, EntryKind, EpisodeEntry, SeasonEntry};
use crate::sources::CatalogSource;
use std::fs;
use std::path::{Path, PathBuf};
use log::{info, debug, warn};

const MOVIES_DIR: &str = "Movies";
const TV_DIR: &str = "TV";

/// Media library laid out as `Movies/<year>/<file>` and
/// `TV/<show>/<season>/<episode>` under one root.
pub struct LibrarySource {
    root: PathBuf,
}

struct Listed {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Non-hidden children of `dir`, in directory order.
fn list_visible(dir: &Path) -> Result<Vec<Listed>> {
    let mut listed = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        listed.push(Listed {
            is_dir: path.is_dir(),
            name,
            path,
        });
    }
    Ok(listed)
}

fn movie_title(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

impl LibrarySource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(WatchError::MissingDataPath(root));
        }
        Ok(Self { root })
    }

    fn show_dir(&self, show: &str) -> PathBuf {
        self.root.join(TV_DIR).join(show)
    }

    /// Movies, newest year first, alphabetical within a year.
    pub fn movies(&self) -> Result<Vec<CatalogEntry>> {
        let movie_root = self.root.join(MOVIES_DIR);
        if !movie_root.is_dir() {
            warn!("No {} directory under {:?}", MOVIES_DIR, self.root);
            return Ok(vec![]);
        }

        let mut years: Vec<Listed> = list_visible(&movie_root)?
            .into_iter()
            .filter(|l| l.is_dir && !l.name.is_empty() && l.name.chars().all(|c| c.is_ascii_digit()))
            .collect();
        years.sort_by(|a, b| b.name.cmp(&a.name));

        let mut entries = Vec::new();
        for year in years {
            debug!("Scanning movies in {:?}", year.path);
            let mut films = list_visible(&year.path)?;
            films.sort_by(|a, b| a.name.cmp(&b.name));
            entries.extend(films.into_iter().map(|film| {
                CatalogEntry::new(movie_title(&film.name), film.path, EntryKind::Movie)
            }));
        }
        Ok(entries)
    }

    /// Show directories, alphabetical.
    pub fn shows(&self) -> Result<Vec<CatalogEntry>> {
        let tv_root = self.root.join(TV_DIR);
        if !tv_root.is_dir() {
            warn!("No {} directory under {:?}", TV_DIR, self.root);
            return Ok(vec![]);
        }

        let mut shows: Vec<Listed> = list_visible(&tv_root)?.into_iter().filter(|l| l.is_dir).collect();
        shows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(shows
            .into_iter()
            .map(|show| CatalogEntry::new(show.name, show.path, EntryKind::Show))
            .collect())
    }
}

impl CatalogSource for LibrarySource {
    fn scan(&self) -> Result<Vec<CatalogEntry>> {
        let mut entries = self.movies()?;
        let movie_count = entries.len();
        entries.extend(self.shows()?);
        info!(
            "LibrarySource: found {} movies and {} shows",
            movie_count,
            entries.len() - movie_count
        );
        Ok(entries)
    }

    fn seasons(&self, show: &str) -> Result<Vec<SeasonEntry>> {
        Ok(list_visible(&self.show_dir(show))?
            .into_iter()
            .filter(|l| l.is_dir)
            .map(|l| SeasonEntry { label: l.name, location: l.path })
            .collect())
    }

    fn episodes(&self, show: &str, season: &str) -> Result<Vec<EpisodeEntry>> {
        Ok(list_visible(&self.show_dir(show).join(season))?
            .into_iter()
            .filter(|l| !l.is_dir)
            .map(|l| EpisodeEntry::new(l.name, l.path))
            .collect())
    }
}
