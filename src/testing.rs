use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::executor::Launcher;
use crate::menu::Console;
use crate::model::{CatalogEntry, EntryKind, EpisodeEntry, SeasonEntry};
use crate::sources::CatalogSource;

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

/// In-memory catalog. Seasons keep insertion order so callers see them unsorted.
#[derive(Default)]
pub struct StaticCatalog {
    movies: Vec<CatalogEntry>,
    shows: BTreeMap<String, Vec<(String, Vec<String>)>>,
}

impl StaticCatalog {
    pub fn with_movie(mut self, title: &str) -> Self {
        let location = format!("/movies/{}.mkv", title);
        self.movies.push(CatalogEntry::new(title, location, EntryKind::Movie));
        self
    }

    pub fn with_show(mut self, show: &str, seasons: &[(&str, &[&str])]) -> Self {
        let seasons = seasons
            .iter()
            .map(|(s, eps)| (s.to_string(), eps.iter().map(|e| e.to_string()).collect()))
            .collect();
        self.shows.insert(show.to_string(), seasons);
        self
    }
}

impl CatalogSource for StaticCatalog {
    fn scan(&self) -> Result<Vec<CatalogEntry>> {
        let mut entries = self.movies.clone();
        entries.extend(
            self.shows
                .keys()
                .map(|show| CatalogEntry::new(show.clone(), format!("/tv/{}", show), EntryKind::Show)),
        );
        Ok(entries)
    }

    fn seasons(&self, show: &str) -> Result<Vec<SeasonEntry>> {
        Ok(self.shows[show]
            .iter()
            .map(|(s, _)| SeasonEntry {
                label: s.clone(),
                location: PathBuf::from(format!("/tv/{}/{}", show, s)),
            })
            .collect())
    }

    fn episodes(&self, show: &str, season: &str) -> Result<Vec<EpisodeEntry>> {
        let (_, eps) = self.shows[show].iter().find(|(s, _)| s == season).unwrap();
        Ok(eps
            .iter()
            .map(|e| EpisodeEntry::new(e.clone(), format!("/tv/{}/{}/{}", show, season, e)))
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Play(PathBuf),
    Search(String),
    Page(PathBuf),
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub launches: RefCell<Vec<Launch>>,
}

impl RecordingLauncher {
    pub fn launches(&self) -> Vec<Launch> {
        self.launches.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn play(&self, location: &Path) -> Result<()> {
        self.launches.borrow_mut().push(Launch::Play(location.to_path_buf()));
        Ok(())
    }

    fn search(&self, query: &str) -> Result<()> {
        self.launches.borrow_mut().push(Launch::Search(query.to_string()));
        Ok(())
    }

    fn page(&self, path: &Path) -> Result<()> {
        self.launches.borrow_mut().push(Launch::Page(path.to_path_buf()));
        Ok(())
    }
}
