use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Movie,
    Show,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub title: String,       // Display title (file name up to the first '.')
    pub location: PathBuf,   // Movie file, or the show directory
    pub kind: EntryKind,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, location: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            kind,
        }
    }

    pub fn is_movie(&self) -> bool {
        self.kind == EntryKind::Movie
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub entry: CatalogEntry,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonEntry {
    pub label: String,
    pub location: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeEntry {
    pub file_name: String, // Sort key, extension included
    pub label: String,
    pub location: PathBuf,
}

impl EpisodeEntry {
    pub fn new(file_name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        let file_name = file_name.into();
        let label = match file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => file_name.clone(),
        };
        Self {
            file_name,
            label,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_label_drops_last_extension() {
        let ep = EpisodeEntry::new("1 pilot.part1.mkv", "/tv/Foo/Season 1/1 pilot.part1.mkv");
        assert_eq!(ep.label, "1 pilot.part1");
        assert_eq!(ep.file_name, "1 pilot.part1.mkv");
    }

    #[test]
    fn test_episode_label_without_extension() {
        let ep = EpisodeEntry::new("finale", "/tv/Foo/Season 1/finale");
        assert_eq!(ep.label, "finale");
    }
}
