use std::path::Path;
use std::process::{Command, Stdio};
use crate::config::Config;
use crate::error::{Result, WatchError};

/// Hands selections to the outside world.
pub trait Launcher {
    /// Opens `location` in the media player. Does not wait for it.
    fn play(&self, location: &Path) -> Result<()>;
    /// Opens a web search for the literal query text.
    fn search(&self, query: &str) -> Result<()>;
    /// Shows `path` in a pager and waits until it exits.
    fn page(&self, path: &Path) -> Result<()>;
}

pub struct SystemLauncher {
    player: String,
    player_args: Vec<String>,
    browser: String,
    search_url: String,
    pager: String,
}

impl SystemLauncher {
    pub fn new(config: &Config) -> Self {
        Self {
            player: config.player.command.clone(),
            player_args: config.player.args.clone(),
            browser: config.search.browser.clone(),
            search_url: config.search.url.clone(),
            pager: config.pager.clone(),
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        build_search_url(&self.search_url, query)
    }
}

pub fn build_search_url(template: &str, query: &str) -> String {
    template.replace("{query}", &urlencoding::encode(query))
}

/// Splits a configured command line into program and leading arguments.
fn command_from(cmd_line: &str) -> Option<Command> {
    let mut parts = cmd_line.split_whitespace();
    let mut command = Command::new(parts.next()?);
    command.args(parts);
    Some(command)
}

fn spawn_detached(mut command: Command, program: &str) -> Result<()> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command.spawn().map_err(|source| WatchError::Launch {
        program: program.to_string(),
        source,
    })?;
    Ok(())
}

fn no_program(program: &str) -> WatchError {
    WatchError::Launch {
        program: program.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
    }
}

impl Launcher for SystemLauncher {
    fn play(&self, location: &Path) -> Result<()> {
        let mut command = command_from(&self.player).ok_or_else(|| no_program(&self.player))?;
        command.args(&self.player_args).arg(location);
        log::info!("Launching {} for {:?}", self.player, location);
        spawn_detached(command, &self.player)
    }

    fn search(&self, query: &str) -> Result<()> {
        let url = self.search_url(query);
        let mut command = command_from(&self.browser).ok_or_else(|| no_program(&self.browser))?;
        command.arg(&url);
        log::info!("Opening search {}", url);
        spawn_detached(command, &self.browser)
    }

    fn page(&self, path: &Path) -> Result<()> {
        let mut command = command_from(&self.pager).ok_or_else(|| no_program(&self.pager))?;
        command.arg(path);
        log::debug!("Paging {:?} with {}", path, self.pager);
        command.status().map_err(|source| WatchError::Launch {
            program: self.pager.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let url = build_search_url("https://thepiratebay.org/search/{query}/0/99/0", "the matrix & co");
        assert_eq!(url, "https://thepiratebay.org/search/the%20matrix%20%26%20co/0/99/0");
    }

    #[test]
    fn test_launcher_uses_configured_template() {
        let mut config = Config::default();
        config.search.url = "https://example.com/?q={query}".to_string();
        let launcher = SystemLauncher::new(&config);
        assert_eq!(launcher.search_url("dune"), "https://example.com/?q=dune");
    }

    #[test]
    fn test_empty_player_command_is_launch_error() {
        let mut config = Config::default();
        config.player.command = "   ".to_string();
        let launcher = SystemLauncher::new(&config);
        let result = launcher.play(Path::new("/m/movie.mkv"));
        assert!(matches!(result, Err(WatchError::Launch { .. })));
    }

    #[test]
    fn test_missing_player_binary_is_launch_error() {
        let mut config = Config::default();
        config.player.command = "definitely-not-a-real-player-binary".to_string();
        let launcher = SystemLauncher::new(&config);
        let result = launcher.play(Path::new("/m/movie.mkv"));
        assert!(matches!(result, Err(WatchError::Launch { .. })));
    }
}
