use std::io::{BufRead, Write};
use crate::error::{Result, WatchError};

/// Line-based prompt/response over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `message` and reads one line with its line ending stripped.
    /// End of input is an error, never an empty answer.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WatchError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based row number.
    Row(usize),
    Fallback,
}

/// Numbered, tab-separated list of rows with an optional fallback row
/// numbered right after the last displayed slot.
#[derive(Debug, Clone)]
pub struct Menu {
    column: String,
    rows: Vec<String>,
    display_count: usize,
    fallback: Option<String>,
}

impl Menu {
    pub fn new(column: impl Into<String>, rows: Vec<String>) -> Self {
        let display_count = rows.len();
        Self {
            column: column.into(),
            rows,
            display_count,
            fallback: None,
        }
    }

    /// Reserves `display_count` slots even if fewer rows exist, so the
    /// fallback number only depends on the requested count.
    pub fn with_display_count(mut self, display_count: usize) -> Self {
        self.rows.truncate(display_count);
        self.display_count = display_count;
        self
    }

    pub fn with_fallback(mut self, label: impl Into<String>) -> Self {
        self.fallback = Some(label.into());
        self
    }

    pub fn max_selection(&self) -> usize {
        if self.fallback.is_some() {
            self.display_count + 1
        } else {
            self.display_count
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\t{}", self.column)?;
        for (idx, row) in self.rows.iter().enumerate() {
            writeln!(out, "{}\t{}", idx + 1, row)?;
        }
        if let Some(label) = &self.fallback {
            writeln!(out, "{}\t{}", self.display_count + 1, label)?;
        }
        Ok(())
    }

    /// Fallback row number, if the menu has one.
    pub fn fallback_position(&self) -> Option<usize> {
        self.fallback.as_ref().map(|_| self.display_count + 1)
    }

    fn read_choice<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        default: usize,
        default_label: &str,
    ) -> Result<usize> {
        self.render(console.output())?;
        let answer = console.ask(&format!("Select an option, or press enter for {}: ", default_label))?;
        parse_selection(&answer, self.max_selection(), default)
    }

    /// Renders the menu and reads one choice. Empty input picks `default`.
    pub fn prompt<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        default: usize,
        default_label: &str,
    ) -> Result<Selection> {
        let choice = self.read_choice(console, default, default_label)?;
        if Some(choice) == self.fallback_position() {
            return Ok(Selection::Fallback);
        }
        Ok(Selection::Row(choice))
    }

    /// Like [`Menu::prompt`] for menus without a fallback row: returns the
    /// 1-based row number directly.
    pub fn prompt_row<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        default: usize,
        default_label: &str,
    ) -> Result<usize> {
        debug_assert!(self.fallback.is_none());
        self.read_choice(console, default, default_label)
    }
}

/// Accepts an empty answer (→ `default`) or an integer in `1..=max`.
pub fn parse_selection(answer: &str, max: usize, default: usize) -> Result<usize> {
    if answer.is_empty() {
        return Ok(default);
    }
    let invalid = || WatchError::InvalidSelection { input: answer.to_string() };
    if !answer.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn rows(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("", 3, 2).unwrap(), 2);
        assert_eq!(parse_selection("3", 3, 1).unwrap(), 3);
        assert!(matches!(parse_selection("4", 3, 1), Err(WatchError::InvalidSelection { .. })));
        assert!(matches!(parse_selection("0", 3, 1), Err(WatchError::InvalidSelection { .. })));
        assert!(matches!(parse_selection("two", 3, 1), Err(WatchError::InvalidSelection { .. })));
        assert!(matches!(parse_selection("-1", 3, 1), Err(WatchError::InvalidSelection { .. })));
        assert!(matches!(parse_selection("+1", 3, 1), Err(WatchError::InvalidSelection { .. })));
    }

    #[test]
    fn test_render_tab_separated_with_fallback() {
        let menu = Menu::new("Title", rows(&["Inception", "Interstellar"])).with_fallback("<Search>");
        let mut out = Vec::new();
        menu.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\tTitle\n1\tInception\n2\tInterstellar\n3\t<Search>\n"
        );
    }

    #[test]
    fn test_fallback_follows_display_count_not_rows() {
        let menu = Menu::new("Title", rows(&["Inception"]))
            .with_display_count(5)
            .with_fallback("<Search>");
        assert_eq!(menu.max_selection(), 6);

        let mut console = console("6\n");
        assert_eq!(menu.prompt(&mut console, 1, "closest match").unwrap(), Selection::Fallback);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("6\t<Search>\n"));
        assert!(out.ends_with("Select an option, or press enter for closest match: "));
    }

    #[test]
    fn test_display_count_truncates_rows() {
        let menu = Menu::new("Title", rows(&["a", "b", "c"])).with_display_count(2);
        let mut out = Vec::new();
        menu.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\tTitle\n1\ta\n2\tb\n");
    }

    #[test]
    fn test_prompt_default_on_enter() {
        let menu = Menu::new("Season", rows(&["Season 1", "Season 2"]));
        let mut console = console("\n");
        assert_eq!(menu.prompt(&mut console, 2, "latest season").unwrap(), Selection::Row(2));
    }

    #[test]
    fn test_prompt_without_fallback_rejects_extra_row() {
        let menu = Menu::new("Season", rows(&["Season 1", "Season 2"]));
        assert_eq!(menu.fallback_position(), None);
        let mut console = console("3\n");
        let result = menu.prompt_row(&mut console, 2, "latest season");
        assert!(matches!(result, Err(WatchError::InvalidSelection { .. })));
    }

    #[test]
    fn test_prompt_row_returns_position() {
        let menu = Menu::new("Episode", rows(&["1 a", "2 b", "3 c"]));
        let mut console = console("1\n");
        assert_eq!(menu.prompt_row(&mut console, 3, "latest episode").unwrap(), 1);
        let mut console = self::console("\n");
        assert_eq!(menu.prompt_row(&mut console, 3, "latest episode").unwrap(), 3);
    }

    #[test]
    fn test_ask_strips_crlf_and_reports_eof() {
        let mut console = console("2\r\n");
        assert_eq!(console.ask("? ").unwrap(), "2");
        assert!(matches!(console.ask("? "), Err(WatchError::InputClosed)));
    }
}
