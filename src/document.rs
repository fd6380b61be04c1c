use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{HuffmanError, Result};
use crate::symbol::{LINE_TERMINATOR, Symbol};

/// A text held in memory as its lines.
///
/// The symbol sequence of a document is every line's symbols with
/// [`LINE_TERMINATOR`] placed between consecutive lines. No terminator follows
/// the last line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Vec<Symbol>>,
}

impl Document {
    /// Splits `text` into lines the way a line reader does: `\n` and `\r\n`
    /// both end a line and a single trailing newline does not start a new one.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.chars().collect()).collect(),
        }
    }

    /// Rebuilds lines from a decoded symbol sequence, starting a new line after
    /// every terminator.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        if symbols.is_empty() {
            return Self::default();
        }

        let lines = symbols
            .split(|&s| s == LINE_TERMINATOR)
            .map(<[Symbol]>::to_vec)
            .collect();
        Self { lines }
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading document from {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| HuffmanError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::from_text(&text);
        debug!(
            "Read {} lines ({} symbols)",
            document.lines.len(),
            document.symbol_count()
        );
        Ok(document)
    }

    pub fn lines(&self) -> &[Vec<Symbol>] {
        &self.lines
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.lines.iter().enumerate().flat_map(|(i, line)| {
            let terminator = (i > 0).then_some(LINE_TERMINATOR);
            terminator.into_iter().chain(line.iter().copied())
        })
    }

    pub fn symbol_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(Vec::len).sum();
        chars + self.lines.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_count() == 0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
