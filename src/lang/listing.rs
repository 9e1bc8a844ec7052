use super::{Error, Line, LineNumber};
use crate::error;
use std::collections::{btree_map::Values, BTreeMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Normalized program source
///
/// Lines are kept in ascending line-number order no matter what
/// order they were loaded in. Loading the same line number twice
/// replaces the earlier line.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, Line>,
}

impl Listing {
    pub fn parse(text: &str) -> Result<Listing> {
        let mut listing = Listing::default();
        for (index, line) in text.lines().enumerate() {
            if let Err(error) = listing.load_str(line) {
                if error.line_number().is_some() {
                    return Err(error);
                }
                return Err(error!(SyntaxError; &format!(
                    "INVALID LINE NUMBER IN LINE {} OF THE FILE",
                    index + 1
                )));
            }
        }
        Ok(listing)
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn insert(&mut self, line: Line) -> Option<Line> {
        self.source.insert(line.number(), line)
    }

    pub fn get(&self, number: LineNumber) -> Option<&Line> {
        self.source.get(&number)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    /// Blank lines are skipped.
    pub fn load_str(&mut self, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        self.insert(Line::new(line)?);
        Ok(())
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
