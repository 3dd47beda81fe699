//! Flat high-score list, one `"<score> <name>"` record per line.

use std::io::{BufRead, Write};

use crate::error::ScoreError;

/// One persisted result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub score: u32,
    pub name: String,
}

/// Score records kept in descending score order. Ties keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBook {
    records: Vec<ScoreRecord>,
}

impl ScoreBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads records from `reader`, skipping blank lines, and sorts them.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Malformed`] for a line that is not an unsigned
    /// score followed by a single name, or [`ScoreError::Io`] if reading
    /// fails.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, ScoreError> {
        let mut records = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || ScoreError::Malformed {
                line: i + 1,
                content: line.clone(),
            };
            let mut tokens = line.split_whitespace();
            let (Some(score), Some(name), None) = (tokens.next(), tokens.next(), tokens.next()) else {
                return Err(malformed());
            };
            let score = score.parse::<u32>().map_err(|_| malformed())?;
            records.push(ScoreRecord {
                score,
                name: name.to_owned(),
            });
        }
        records.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(Self { records })
    }

    /// Writes every record on its own line.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Io`] if writing fails.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), ScoreError> {
        for r in &self.records {
            writeln!(writer, "{} {}", r.score, r.name)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Adds a result below every record with an equal or higher score.
    /// A score of 0 is not kept; returns whether the record was added.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidName`] if `name` is empty or contains
    /// whitespace.
    pub fn record(&mut self, score: u32, name: &str) -> Result<bool, ScoreError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ScoreError::InvalidName(name.to_owned()));
        }
        if score == 0 {
            return Ok(false);
        }
        let at = self.records.partition_point(|r| r.score >= score);
        self.records.insert(
            at,
            ScoreRecord {
                score,
                name: name.to_owned(),
            },
        );
        Ok(true)
    }

    /// The best `n` records.
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }

    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
