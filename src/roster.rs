//! Student roster read from the class list file.
//!
//! The file is comma separated; the student's name is the second field.
//! A fixed number of leading lines (the header) is skipped.

use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

/// Leading lines treated as header.
pub const DEFAULT_SKIP_LINES: usize = 1;

const NAME_FIELD: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Parse roster text. Blank lines, unparseable records and records with
    /// a missing or empty name field are ignored.
    ///
    /// Each line is read on its own, so an unbalanced quote only loses the
    /// line it appears on.
    pub fn parse(text: &str, skip_lines: usize) -> Self {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(false).flexible(true).trim(Trim::All);

        let mut names = Vec::new();
        for (i, line) in text.lines().enumerate().skip(skip_lines) {
            if line.trim().is_empty() {
                continue;
            }

            let mut rdr = builder.from_reader(line.as_bytes());
            let rec = match rdr.records().next() {
                Some(Ok(r)) => r,
                Some(Err(e)) => {
                    log::warn!("roster line {} skipped: {e}", i + 1);
                    continue;
                }
                None => continue,
            };

            if let Some(name) = rec.get(NAME_FIELD)
                && !name.is_empty()
            {
                names.push(name.to_string());
            }
        }

        Self { names }
    }

    pub fn load(path: &Path, skip_lines: usize) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| AppError::RosterLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let roster = Self::parse(&text, skip_lines);
        log::debug!(
            "loaded {} students from {}",
            roster.names.len(),
            path.display()
        );
        Ok(roster)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "No,Nama,Jantina\n1,Aisyah binti Ahmad,P\n2, Muhammad Hakim ,L\n\n3,,L\n4\n5,Aisyah binti Ahmad,P\r\n";

    #[test]
    fn reads_second_field_in_file_order() {
        let r = Roster::parse(SAMPLE, 1);
        assert_eq!(
            r.names(),
            ["Aisyah binti Ahmad", "Muhammad Hakim", "Aisyah binti Ahmad"]
        );
    }

    #[test]
    fn skip_count_is_in_lines() {
        let r = Roster::parse(SAMPLE, 3);
        assert_eq!(r.names(), ["Aisyah binti Ahmad"]);

        let r = Roster::parse(SAMPLE, 0);
        assert_eq!(r.names()[0], "Nama");
    }

    #[test]
    fn quoted_names_keep_commas() {
        let r = Roster::parse("h\n1,\"Tan, Mei Ling\",P\n", 1);
        assert!(r.contains("Tan, Mei Ling"));
    }

    #[test]
    fn unbalanced_quote_stays_on_its_line() {
        let r = Roster::parse("Bil,Nama,Jantina\n1,\"Ali,L\n2,Siti,P\n3,Hakim,L\n", 1);
        assert!(r.contains("Siti"));
        assert!(r.contains("Hakim"));
        assert_eq!(&r.names()[r.len() - 2..], ["Siti", "Hakim"]);
        assert!(r.names().iter().all(|n| !n.contains('\n')));
    }

    #[test]
    fn empty_text_gives_empty_roster() {
        assert!(Roster::parse("", DEFAULT_SKIP_LINES).is_empty());
    }

    #[test]
    fn missing_file_is_load_error() {
        let err = Roster::load(Path::new("/nonexistent/murid.csv"), 1).unwrap_err();
        assert!(matches!(err, AppError::RosterLoad { .. }));
    }
}
