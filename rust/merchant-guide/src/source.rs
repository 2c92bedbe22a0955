//! Where notes come from: a file, or standard input.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::GuideResult;

/// Read one note per line, trimmed, skipping blank lines.
pub fn read_notes<R: BufRead>(reader: R) -> GuideResult<Vec<String>> {
    let mut notes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let note = line.trim();
        if !note.is_empty() {
            notes.push(note.to_string());
        }
    }
    Ok(notes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSource {
    Stdin,
    File(PathBuf),
}

impl NoteSource {
    /// `-` means standard input; anything else is a file path.
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            NoteSource::Stdin
        } else {
            NoteSource::File(path.to_path_buf())
        }
    }

    pub fn read(&self) -> GuideResult<Vec<String>> {
        match self {
            NoteSource::Stdin => read_notes(io::stdin().lock()),
            NoteSource::File(path) => read_notes(BufReader::new(File::open(path)?)),
        }
    }
}

impl fmt::Display for NoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSource::Stdin => write!(f, "standard input"),
            NoteSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuideError;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn test_read_notes_trims_and_skips_blank_lines() -> TestResult {
        let input = "glob is I\n\n   prok is V  \r\n\t\nhow much is glob prok ?";
        assert_eq!(
            read_notes(input.as_bytes())?,
            vec!["glob is I", "prok is V", "how much is glob prok ?"]
        );
        Ok(())
    }

    #[test]
    fn test_source_from_path() {
        assert_eq!(NoteSource::from_path(Path::new("-")), NoteSource::Stdin);
        assert_eq!(
            NoteSource::from_path(Path::new("notes.txt")),
            NoteSource::File("notes.txt".into())
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = NoteSource::File("does/not/exist.txt".into());
        assert!(matches!(source.read(), Err(GuideError::Io(_))));
    }
}
