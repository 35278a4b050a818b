//! Record-file parsing
//!
//! Turns the text of one GEDCOM-style record file into a [`FamilyTree`].
//!
//! # Pipeline
//!
//! - **Line decoding**: each line is split into `LEVEL [XREF] TAG [VALUE]`;
//!   lines that do not fit are skipped silently
//! - **Entity building**: [`RecordBuilder`] folds decoded lines into person
//!   and family records, opening and closing events by nesting level
//! - **Name parsing**: `NAME` values are split into given names and surname
//!
//! Only input-source failures (unreadable file, invalid UTF-8) are errors.
//!
//! # Example
//!
//! ```
//! let tree = kinstory::parse::parse_str("0 @I1@ INDI\n1 NAME Ann /Doyle/\n");
//! assert_eq!(tree.person("@I1@").unwrap().full_name(), "Ann Doyle");
//! ```

mod builder;
mod line;
mod name;

pub use builder::RecordBuilder;
pub use line::Line;
pub use name::PersonalName;

use crate::model::FamilyTree;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that abort a parse
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse in-memory record text
pub fn parse_str(content: &str) -> FamilyTree {
    let mut builder = RecordBuilder::new();
    for line in content.lines() {
        builder.feed(line);
    }
    finish(builder)
}

/// Parse line by line from any buffered reader
///
/// Stops at the first read or decoding failure; no partial tree is returned.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<FamilyTree> {
    let mut builder = RecordBuilder::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ParseError::Read {
            line: index + 1,
            source,
        })?;
        builder.feed(&line);
    }
    Ok(finish(builder))
}

/// Parse a record file from disk
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<FamilyTree> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}

fn finish(builder: RecordBuilder) -> FamilyTree {
    let skipped = builder.lines_skipped();
    let tree = builder.finish();
    info!(
        persons = tree.person_count(),
        families = tree.family_count(),
        skipped,
        "parsed record file"
    );
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_str_handles_crlf_and_bom() {
        let tree = parse_str("\u{feff}0 @I1@ INDI\r\n1 NAME Ann /Doyle/\r\n0 TRLR\r\n");
        assert_eq!(tree.person("@I1@").unwrap().full_name(), "Ann Doyle");
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let content = "0 @I1@ INDI\n1 BIRT\n2 DATE 1850\n0 @F1@ FAM\n1 HUSB @I1@\n";
        let from_reader = parse_reader(Cursor::new(content)).unwrap();
        let from_str = parse_str(content);

        assert_eq!(from_reader.person("@I1@"), from_str.person("@I1@"));
        assert_eq!(from_reader.family("@F1@"), from_str.family("@F1@"));
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"0 @I1@ INDI\n1 NAME \xff\xfe\n";
        let err = parse_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, ParseError::Read { line: 2, .. }));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/definitely/not/here.ged").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("here.ged"));
    }
}
