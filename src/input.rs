//! Record input: source selection, separator validation and CSV decoding.

use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::error::TableError;

/// A validated single-byte field separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator(u8);

impl Separator {
    /// Accept exactly one character. The CSV codec works on bytes, so the
    /// character must also be ASCII.
    pub fn parse(s: &str) -> Result<Self, TableError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(Separator(c as u8)),
            _ => Err(TableError::InvalidSeparator {
                separator: s.to_string(),
            }),
        }
    }

    pub fn byte(self) -> u8 {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator(b',')
    }
}

/// Open `file`, or stdin when no file is given.
///
/// A stdin attached to a terminal has nothing piped into it and is reported
/// as [`TableError::NoData`].
pub fn open_source(file: Option<&Path>) -> Result<Box<dyn Read>, TableError> {
    match file {
        Some(path) => {
            let file = File::open(path).map_err(|source| TableError::FileNotFound {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "reading records from file");
            Ok(Box::new(file))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(TableError::NoData);
            }
            tracing::debug!("reading records from stdin");
            Ok(Box::new(stdin))
        }
    }
}

/// Column titles and data records decoded from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records {
    pub titles: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Decode every record from `reader`. When `columns` is empty the first
/// record supplies the titles.
pub fn read_records<R: Read>(
    reader: R,
    separator: Separator,
    columns: &[String],
) -> Result<Records, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records().map(|result| {
        result
            .map(|record| record.iter().map(str::to_string).collect::<Vec<_>>())
            .map_err(malformed)
    });

    let titles = if columns.is_empty() {
        match records.next() {
            Some(Ok(titles)) => titles,
            Some(Err(_)) | None => return Err(TableError::MissingColumns),
        }
    } else {
        columns.to_vec()
    };

    let rows = records.collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(columns = titles.len(), rows = rows.len(), "records decoded");
    Ok(Records { titles, rows })
}

fn malformed(err: csv::Error) -> TableError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    TableError::MalformedRecord {
        line,
        details: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn separator_must_be_one_character() {
        assert_eq!(Separator::parse(";").unwrap().byte(), b';');
        assert_eq!(Separator::parse("\t").unwrap().byte(), b'\t');
        assert!(matches!(
            Separator::parse("::"),
            Err(TableError::InvalidSeparator { .. })
        ));
        assert!(Separator::parse("").is_err());
        assert!(Separator::parse("│").is_err());
    }

    #[test]
    fn non_ascii_separator_is_reported_as_such() {
        let err = Separator::parse("§").unwrap_err();
        assert!(matches!(&err, TableError::InvalidSeparator { separator } if separator == "§"));
        assert!(err.to_string().contains("single ASCII character"));
    }

    #[test]
    fn first_record_is_header_without_columns() {
        let data = "name,val\na,1\nb,2\n";
        let records = read_records(data.as_bytes(), Separator::default(), &[]).unwrap();
        assert_eq!(records.titles, strings(&["name", "val"]));
        assert_eq!(records.rows, vec![strings(&["a", "1"]), strings(&["b", "2"])]);
    }

    #[test]
    fn explicit_columns_keep_first_record_as_data() {
        let data = "a;1\nb;2\n";
        let columns = strings(&["name", "val"]);
        let records = read_records(data.as_bytes(), Separator::parse(";").unwrap(), &columns)
            .unwrap();
        assert_eq!(records.titles, columns);
        assert_eq!(records.rows.len(), 2);
    }

    #[test]
    fn empty_input_has_no_columns() {
        let err = read_records("".as_bytes(), Separator::default(), &[]).unwrap_err();
        assert!(matches!(err, TableError::MissingColumns));
    }

    #[test]
    fn ragged_records_are_decoded() {
        let data = "a,b,c\n1\n1,2,3,4\n";
        let records = read_records(data.as_bytes(), Separator::default(), &[]).unwrap();
        assert_eq!(records.rows[0], strings(&["1"]));
        assert_eq!(records.rows[1].len(), 4);
    }

    #[test]
    fn quoted_fields_are_unescaped() {
        let data = "h\n\"x, \"\"y\"\"\"\n";
        let records = read_records(data.as_bytes(), Separator::default(), &[]).unwrap();
        assert_eq!(records.rows[0], strings(&["x, \"y\""]));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let data: &[u8] = b"h\n\xff\xfe\n";
        let err = read_records(data, Separator::default(), &[]).unwrap_err();
        assert!(matches!(err, TableError::MalformedRecord { .. }));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = open_source(Some(Path::new("/definitely/not/here.csv"))).err().unwrap();
        assert!(matches!(err, TableError::FileNotFound { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
