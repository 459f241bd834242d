//! In-memory snapshot files.
//!
//! A snapshot is read fully before any row is validated: the header is kept
//! alongside the raw data records so each analysis can resolve its own
//! columns against it.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::record::Field;
use crate::schema::ColumnIndex;

/// How raw snapshot text is split into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    pub delimiter: u8,
    /// Honor double-quoted cells. Off by default so that a delimiter inside a
    /// cell shifts the row's width and gets the row rejected.
    pub quoting: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quoting: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    name: String,
    header: StringRecord,
    rows: Vec<StringRecord>,
}

impl Snapshot {
    /// Reads the snapshot at `path`.
    pub fn load(path: impl AsRef<Path>, options: &ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(path.display().to_string(), file, options)
    }

    /// Reads a snapshot from any byte source; `name` labels it in errors and logs.
    ///
    /// Records that are not valid UTF-8 are dropped like any other unusable
    /// row. Other read failures propagate.
    pub fn from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
        options: &ReaderOptions,
    ) -> Result<Self> {
        let name = name.into();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(options.delimiter)
            .quoting(options.quoting)
            .from_reader(reader);

        let header = rdr.headers()?.clone();
        let mut rows = Vec::new();
        let mut undecodable = 0usize;

        for result in rdr.records() {
            match result {
                Ok(record) => rows.push(record),
                Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => undecodable += 1,
                Err(e) => return Err(e.into()),
            }
        }

        debug!(
            snapshot = %name,
            columns = header.len(),
            rows = rows.len(),
            undecodable,
            "Snapshot loaded"
        );

        Ok(Self { name, header, rows })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Resolves `required` against this snapshot's header.
    pub fn columns(&self, required: &[Field]) -> Result<ColumnIndex> {
        ColumnIndex::resolve(&self.name, &self.header, required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    fn parse(text: &str) -> Snapshot {
        Snapshot::from_reader("test", text.as_bytes(), &ReaderOptions::default()).unwrap()
    }

    #[test]
    fn test_from_reader_keeps_header_and_rows() {
        let snap = parse("room_id,host_id,price\n5,10,100.0\n6,10,150.0\n");
        assert_eq!(snap.header().len(), 3);
        assert_eq!(snap.rows().len(), 2);
        assert_eq!(&snap.rows()[1][2], "150.0");
    }

    #[test]
    fn test_ragged_rows_are_kept_for_validation() {
        let snap = parse("a,b,c\n1,2\n1,2,3,4\n");
        let widths: Vec<_> = snap.rows().iter().map(|r| r.len()).collect();
        assert_eq!(widths, vec![2, 4]);
    }

    #[test]
    fn test_undecodable_row_is_skipped() {
        let snap = Snapshot::from_reader(
            "test",
            &b"room_id,host_id\n5,10\n\xff\xfe,10\n6,10\n"[..],
            &ReaderOptions::default(),
        )
        .unwrap();

        let room_ids: Vec<_> = snap.rows().iter().map(|r| r[0].to_string()).collect();
        assert_eq!(room_ids, vec!["5", "6"]);
    }

    #[test]
    fn test_undecodable_header_is_csv_error() {
        let err = Snapshot::from_reader(
            "test",
            &b"room\xff_id,host_id\n5,10\n"[..],
            &ReaderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Csv(_)));
    }

    #[test]
    fn test_quotes_are_literal_by_default() {
        let snap = parse("neighborhood,price\n\"Bed-Stuy, North\",90\n");
        assert_eq!(snap.rows()[0].len(), 3);
    }

    #[test]
    fn test_quoting_option_keeps_embedded_delimiter() {
        let options = ReaderOptions {
            quoting: true,
            ..Default::default()
        };
        let snap = Snapshot::from_reader(
            "test",
            "neighborhood,price\n\"Bed-Stuy, North\",90\n".as_bytes(),
            &options,
        )
        .unwrap();
        assert_eq!(&snap.rows()[0][0], "Bed-Stuy, North");
    }

    #[test]
    fn test_custom_delimiter() {
        let options = ReaderOptions {
            delimiter: b';',
            ..Default::default()
        };
        let snap = Snapshot::from_reader("test", "a;b\n1;2\n".as_bytes(), &options).unwrap();
        assert_eq!(snap.header().len(), 2);
        assert_eq!(&snap.rows()[0][1], "2");
    }

    #[test]
    fn test_empty_input_has_no_usable_columns() {
        let snap = parse("");
        let err = snap.columns(&[Field::Price]).unwrap_err();
        assert!(matches!(err, AnalysisError::Schema { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Snapshot::load("does/not/exist.csv", &ReaderOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
