//! Table loading with size, encoding and header checks.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::column::ColumnChoice;
use crate::error::{IngestError, Result};
use crate::filter::RowFilter;

use super::format::TableFormat;
use super::header::{normalize_cell, normalize_header};
use super::workbook;

/// Maximum file size for table loading (500 MB default).
pub const MAX_TABLE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// A loaded table of people: normalized headers plus string cells.
#[derive(Debug, Clone)]
pub struct NameTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    /// Data rows, each padded to the header width.
    pub rows: Vec<Vec<String>>,
}

/// Usable values of the chosen name column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameColumn {
    /// Header of the column the names were read from.
    pub column: String,
    /// Trimmed names that passed the row filter, in row order.
    pub names: Vec<String>,
    /// Number of data rows in the table.
    pub total_rows: usize,
    /// Rows skipped as blank or placeholder values.
    pub skipped_rows: usize,
}

impl NameTable {
    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extracts the names in `choice`'s column, dropping rows rejected by `filter`.
    pub fn name_column(&self, choice: &ColumnChoice, filter: &RowFilter) -> NameColumn {
        let mut names = Vec::with_capacity(self.rows.len());
        let mut skipped_rows = 0usize;
        for row in &self.rows {
            let raw = row.get(choice.index).map_or("", String::as_str);
            match filter.accept(raw) {
                Some(name) => names.push(name.to_string()),
                None => skipped_rows += 1,
            }
        }
        NameColumn {
            column: choice.name.clone(),
            names,
            total_rows: self.rows.len(),
            skipped_rows,
        }
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reads a table of people.
///
/// Workbooks (`.xlsx`, `.xls`, `.ods`, ...) are read from their first sheet.
/// Other files are delimited text whose delimiter comes from the extension
/// (see [`TableFormat`]). UTF-8 text may carry a BOM; invalid UTF-8 is
/// decoded as Windows-1252, the encoding spreadsheet applications commonly
/// use for CSV exports. Rows shorter than the header are padded with empty
/// cells.
pub fn read_name_table(path: &Path) -> Result<NameTable> {
    let format = TableFormat::from_path(path);
    check_file_size_with_limit(path, MAX_TABLE_FILE_SIZE)?;

    let (headers, rows) = match format {
        TableFormat::Spreadsheet => {
            tracing::debug!(path = %path.display(), ?format, "reading workbook");
            let mut cells = workbook::read_first_sheet(path)?.into_iter();
            let headers = cells.next().unwrap_or_default();
            (headers, cells.collect())
        }
        _ => read_delimited(path, format)?,
    };

    let headers: Vec<String> = headers
        .iter()
        .map(String::as_str)
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let width = headers.len();
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            let mut row: Vec<String> =
                row.iter().map(String::as_str).map(normalize_cell).collect();
            if row.len() < width {
                row.resize(width, String::new());
            }
            row
        })
        .collect();

    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        columns = width,
        "table loaded"
    );

    Ok(NameTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

/// Raw header row and data rows, before normalization.
type RawTable = (Vec<String>, Vec<Vec<String>>);

fn read_delimited(path: &Path, format: TableFormat) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    let text = decode_text(path, &bytes)?;
    if text.trim().is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let header_line = text.lines().next().unwrap_or_default();
    let delimiter = format.delimiter(header_line).unwrap_or(b',');
    tracing::debug!(
        path = %path.display(),
        ?format,
        delimiter = %char::from(delimiter).escape_default(),
        "reading table"
    );

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| parse_error(path, source))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| parse_error(path, source))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok((headers, rows))
}

/// Decodes raw file bytes into text.
///
/// UTF-16 input is rejected; the byte order mark alone is not enough to
/// recover delimiters reliably from spreadsheet exports.
fn decode_text<'a>(path: &Path, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
    let body = match Encoding::for_bom(bytes) {
        Some((encoding, _)) if encoding != UTF_8 => {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: encoding.name(),
            });
        }
        Some((_, bom_length)) => &bytes[bom_length..],
        None => bytes,
    };

    match std::str::from_utf8(body) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => {
            tracing::warn!(
                path = %path.display(),
                "input is not valid UTF-8, decoding as Windows-1252"
            );
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(body);
            Ok(text)
        }
    }
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn parse_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::TableParse {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn create_temp_table(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table() {
        let file = create_temp_table(".csv", b"Id,Full  Name\n1,Ada Lovelace\n2,  Alan Turing \n");
        let table = read_name_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Id", "Full Name"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["2", "Alan Turing"]);
    }

    #[test]
    fn test_read_table_with_bom() {
        let file = create_temp_table(".csv", "\u{feff}Name\nAda\n".as_bytes());
        let table = read_name_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Name"]);
    }

    #[test]
    fn test_read_tsv_table() {
        let file = create_temp_table(".tsv", b"Name\tDept\nAda Lovelace\tMath\n");
        let table = read_name_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Name", "Dept"]);
        assert_eq!(table.rows[0], vec!["Ada Lovelace", "Math"]);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let file = create_temp_table(".csv", b"Id,Name,Email\n1\n2,Ada\n");
        let table = read_name_table(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.rows[1], vec!["2", "Ada", ""]);
    }

    #[test]
    fn test_windows_1252_fallback() {
        let file = create_temp_table(".csv", b"Name\nJos\xe9 N\xfa\xf1ez\n");
        let table = read_name_table(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["José Núñez"]);
    }

    #[test]
    fn test_utf16_rejected() {
        let file = create_temp_table(".csv", &[0xFF, 0xFE, b'N', 0, b'a', 0]);
        let result = read_name_table(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { encoding: "UTF-16LE", .. })
        ));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_table(".csv", b"  \n");
        let result = read_name_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyTable { .. })));
    }

    #[test]
    fn test_blank_header() {
        let file = create_temp_table(".csv", b" , \nAda,Lovelace\n");
        let result = read_name_table(file.path());

        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_name_table(Path::new("/nonexistent/people.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_table(".csv", b"Name\nAda\n");

        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 4),
            Err(IngestError::FileTooLarge { max_size: 4, .. })
        ));
    }

    #[test]
    fn test_read_workbook_table() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, " Full  Name ").unwrap();
        sheet.write_string(0, 1, "Id").unwrap();
        sheet.write_string(1, 0, "Ada Lovelace").unwrap();
        sheet.write_number(1, 1, 7).unwrap();
        sheet.write_number(2, 1, 8).unwrap();
        workbook.save(file.path()).unwrap();

        let table = read_name_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Full Name", "Id"]);
        assert_eq!(table.rows, vec![vec!["Ada Lovelace", "7"], vec!["", "8"]]);
    }

    #[test]
    fn test_corrupt_workbook() {
        let file = create_temp_table(".xlsx", b"PK\x03\x04 not a workbook");
        let result = read_name_table(file.path());

        assert!(matches!(result, Err(IngestError::Workbook { .. })));
    }
}
