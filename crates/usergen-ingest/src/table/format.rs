//! Input format detection from file extensions.

use std::path::Path;

/// Extensions read as spreadsheet workbooks.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "xlsb", "xla", "xlam", "ods"];

/// Delimiters tried, in order, when sniffing a header line.
const SNIFF_DELIMITERS: &[u8] = b"\t;,|";

/// Layout of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma separated values.
    Csv,
    /// Tab separated values.
    Tsv,
    /// Delimiter chosen from the header line.
    Sniffed,
    /// Excel or OpenDocument workbook; the first sheet is read.
    Spreadsheet,
}

impl TableFormat {
    /// Chooses the format for `path` from its extension.
    ///
    /// Unknown extensions are treated as delimited text and sniffed.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Self::Csv,
            "tsv" | "tab" => Self::Tsv,
            ext if SPREADSHEET_EXTENSIONS.contains(&ext) => Self::Spreadsheet,
            _ => Self::Sniffed,
        }
    }

    /// Returns the field delimiter, inspecting `header_line` when sniffing.
    ///
    /// Workbooks have no delimiter.
    pub fn delimiter(self, header_line: &str) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Sniffed => Some(sniff_delimiter(header_line)),
            Self::Spreadsheet => None,
        }
    }
}

fn sniff_delimiter(header_line: &str) -> u8 {
    SNIFF_DELIMITERS
        .iter()
        .copied()
        .find(|delimiter| header_line.as_bytes().contains(delimiter))
        .unwrap_or(b',')
}
