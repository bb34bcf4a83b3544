//! Workbook loading for Excel and OpenDocument files.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};

/// Reads the first worksheet of `path` as rows of rendered cells.
///
/// The first row of the used range is the header row. Empty cells render
/// as empty strings; numbers use their shortest display form, so an id
/// stored as `1001.0` reads back as `1001`.
pub(super) fn read_first_sheet(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path).map_err(|source| workbook_error(path, source))?;

    let Some(sheet) = workbook.sheet_names().into_iter().next() else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    tracing::debug!(path = %path.display(), sheet = %sheet, "reading worksheet");

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| workbook_error(path, source))?;
    if range.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    Ok(range
        .rows()
        .map(|row| row.iter().map(render_cell).collect())
        .collect())
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn workbook_error(path: &Path, source: calamine::Error) -> IngestError {
    IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    }
}
