//! Name ingestion utilities.
//!
//! This crate loads tables of people (Excel/OpenDocument workbooks or
//! CSV/TSV exports), picks the column holding full names, and yields the
//! usable name values for candidate generation.
//!
//! # Features
//!
//! - **Table Loading**: Read workbooks, or delimited files with BOM, encoding
//!   and size checks
//! - **Column Selection**: Explicit column name or header auto-detection
//! - **Row Filtering**: Skip blank and placeholder values such as `nan`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use usergen_ingest::{ColumnSelector, RowFilter, read_name_table};
//!
//! let table = read_name_table(Path::new("employees.csv"))?;
//! let choice = ColumnSelector::default().select(&table)?;
//! let names = table.name_column(&choice, &RowFilter::default());
//! ```

mod column;
mod error;
mod filter;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use table::{
    MAX_TABLE_FILE_SIZE, NameColumn, NameTable, TableFormat, check_file_size_with_limit,
    read_name_table,
};

// === Column Selection ===
pub use column::{ColumnChoice, ColumnDetection, ColumnSelector, DEFAULT_NAME_HEADERS};

// === Row Filtering ===
pub use filter::{DEFAULT_PLACEHOLDERS, RowFilter};
