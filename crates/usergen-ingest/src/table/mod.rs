//! Table reading for delimited text and workbooks.

mod format;
mod header;
mod reader;
mod workbook;

pub use format::TableFormat;
pub(crate) use header::normalize_header;
pub use reader::{
    MAX_TABLE_FILE_SIZE, NameColumn, NameTable, check_file_size_with_limit, read_name_table,
};
