//! Integration tests for reading name columns from tables.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use usergen_ingest::{ColumnDetection, ColumnSelector, IngestError, RowFilter, read_name_table};

fn write_table(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write table");
    path
}

#[test]
fn auto_detected_column_skips_placeholders() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_table(
        &dir,
        "employees.csv",
        "Id,Employee,Email\n\
         1,Dilanka Kaushal Hewage,d@example.com\n\
         2,nan,\n\
         3,  ,x@example.com\n\
         4,NONE,\n\
         5, Ada Lovelace ,ada@example.com\n",
    );

    let table = read_name_table(&path).expect("read table");
    let choice = ColumnSelector::default().select(&table).expect("select");
    assert_eq!(choice.name, "Employee");
    assert_eq!(choice.detection, ColumnDetection::AutoDetected);

    let column = table.name_column(&choice, &RowFilter::default());
    assert_eq!(column.names, vec!["Dilanka Kaushal Hewage", "Ada Lovelace"]);
    assert_eq!(column.total_rows, 5);
    assert_eq!(column.skipped_rows, 3);
}

#[test]
fn explicit_column_in_sniffed_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_table(
        &dir,
        "staff.txt",
        "Staff;Full Name\nx;Grace Hopper\ny;Alan Turing\n",
    );

    let table = read_name_table(&path).expect("read table");
    let choice = ColumnSelector::Explicit("Full Name".to_string())
        .select(&table)
        .expect("select");
    let column = table.name_column(&choice, &RowFilter::default());
    assert_eq!(column.column, "Full Name");
    assert_eq!(column.names, vec!["Grace Hopper", "Alan Turing"]);
}

#[test]
fn quoted_cells_keep_commas() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_table(&dir, "quoted.csv", "name\n\"Hopper, Grace\"\n");

    let table = read_name_table(&path).expect("read table");
    let choice = ColumnSelector::default().select(&table).expect("select");
    let column = table.name_column(&choice, &RowFilter::default());
    assert_eq!(column.names, vec!["Hopper, Grace"]);
}

#[test]
fn missing_explicit_column_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_table(&dir, "people.csv", "Id,Email\n1,a@example.com\n");

    let table = read_name_table(&path).expect("read table");
    let result = ColumnSelector::Explicit("Name".to_string()).select(&table);
    let Err(IngestError::ColumnNotFound { column, available }) = result else {
        panic!("expected ColumnNotFound");
    };
    assert_eq!(column, "Name");
    assert_eq!(available, vec!["Id", "Email"]);
}

#[test]
fn workbook_first_sheet_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("employees.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Employee ID").expect("header");
    sheet.write_string(0, 1, "Full Name").expect("header");
    sheet.write_number(1, 0, 1001).expect("cell");
    sheet.write_string(1, 1, "Dilanka Kaushal Hewage").expect("cell");
    sheet.write_number(2, 0, 1002).expect("cell");
    sheet.write_string(2, 1, "nan").expect("cell");
    sheet.write_number(3, 0, 1003).expect("cell");
    sheet.write_number(4, 0, 1004).expect("cell");
    sheet.write_string(4, 1, " Ada Lovelace ").expect("cell");
    workbook
        .add_worksheet()
        .write_string(0, 0, "Name")
        .expect("second sheet");
    workbook.save(&path).expect("save workbook");

    let table = read_name_table(&path).expect("read table");
    assert_eq!(table.headers, vec!["Employee ID", "Full Name"]);
    assert_eq!(table.rows[0][0], "1001");

    let choice = ColumnSelector::default().select(&table).expect("select");
    assert_eq!(choice.name, "Full Name");
    assert_eq!(choice.detection, ColumnDetection::AutoDetected);

    let column = table.name_column(&choice, &RowFilter::default());
    assert_eq!(column.names, vec!["Dilanka Kaushal Hewage", "Ada Lovelace"]);
    assert_eq!(column.total_rows, 4);
    assert_eq!(column.skipped_rows, 2);
}

#[test]
fn corrupt_workbook_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_table(&dir, "employees.xlsx", "PK");

    let result = read_name_table(&path);
    assert!(matches!(result, Err(IngestError::Workbook { .. })));
}
