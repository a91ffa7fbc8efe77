use super::*;
use crate::excel::ExcelImporter;
use tempfile::TempDir;

// =========================================================================
// create_test_excel Tests
// =========================================================================

#[test]
fn test_create_test_excel_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("fixture.xlsx");

    create_test_excel(&output, 10, None).unwrap();

    let dataset = ExcelImporter::new(&output).import().unwrap();
    assert_eq!(dataset.row_count(), 10);
    assert_eq!(
        dataset.column_names(),
        vec!["Date", "Value1", "Value2", "Category"]
    );
}

#[test]
fn test_create_test_excel_custom_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("fixture.xlsx");

    create_test_excel(&output, 25, Some(1)).unwrap();

    let dataset = ExcelImporter::new(&output).import().unwrap();
    assert_eq!(dataset.row_count(), 25);
}

#[test]
fn test_create_test_excel_missing_dir_errors() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("public").join("fixture.xlsx");

    let result = create_test_excel(&output, 10, None);
    assert!(result.is_err());
    assert!(!output.exists());
}

// =========================================================================
// inspect Tests
// =========================================================================

#[test]
fn test_inspect_missing_file_does_not_panic() {
    let temp_dir = TempDir::new().unwrap();
    inspect(&temp_dir.path().join("missing.xlsx"), InspectMode::Extended);
}

#[test]
fn test_inspect_directory_does_not_panic() {
    let temp_dir = TempDir::new().unwrap();
    inspect(temp_dir.path(), InspectMode::Basic);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
