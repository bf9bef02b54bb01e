use arrow::array::{ArrayRef, Int64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Arc;

fn parquet_inspect(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parquet-inspect"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run parquet-inspect")
}

fn write_sample(dir: &Path, rows: i64) -> PathBuf {
    let path = dir.join("sample_data.parquet");
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, true),
    ]));
    let ids: Vec<i64> = (1..=rows).collect();
    let names: Vec<String> = ids.iter().map(|i| format!("user{}", i)).collect();
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(ids)),
        Arc::new(StringArray::from(names)),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

    let file = File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
    path
}

#[test]
fn missing_argument_prints_usage() {
    let output = parquet_inspect(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Usage:"), "{stdout}");
}

#[test]
fn nonexistent_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.parquet");
    let output = parquet_inspect(&[path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Error: File not found:"), "{stdout}");
}

#[test]
fn corrupt_file_prints_error_and_trace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.parquet");
    std::fs::write(&path, b"not parquet at all").unwrap();

    let output = parquet_inspect(&[path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Error inspecting file:"), "{stdout}");
    assert!(stderr.contains("Caused by:"), "{stderr}");
}

#[test]
fn valid_file_prints_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path(), 3);

    let output = parquet_inspect(&[path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Number of rows: 3"));
    assert!(stdout.contains("Number of columns: 2"));
    assert!(stdout.contains("void testSampleData() throws IOException {"));
    assert!(!stdout.contains("COLUMN CHUNK DETAILS"));
}

#[test]
fn max_rows_argument_limits_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path(), 30);

    let output = parquet_inspect(&[path.to_str().unwrap(), "6", "--chunks"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Showing first 3 and last 3 rows:"));
    assert!(stdout.contains("user3 "));
    assert!(!stdout.contains("user4 "));
    assert!(stdout.contains("user28"));
    assert!(stdout.contains("### COLUMN CHUNK DETAILS (First Row Group) ###"));
}

#[test]
fn zero_max_rows_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path(), 3);

    let output = parquet_inspect(&[path.to_str().unwrap(), "0"]);

    assert!(!output.status.success());
}
