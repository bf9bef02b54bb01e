//! JUnit test template generation.
//!
//! The template seeds a hand-written reader test: it asserts the file's row
//! count, column count, column paths and the values of the first row.

use crate::column::ColumnData;
use crate::value::{format_float, CellValue};
use std::fmt;
use std::path::Path;

/// Ordered, first-match substring lookup from type name to Java type.
const TARGET_TYPES: [(&str, &str); 7] = [
    ("int32", "Integer"),
    ("int64", "Long"),
    ("float", "Float"),
    ("double", "Double"),
    ("string", "String"),
    ("binary", "String"),
    ("bool", "Boolean"),
];

const FALLBACK_TARGET_TYPE: &str = "Object";

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateColumn {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestTemplate {
    method_name: String,
    file_name: String,
    total_rows: usize,
    columns: Vec<TemplateColumn>,
    first_row: Option<Vec<CellValue>>,
}

impl TestTemplate {
    pub fn new(
        path: &Path,
        total_rows: usize,
        columns: &[ColumnData],
    ) -> Result<Self, TemplateError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| TemplateError::NoFileName(path.display().to_string()))?
            .to_string();
        let stem = Path::new(&file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&file_name);

        let first_row = (total_rows > 0).then(|| {
            columns
                .iter()
                .map(|c| c.values().first().cloned().unwrap_or(CellValue::Null))
                .collect()
        });

        Ok(Self {
            method_name: test_method_name(stem),
            file_name,
            total_rows,
            columns: columns
                .iter()
                .map(|c| TemplateColumn {
                    name: c.name().to_string(),
                    type_name: c.type_name().to_string(),
                })
                .collect(),
            first_row,
        })
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for TestTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@Test")?;
        writeln!(f, "void {}() throws IOException {{", self.method_name)?;
        writeln!(
            f,
            "    String filePath = TEST_DATA_DIR + {};",
            java_string(&self.file_name)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "    try (ParquetFileReader reader = new ParquetFileReader(filePath)) {{"
        )?;
        writeln!(f, "        RowColumnGroupIterator iterator = reader.rowIterator();")?;
        writeln!(f)?;
        writeln!(f, "        // Expected row count")?;
        writeln!(
            f,
            "        assertEquals({}L, reader.getTotalRowCount());",
            self.total_rows
        )?;
        writeln!(f)?;
        writeln!(f, "        // Expected columns")?;
        writeln!(
            f,
            "        assertEquals({}, reader.getSchema().getNumColumns());",
            self.columns.len()
        )?;
        for (i, column) in self.columns.iter().enumerate() {
            writeln!(
                f,
                "        assertEquals({}, reader.getSchema().getColumn({}).getPathString()); // {}",
                java_string(&column.name),
                i,
                target_type(&column.type_name)
            )?;
        }

        if let Some(first_row) = &self.first_row {
            writeln!(f)?;
            writeln!(f, "        // Verify first row values")?;
            writeln!(f, "        assertTrue(iterator.hasNext());")?;
            writeln!(f, "        RowColumnGroup firstRow = iterator.next();")?;
            for (i, value) in first_row.iter().enumerate() {
                writeln!(
                    f,
                    "        assertEquals({}, firstRow.getColumnValue({}));",
                    java_literal(value),
                    i
                )?;
            }
        }

        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

/// `sample_data` becomes `testSampleData`.
///
/// Any character that cannot appear in a Java identifier separates words just
/// like an underscore does.
pub fn test_method_name(stem: &str) -> String {
    let words: String = stem
        .split(|c: char| c == '_' || !c.is_alphanumeric())
        .map(capitalize)
        .collect();
    format!("test{}", words)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn target_type(type_name: &str) -> &'static str {
    let lowered = type_name.to_lowercase();
    TARGET_TYPES
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, target)| *target)
        .unwrap_or(FALLBACK_TARGET_TYPE)
}

pub fn java_literal(value: &CellValue) -> String {
    match value {
        CellValue::Null => "null".to_string(),
        CellValue::Text(text) => java_string(text),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Int(v) => {
            if i32::try_from(*v).is_ok() {
                v.to_string()
            } else {
                format!("{}L", v)
            }
        }
        CellValue::UInt(v) => {
            if *v <= i32::MAX as u64 {
                v.to_string()
            } else {
                format!("{}L", v)
            }
        }
        CellValue::Float(v) => format_float(*v),
        CellValue::Other(text) => java_string(text),
    }
}

fn java_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Path has no file name: {0}")]
    NoFileName(String),
}
