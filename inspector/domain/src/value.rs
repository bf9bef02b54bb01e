use std::fmt;

/// A single decoded cell of a column.
///
/// Values the report does not treat specially (dates, timestamps, decimals,
/// binary, nested types) are carried as `Other` with the text the reader
/// rendered for them.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Other(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_i128(&self) -> Option<i128> {
        match self {
            CellValue::Int(v) => Some(i128::from(*v)),
            CellValue::UInt(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::UInt(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// Renders a float the way the report prints it everywhere: shortest
/// round-trip digits, always with a fractional part or exponent.
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "null"),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::UInt(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", format_float(*v)),
            CellValue::Text(v) => write!(f, "{}", v),
            CellValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Formats a run of values as a bracketed list, quoting text.
pub fn format_value_list(values: &[CellValue]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|value| match value {
            CellValue::Text(text) => format!("{:?}", text),
            other => other.to_string(),
        })
        .collect();
    format!("[{}]", items.join(", "))
}
