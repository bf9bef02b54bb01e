use crate::value::CellValue;
use std::cmp::Ordering;
use std::collections::HashSet;

pub const SAMPLE_SIZE: usize = 5;
const TAIL_SAMPLE_THRESHOLD: usize = 10;
const NUMERIC_TYPES: [&str; 4] = ["int32", "int64", "float", "double"];

/// All values of one column of the loaded table, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnData {
    name: String,
    type_name: String,
    values: Vec<CellValue>,
}

impl ColumnData {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        values: Vec<CellValue>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    pub fn is_numeric(&self) -> bool {
        NUMERIC_TYPES.contains(&self.type_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    pub min: CellValue,
    pub max: CellValue,
    /// Present only when more than one non-null value exists.
    pub average: Option<f64>,
}

/// Statistics that only exist for a column holding at least one value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDetails {
    /// Distinct non-null values, compared by their text form.
    pub unique_count: usize,
    pub numeric: Option<NumericStats>,
    pub first: Vec<CellValue>,
    pub last: Option<Vec<CellValue>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub index: usize,
    pub name: String,
    pub type_name: String,
    pub length: usize,
    pub null_count: usize,
    pub details: Option<ValueDetails>,
}

impl ColumnSummary {
    pub fn from_column(index: usize, column: &ColumnData) -> Self {
        let values = column.values();

        let details = if values.is_empty() {
            None
        } else {
            let unique_count = values
                .iter()
                .filter(|v| !v.is_null())
                .map(|v| v.to_string())
                .collect::<HashSet<_>>()
                .len();

            let numeric = if column.is_numeric() {
                numeric_stats(values)
            } else {
                None
            };

            let first = values.iter().take(SAMPLE_SIZE).cloned().collect();
            let last = (values.len() > TAIL_SAMPLE_THRESHOLD)
                .then(|| values[values.len() - SAMPLE_SIZE..].to_vec());

            Some(ValueDetails {
                unique_count,
                numeric,
                first,
                last,
            })
        };

        Self {
            index,
            name: column.name().to_string(),
            type_name: column.type_name().to_string(),
            length: column.len(),
            null_count: column.null_count(),
            details,
        }
    }
}

fn compare_numeric(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_i128(), b.as_i128()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => {
            let x = a.as_f64().unwrap_or(f64::NAN);
            let y = b.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
    }
}

/// Min, max and mean over the non-null numeric values of a column.
pub fn numeric_stats(values: &[CellValue]) -> Option<NumericStats> {
    let numbers: Vec<&CellValue> = values.iter().filter(|v| v.as_f64().is_some()).collect();

    let min = numbers.iter().copied().min_by(|a, b| compare_numeric(a, b))?;
    let max = numbers.iter().copied().max_by(|a, b| compare_numeric(a, b))?;

    let average = if numbers.len() > 1 {
        let count = numbers.len() as f64;
        let integers: Option<Vec<i128>> = numbers.iter().map(|v| v.as_i128()).collect();
        let sum = match integers {
            Some(integers) => integers.iter().sum::<i128>() as f64,
            None => numbers.iter().filter_map(|v| v.as_f64()).sum::<f64>(),
        };
        Some(sum / count)
    } else {
        None
    };

    Some(NumericStats {
        min: min.clone(),
        max: max.clone(),
        average,
    })
}
