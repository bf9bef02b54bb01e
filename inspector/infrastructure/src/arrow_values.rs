use arrow::array::{Array, AsArray};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type,
    Int8Type, TimeUnit, UInt16Type, UInt32Type, UInt64Type, UInt8Type,
};
use arrow::error::ArrowError;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use inspector_domain::CellValue;

/// Names an arrow type the way the report and the template type table expect.
pub fn type_name(data_type: &DataType) -> String {
    match data_type {
        DataType::Null => "null".to_string(),
        DataType::Boolean => "bool".to_string(),
        DataType::Int8 => "int8".to_string(),
        DataType::Int16 => "int16".to_string(),
        DataType::Int32 => "int32".to_string(),
        DataType::Int64 => "int64".to_string(),
        DataType::UInt8 => "uint8".to_string(),
        DataType::UInt16 => "uint16".to_string(),
        DataType::UInt32 => "uint32".to_string(),
        DataType::UInt64 => "uint64".to_string(),
        DataType::Float16 => "halffloat".to_string(),
        DataType::Float32 => "float".to_string(),
        DataType::Float64 => "double".to_string(),
        DataType::Utf8 => "string".to_string(),
        DataType::LargeUtf8 => "large_string".to_string(),
        DataType::Utf8View => "string_view".to_string(),
        DataType::Binary => "binary".to_string(),
        DataType::LargeBinary => "large_binary".to_string(),
        DataType::BinaryView => "binary_view".to_string(),
        DataType::FixedSizeBinary(size) => format!("fixed_size_binary[{}]", size),
        DataType::Date32 => "date32[day]".to_string(),
        DataType::Date64 => "date64[ms]".to_string(),
        DataType::Time32(unit) => format!("time32[{}]", unit_name(unit)),
        DataType::Time64(unit) => format!("time64[{}]", unit_name(unit)),
        DataType::Timestamp(unit, None) => format!("timestamp[{}]", unit_name(unit)),
        DataType::Timestamp(unit, Some(tz)) => {
            format!("timestamp[{}, tz={}]", unit_name(unit), tz)
        }
        DataType::Decimal128(precision, scale) => format!("decimal128({}, {})", precision, scale),
        DataType::Decimal256(precision, scale) => format!("decimal256({}, {})", precision, scale),
        DataType::List(item) | DataType::LargeList(item) => {
            let prefix = if matches!(data_type, DataType::List(_)) {
                "list"
            } else {
                "large_list"
            };
            format!("{}<{}: {}>", prefix, item.name(), type_name(item.data_type()))
        }
        DataType::Struct(fields) => {
            let inner: Vec<String> = fields
                .iter()
                .map(|f| format!("{}: {}", f.name(), type_name(f.data_type())))
                .collect();
            format!("struct<{}>", inner.join(", "))
        }
        DataType::Map(entries, _) => match entries.data_type() {
            DataType::Struct(fields) if fields.len() == 2 => format!(
                "map<{}, {}>",
                type_name(fields[0].data_type()),
                type_name(fields[1].data_type())
            ),
            other => format!("map<{}>", type_name(other)),
        },
        DataType::Dictionary(key, value) => format!(
            "dictionary<values={}, indices={}>",
            type_name(value),
            type_name(key)
        ),
        other => other.to_string().to_lowercase(),
    }
}

fn unit_name(unit: &TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Second => "s",
        TimeUnit::Millisecond => "ms",
        TimeUnit::Microsecond => "us",
        TimeUnit::Nanosecond => "ns",
    }
}

fn primitive_values<T: ArrowPrimitiveType>(
    array: &dyn Array,
    to_cell: impl Fn(T::Native) -> CellValue,
) -> Vec<CellValue> {
    array
        .as_primitive::<T>()
        .iter()
        .map(|v| v.map(&to_cell).unwrap_or(CellValue::Null))
        .collect()
}

fn text_values<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<CellValue> {
    values
        .map(|v| {
            v.map(|s| CellValue::Text(s.to_string()))
                .unwrap_or(CellValue::Null)
        })
        .collect()
}

/// Decodes every slot of an array into report values, in row order.
///
/// Types without a dedicated variant fall back to arrow's own display
/// formatting. Nulls are taken from the logical null mask, so null-typed and
/// dictionary arrays report theirs too.
pub fn cell_values(array: &dyn Array) -> Result<Vec<CellValue>, ArrowError> {
    let values = match array.data_type() {
        DataType::Null => vec![CellValue::Null; array.len()],
        DataType::Boolean => array
            .as_boolean()
            .iter()
            .map(|v| v.map(CellValue::Bool).unwrap_or(CellValue::Null))
            .collect(),
        DataType::Int8 => primitive_values::<Int8Type>(array, |v| CellValue::Int(v.into())),
        DataType::Int16 => primitive_values::<Int16Type>(array, |v| CellValue::Int(v.into())),
        DataType::Int32 => primitive_values::<Int32Type>(array, |v| CellValue::Int(v.into())),
        DataType::Int64 => primitive_values::<Int64Type>(array, CellValue::Int),
        DataType::UInt8 => primitive_values::<UInt8Type>(array, |v| CellValue::Int(v.into())),
        DataType::UInt16 => primitive_values::<UInt16Type>(array, |v| CellValue::Int(v.into())),
        DataType::UInt32 => primitive_values::<UInt32Type>(array, |v| CellValue::Int(v.into())),
        DataType::UInt64 => primitive_values::<UInt64Type>(array, CellValue::UInt),
        DataType::Float32 => {
            primitive_values::<Float32Type>(array, |v| CellValue::Float(v.into()))
        }
        DataType::Float64 => primitive_values::<Float64Type>(array, CellValue::Float),
        DataType::Utf8 => text_values(array.as_string::<i32>().iter()),
        DataType::LargeUtf8 => text_values(array.as_string::<i64>().iter()),
        DataType::Utf8View => text_values(array.as_string_view().iter()),
        _ => {
            let options = FormatOptions::default();
            let formatter = ArrayFormatter::try_new(array, &options)?;
            let nulls = array.logical_nulls();
            (0..array.len())
                .map(|i| {
                    if nulls.as_ref().is_some_and(|n| n.is_null(i)) {
                        CellValue::Null
                    } else {
                        CellValue::Other(formatter.value(i).to_string())
                    }
                })
                .collect()
        }
    };
    Ok(values)
}
