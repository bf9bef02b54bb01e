use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub type_name: String,
    pub nullable: bool,
}

impl fmt::Display for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)?;
        if !self.nullable {
            write!(f, " not null")?;
        }
        Ok(())
    }
}

/// The table schema as the report shows it: one line per top-level field,
/// followed by the file's own Parquet message schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaView {
    pub fields: Vec<FieldView>,
    pub parquet_schema: String,
}
