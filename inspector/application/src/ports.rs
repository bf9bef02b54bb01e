use inspector_domain::{ColumnData, FileMetadataView, SchemaView};
use shaku::Interface;
use std::path::{Path, PathBuf};

/// Opens a Parquet file and hands back everything the report needs.
pub trait ParquetSource: Interface {
    fn load(&self, path: &Path) -> Result<LoadedTable, SourceError>;
}

/// Renders a contiguous slice of the loaded table as a text grid.
pub trait RowRenderer {
    fn render_rows(&self, offset: usize, len: usize) -> Result<String, SourceError>;
}

/// The whole table of one invocation, loaded once and dropped at the end.
pub struct LoadedTable {
    pub schema: SchemaView,
    pub metadata: FileMetadataView,
    pub columns: Vec<ColumnData>,
    pub num_rows: usize,
    pub rows: Box<dyn RowRenderer>,
}

impl LoadedTable {
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

impl std::fmt::Debug for LoadedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedTable")
            .field("schema", &self.schema)
            .field("metadata", &self.metadata)
            .field("columns", &self.columns)
            .field("num_rows", &self.num_rows)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Render error: {0}")]
    Render(String),
}
