pub mod column;
pub mod metadata;
pub mod preview;
pub mod schema;
pub mod template;
pub mod value;

pub use column::{ColumnData, ColumnSummary, NumericStats, ValueDetails};
pub use metadata::{ChunkStatistics, ColumnChunkView, FileMetadataView, RowGroupView};
pub use preview::{PreviewError, PreviewWindow, DEFAULT_MAX_ROWS};
pub use schema::{FieldView, SchemaView};
pub use template::{TemplateError, TestTemplate};
pub use value::CellValue;
