use arrow::array::RecordBatch;
use arrow::compute::concat_batches;
use arrow::util::pretty::pretty_format_batches;
use inspector_application::ports::{LoadedTable, ParquetSource, RowRenderer, SourceError};
use inspector_domain::{ColumnData, FieldView, SchemaView};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::schema::printer::print_schema;
use shaku::Component;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, info};

use crate::arrow_values::{cell_values, type_name};
use crate::metadata::file_metadata_view;

pub const DEFAULT_BATCH_SIZE: usize = 8192;
const FOOTER_TAIL_LEN: i64 = 8;

/// Reads a whole Parquet file into memory through the arrow reader.
#[derive(Component)]
#[shaku(interface = ParquetSource)]
pub struct ParquetFileSource {
    #[shaku(default = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

impl ParquetFileSource {
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    fn open(path: &Path) -> Result<File, SourceError> {
        File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::Io(e),
        })
    }

    /// Length of the serialized footer metadata, taken from the trailing
    /// `<len:u32 LE><magic>` of the file.
    fn footer_length(file: &mut File) -> Result<u64, SourceError> {
        let mut tail = [0u8; FOOTER_TAIL_LEN as usize];
        file.seek(SeekFrom::End(-FOOTER_TAIL_LEN))?;
        file.read_exact(&mut tail)?;

        if &tail[4..] != b"PAR1" && &tail[4..] != b"PARE" {
            return Err(SourceError::Decode(
                "Missing Parquet magic in file footer".to_string(),
            ));
        }

        let len = u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]);
        Ok(u64::from(len))
    }
}

impl Default for ParquetFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ParquetSource for ParquetFileSource {
    fn load(&self, path: &Path) -> Result<LoadedTable, SourceError> {
        let mut file = Self::open(path)?;
        let file_size = file.metadata()?.len();
        let reader_file = file.try_clone()?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(reader_file)
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        let arrow_schema = builder.schema().clone();
        let parquet_metadata = builder.metadata().clone();
        debug!(
            "Opened {} with {} row groups",
            path.display(),
            parquet_metadata.num_row_groups()
        );

        let serialized_size = Self::footer_length(&mut file)?;

        let reader = builder
            .with_batch_size(self.batch_size.max(1))
            .build()
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        let batches = reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        let table = concat_batches(&arrow_schema, &batches)
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        info!(
            "Read {} rows in {} batches from {}",
            table.num_rows(),
            batches.len(),
            path.display()
        );

        let mut columns = Vec::with_capacity(table.num_columns());
        for (field, array) in arrow_schema.fields().iter().zip(table.columns()) {
            let values = cell_values(array.as_ref())
                .map_err(|e| SourceError::Decode(e.to_string()))?;
            columns.push(ColumnData::new(
                field.name().as_str(),
                type_name(field.data_type()),
                values,
            ));
        }

        let mut printed = Vec::new();
        print_schema(&mut printed, parquet_metadata.file_metadata().schema());
        let schema = SchemaView {
            fields: arrow_schema
                .fields()
                .iter()
                .map(|f| FieldView {
                    name: f.name().to_string(),
                    type_name: type_name(f.data_type()),
                    nullable: f.is_nullable(),
                })
                .collect(),
            parquet_schema: String::from_utf8_lossy(&printed).into_owned(),
        };

        Ok(LoadedTable {
            schema,
            metadata: file_metadata_view(&parquet_metadata, file_size, serialized_size),
            columns,
            num_rows: table.num_rows(),
            rows: Box::new(BatchRowRenderer { batch: table }),
        })
    }
}

/// Pretty-prints row ranges of the loaded batch.
pub struct BatchRowRenderer {
    batch: RecordBatch,
}

impl RowRenderer for BatchRowRenderer {
    fn render_rows(&self, offset: usize, len: usize) -> Result<String, SourceError> {
        let offset = offset.min(self.batch.num_rows());
        let len = len.min(self.batch.num_rows() - offset);
        let slice = self.batch.slice(offset, len);

        pretty_format_batches(&[slice])
            .map(|table| table.to_string())
            .map_err(|e| SourceError::Render(e.to_string()))
    }
}
