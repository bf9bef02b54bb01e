pub mod arrow_values;
pub mod metadata;
pub mod parquet_source;

pub use parquet_source::{
    BatchRowRenderer, ParquetFileSource, ParquetFileSourceParameters, DEFAULT_BATCH_SIZE,
};
