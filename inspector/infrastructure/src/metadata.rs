use inspector_domain::{ChunkStatistics, ColumnChunkView, FileMetadataView, RowGroupView};
use parquet::file::metadata::{ColumnChunkMetaData, ParquetMetaData, RowGroupMetaData};
use parquet::file::statistics::{Statistics, ValueStatistics};

pub fn file_metadata_view(
    metadata: &ParquetMetaData,
    file_size: u64,
    serialized_size: u64,
) -> FileMetadataView {
    let file_metadata = metadata.file_metadata();

    let key_value = file_metadata
        .key_value_metadata()
        .map(|entries| {
            entries
                .iter()
                .map(|kv| (kv.key.clone(), kv.value.clone()))
                .collect()
        })
        .unwrap_or_default();

    FileMetadataView {
        created_by: file_metadata.created_by().map(str::to_string),
        format_version: file_metadata.version(),
        file_size,
        serialized_size,
        key_value,
        row_groups: metadata.row_groups().iter().map(row_group_view).collect(),
    }
}

fn row_group_view(row_group: &RowGroupMetaData) -> RowGroupView {
    RowGroupView {
        num_rows: row_group.num_rows(),
        num_columns: row_group.num_columns(),
        total_byte_size: row_group.total_byte_size(),
        chunks: row_group.columns().iter().map(chunk_view).collect(),
    }
}

fn chunk_view(chunk: &ColumnChunkMetaData) -> ColumnChunkView {
    ColumnChunkView {
        path: chunk.column_path().string(),
        physical_type: chunk.column_type().to_string(),
        compression: chunk.compression().to_string(),
        num_values: chunk.num_values(),
        compressed_size: chunk.compressed_size(),
        uncompressed_size: chunk.uncompressed_size(),
        data_page_offset: chunk.data_page_offset(),
        statistics: chunk.statistics().map(chunk_statistics),
    }
}

fn bounds<T>(
    stats: &ValueStatistics<T>,
    render: impl Fn(&T) -> String,
) -> (Option<String>, Option<String>) {
    (stats.min_opt().map(&render), stats.max_opt().map(&render))
}

fn bytes_to_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
            format!("0x{}", hex)
        }
    }
}

fn chunk_statistics(stats: &Statistics) -> ChunkStatistics {
    let (min, max) = match stats {
        Statistics::Boolean(s) => bounds(s, |v| v.to_string()),
        Statistics::Int32(s) => bounds(s, |v| v.to_string()),
        Statistics::Int64(s) => bounds(s, |v| v.to_string()),
        Statistics::Int96(s) => bounds(s, |v| format!("{:?}", v)),
        Statistics::Float(s) => bounds(s, |v| format!("{:?}", v)),
        Statistics::Double(s) => bounds(s, |v| format!("{:?}", v)),
        Statistics::ByteArray(s) => bounds(s, |v| bytes_to_text(v.data())),
        Statistics::FixedLenByteArray(s) => bounds(s, |v| bytes_to_text(v.data())),
    };

    ChunkStatistics {
        null_count: stats.null_count_opt(),
        distinct_count: stats.distinct_count_opt(),
        min,
        max,
    }
}
