const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Footer-level facts about a Parquet file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileMetadataView {
    pub created_by: Option<String>,
    pub format_version: i32,
    /// Size of the whole file on disk.
    pub file_size: u64,
    /// Length in bytes of the serialized footer metadata.
    pub serialized_size: u64,
    pub key_value: Vec<(String, Option<String>)>,
    pub row_groups: Vec<RowGroupView>,
}

impl FileMetadataView {
    pub fn num_row_groups(&self) -> usize {
        self.row_groups.len()
    }

    pub fn num_rows(&self) -> i64 {
        self.row_groups.iter().map(|g| g.num_rows).sum()
    }

    pub fn file_size_mb(&self) -> f64 {
        self.file_size as f64 / BYTES_PER_MB
    }

    pub fn compressed_size(&self) -> i64 {
        self.row_groups.iter().map(RowGroupView::compressed_size).sum()
    }

    pub fn uncompressed_size(&self) -> i64 {
        self.row_groups.iter().map(RowGroupView::uncompressed_size).sum()
    }

    /// Uncompressed over compressed size across every chunk of every row group.
    pub fn compression_ratio(&self) -> Option<f64> {
        compression_ratio(self.uncompressed_size(), self.compressed_size())
    }

    /// Negative when compression made the chunks larger.
    pub fn bytes_saved(&self) -> i64 {
        self.uncompressed_size() - self.compressed_size()
    }

    /// File bytes per row, or zero for a file without rows.
    pub fn average_row_size(&self) -> f64 {
        match self.num_rows() {
            rows if rows > 0 => self.file_size as f64 / rows as f64,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowGroupView {
    pub num_rows: i64,
    pub num_columns: usize,
    pub total_byte_size: i64,
    pub chunks: Vec<ColumnChunkView>,
}

impl RowGroupView {
    pub fn compressed_size(&self) -> i64 {
        self.chunks.iter().map(|c| c.compressed_size).sum()
    }

    pub fn uncompressed_size(&self) -> i64 {
        self.chunks.iter().map(|c| c.uncompressed_size).sum()
    }

    pub fn compression_ratio(&self) -> Option<f64> {
        compression_ratio(self.uncompressed_size(), self.compressed_size())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnChunkView {
    pub path: String,
    pub physical_type: String,
    pub compression: String,
    pub num_values: i64,
    pub compressed_size: i64,
    pub uncompressed_size: i64,
    pub data_page_offset: i64,
    pub statistics: Option<ChunkStatistics>,
}

impl ColumnChunkView {
    pub fn compression_ratio(&self) -> Option<f64> {
        compression_ratio(self.uncompressed_size, self.compressed_size)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkStatistics {
    pub null_count: Option<u64>,
    pub distinct_count: Option<u64>,
    pub min: Option<String>,
    pub max: Option<String>,
}

fn compression_ratio(uncompressed: i64, compressed: i64) -> Option<f64> {
    (uncompressed > 0 && compressed > 0).then(|| uncompressed as f64 / compressed as f64)
}
