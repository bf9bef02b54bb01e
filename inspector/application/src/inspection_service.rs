use shaku::{Component, Interface};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::ports::{LoadedTable, ParquetSource, SourceError};
use inspector_domain::value::format_value_list;
use inspector_domain::{
    ColumnChunkView, ColumnSummary, PreviewError, PreviewWindow, TemplateError, TestTemplate,
    DEFAULT_MAX_ROWS,
};

const RULE_WIDTH: usize = 80;
const KEY_VALUE_PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOptions {
    pub max_rows: usize,
    /// Print per-chunk details of the first row group.
    pub show_chunks: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            show_chunks: false,
        }
    }
}

pub trait InspectionService: Interface {
    fn inspect(
        &self,
        path: &Path,
        options: &InspectOptions,
        out: &mut dyn Write,
    ) -> Result<(), InspectError>;
}

#[derive(Component)]
#[shaku(interface = InspectionService)]
pub struct InspectionServiceImpl {
    #[shaku(inject)]
    source: Arc<dyn ParquetSource>,
}

impl InspectionServiceImpl {
    pub fn new(source: Arc<dyn ParquetSource>) -> Self {
        Self { source }
    }

    fn write_schema(table: &LoadedTable, out: &mut dyn Write) -> Result<(), InspectError> {
        writeln!(out, "\n### SCHEMA ###")?;
        for field in &table.schema.fields {
            writeln!(out, "{}", field)?;
        }
        if !table.schema.parquet_schema.is_empty() {
            writeln!(out, "\nParquet schema:")?;
            write!(out, "{}", table.schema.parquet_schema)?;
            if !table.schema.parquet_schema.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn write_metadata(table: &LoadedTable, out: &mut dyn Write) -> Result<(), InspectError> {
        let metadata = &table.metadata;

        writeln!(out, "\n### METADATA ###")?;
        writeln!(out, "Number of row groups: {}", metadata.num_row_groups())?;
        writeln!(out, "Number of rows: {}", table.num_rows)?;
        writeln!(out, "Number of columns: {}", table.num_columns())?;

        writeln!(out, "\nFile metadata:")?;
        writeln!(
            out,
            "  Created by: {}",
            metadata.created_by.as_deref().unwrap_or("unknown")
        )?;
        writeln!(out, "  Format version: {}", metadata.format_version)?;
        writeln!(
            out,
            "  File size: {} bytes ({:.2} MB)",
            metadata.file_size,
            metadata.file_size_mb()
        )?;
        writeln!(out, "  Serialized size: {} bytes", metadata.serialized_size)?;
        if !metadata.key_value.is_empty() {
            writeln!(out, "  Key-value metadata:")?;
            for (key, value) in &metadata.key_value {
                match value {
                    Some(value) => writeln!(out, "    {}: {}", key, abbreviate(value))?,
                    None => writeln!(out, "    {}: <none>", key)?,
                }
            }
        }

        writeln!(out, "\nRow Groups:")?;
        for (i, group) in metadata.row_groups.iter().enumerate() {
            writeln!(out, "  Row Group {}:", i)?;
            writeln!(out, "    Rows: {}", group.num_rows)?;
            writeln!(out, "    Columns: {}", group.num_columns)?;
            writeln!(out, "    Total byte size: {}", group.total_byte_size)?;
            if let Some(ratio) = group.compression_ratio() {
                writeln!(
                    out,
                    "    Compression ratio: {:.2}x (uncompressed: {}, compressed: {})",
                    ratio,
                    group.uncompressed_size(),
                    group.compressed_size()
                )?;
            }
        }

        writeln!(out, "\nStatistics summary:")?;
        writeln!(
            out,
            "  Total uncompressed size: {} bytes",
            metadata.uncompressed_size()
        )?;
        writeln!(
            out,
            "  Total compressed size: {} bytes",
            metadata.compressed_size()
        )?;
        if let Some(ratio) = metadata.compression_ratio() {
            writeln!(
                out,
                "  Overall compression: {:.2}x (saved {} bytes)",
                ratio,
                metadata.bytes_saved()
            )?;
        }
        writeln!(
            out,
            "  Average row size: {:.2} bytes",
            metadata.average_row_size()
        )?;
        Ok(())
    }

    fn write_chunks(table: &LoadedTable, out: &mut dyn Write) -> Result<(), InspectError> {
        writeln!(out, "\n### COLUMN CHUNK DETAILS (First Row Group) ###")?;

        let Some(group) = table.metadata.row_groups.first() else {
            writeln!(out, "No row groups found.")?;
            return Ok(());
        };

        for (i, chunk) in group.chunks.iter().enumerate() {
            write_chunk(i, chunk, out)?;
        }
        Ok(())
    }

    fn write_columns(table: &LoadedTable, out: &mut dyn Write) -> Result<(), InspectError> {
        writeln!(out, "\n### COLUMN DETAILS ###")?;

        for (i, column) in table.columns.iter().enumerate() {
            let summary = ColumnSummary::from_column(i, column);

            writeln!(out, "\nColumn {}: '{}'", summary.index, summary.name)?;
            writeln!(out, "  Type: {}", summary.type_name)?;
            writeln!(out, "  Length: {}", summary.length)?;
            writeln!(out, "  Null count: {}", summary.null_count)?;

            let Some(details) = summary.details else {
                continue;
            };

            writeln!(out, "  Unique values: {}", details.unique_count)?;
            if let Some(stats) = &details.numeric {
                writeln!(out, "  Min: {}", stats.min)?;
                writeln!(out, "  Max: {}", stats.max)?;
                if let Some(average) = stats.average {
                    writeln!(out, "  Average: {:.2}", average)?;
                }
            }

            writeln!(
                out,
                "  First {} values: {}",
                details.first.len(),
                format_value_list(&details.first)
            )?;
            if let Some(last) = &details.last {
                writeln!(out, "  Last 5 values: {}", format_value_list(last))?;
            }
        }
        Ok(())
    }

    fn write_preview(
        table: &LoadedTable,
        window: PreviewWindow,
        out: &mut dyn Write,
    ) -> Result<(), InspectError> {
        writeln!(out, "\n### DATA PREVIEW ###")?;

        match window {
            PreviewWindow::All { rows } => {
                writeln!(out, "{}", table.rows.render_rows(0, rows)?)?;
            }
            PreviewWindow::Split {
                head,
                tail_offset,
                tail,
            } => {
                writeln!(out, "Showing first {} and last {} rows:\n", head, tail)?;
                writeln!(out, "{}", table.rows.render_rows(0, head)?)?;
                writeln!(out, "...")?;
                writeln!(out, "{}", table.rows.render_rows(tail_offset, tail)?)?;
            }
        }
        Ok(())
    }

    fn write_template(
        path: &Path,
        table: &LoadedTable,
        out: &mut dyn Write,
    ) -> Result<(), InspectError> {
        let template = TestTemplate::new(path, table.num_rows, &table.columns)?;
        debug!("Generated test template {}", template.method_name());

        writeln!(out, "\n### JUNIT TEST TEMPLATE ###")?;
        writeln!(out)?;
        write!(out, "{}", template)?;
        Ok(())
    }
}

impl InspectionService for InspectionServiceImpl {
    fn inspect(
        &self,
        path: &Path,
        options: &InspectOptions,
        out: &mut dyn Write,
    ) -> Result<(), InspectError> {
        if options.max_rows == 0 {
            return Err(InspectError::Preview(PreviewError::ZeroMaxRows));
        }

        let table = self.source.load(path).map_err(|e| match e {
            SourceError::NotFound(path) => InspectError::NotFound(path),
            other => InspectError::Source(other),
        })?;
        info!(
            "Loaded {} rows x {} columns from {}",
            table.num_rows,
            table.num_columns(),
            path.display()
        );

        let window = PreviewWindow::select(table.num_rows, options.max_rows)?;
        debug!(
            "Previewing {} of {} rows",
            window.shown_rows(),
            table.num_rows
        );

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{}", rule)?;
        writeln!(out, "PARQUET FILE INSPECTION: {}", path.display())?;
        writeln!(out, "{}", rule)?;

        Self::write_schema(&table, out)?;
        Self::write_metadata(&table, out)?;
        if options.show_chunks {
            Self::write_chunks(&table, out)?;
        }
        Self::write_columns(&table, out)?;
        Self::write_preview(&table, window, out)?;
        Self::write_template(path, &table, out)?;

        writeln!(out, "\n{}", rule)?;
        out.flush()?;
        Ok(())
    }
}

fn write_chunk(
    index: usize,
    chunk: &ColumnChunkView,
    out: &mut dyn Write,
) -> Result<(), InspectError> {
    writeln!(out, "\nColumn {}: {}", index, chunk.path)?;
    writeln!(out, "  Type: {}", chunk.physical_type)?;
    writeln!(out, "  Compression: {}", chunk.compression)?;
    writeln!(out, "  Values: {}", chunk.num_values)?;
    writeln!(out, "  Uncompressed size: {} bytes", chunk.uncompressed_size)?;
    writeln!(out, "  Compressed size: {} bytes", chunk.compressed_size)?;
    if let Some(ratio) = chunk.compression_ratio() {
        writeln!(out, "  Compression ratio: {:.2}x", ratio)?;
    }
    writeln!(out, "  Data page offset: {}", chunk.data_page_offset)?;

    if let Some(stats) = &chunk.statistics {
        writeln!(out, "  Statistics:")?;
        if let Some(nulls) = stats.null_count {
            writeln!(out, "    Null count: {}", nulls)?;
        }
        if let Some(distinct) = stats.distinct_count {
            writeln!(out, "    Distinct count: {}", distinct)?;
        }
        if let Some(min) = &stats.min {
            writeln!(out, "    Min value: {}", min)?;
        }
        if let Some(max) = &stats.max {
            writeln!(out, "    Max value: {}", max)?;
        }
    }
    Ok(())
}

fn abbreviate(value: &str) -> String {
    if value.chars().count() <= KEY_VALUE_PREVIEW_CHARS {
        return value.to_string();
    }
    let head: String = value.chars().take(KEY_VALUE_PREVIEW_CHARS).collect();
    format!("{}... ({} bytes)", head, value.len())
}

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Invalid preview size: {0}")]
    Preview(#[from] PreviewError),

    #[error("Cannot build test template: {0}")]
    Template(#[from] TemplateError),

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_keeps_short_values() {
        assert_eq!(abbreviate("parquet-rs"), "parquet-rs");
    }

    #[test]
    fn test_abbreviate_truncates_long_values() {
        let long = "x".repeat(100);
        let shown = abbreviate(&long);

        assert!(shown.starts_with(&"x".repeat(60)));
        assert!(shown.ends_with("... (100 bytes)"));
    }
}
