pub const DEFAULT_MAX_ROWS: usize = 20;

/// Which rows of a table the data preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewWindow {
    All { rows: usize },
    Split {
        head: usize,
        tail_offset: usize,
        tail: usize,
    },
}

impl PreviewWindow {
    pub fn select(total_rows: usize, max_rows: usize) -> Result<Self, PreviewError> {
        if max_rows == 0 {
            return Err(PreviewError::ZeroMaxRows);
        }

        if total_rows <= max_rows {
            return Ok(PreviewWindow::All { rows: total_rows });
        }

        let half = max_rows / 2;
        Ok(PreviewWindow::Split {
            head: half,
            tail_offset: total_rows - half,
            tail: half,
        })
    }

    pub fn shown_rows(&self) -> usize {
        match self {
            PreviewWindow::All { rows } => *rows,
            PreviewWindow::Split { head, tail, .. } => head + tail,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Preview row limit must be positive")]
    ZeroMaxRows,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_table_is_shown_whole() {
        assert_eq!(
            PreviewWindow::select(20, 20).unwrap(),
            PreviewWindow::All { rows: 20 }
        );
        assert_eq!(
            PreviewWindow::select(0, 20).unwrap(),
            PreviewWindow::All { rows: 0 }
        );
    }

    #[test]
    fn test_large_table_is_split_in_halves() {
        let window = PreviewWindow::select(100, 20).unwrap();

        assert_eq!(
            window,
            PreviewWindow::Split {
                head: 10,
                tail_offset: 90,
                tail: 10
            }
        );
        assert_eq!(window.shown_rows(), 20);
    }

    #[test]
    fn test_odd_limit_uses_floor_division() {
        let window = PreviewWindow::select(8, 7).unwrap();

        assert_eq!(
            window,
            PreviewWindow::Split {
                head: 3,
                tail_offset: 5,
                tail: 3
            }
        );
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(matches!(
            PreviewWindow::select(5, 0),
            Err(PreviewError::ZeroMaxRows)
        ));
    }
}
