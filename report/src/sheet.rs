//! A sparse-to-dense cell grid addressed like a spreadsheet (1-based).

/// Grid of string cells. Rows grow on demand and are padded with empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell at 1-based `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        debug_assert!(row >= 1 && col >= 1, "sheet cells are 1-based");
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < col {
            cells.resize_with(col, String::new);
        }
        cells[col - 1] = value.into();
    }

    /// The cell at 1-based `(row, col)`; empty when never set.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        row.checked_sub(1)
            .and_then(|r| self.rows.get(r))
            .and_then(|cells| col.checked_sub(1).and_then(|c| cells.get(c)))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in cells.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// 1-based index of the first row whose cell `col` equals `value`.
    pub fn find_row(&self, col: usize, value: &str) -> Option<usize> {
        (1..=self.row_count()).find(|&r| self.cell(r, col) == value)
    }
}
