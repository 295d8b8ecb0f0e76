//! Character grid the rasterizer draws into and the display reads from.

use std::fmt;

use crate::error::ConfigError;

/// Symbol of an empty cell
pub const BLANK: char = ' ';

/// Fixed-size 2D grid of symbols, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    columns: usize,
    rows: usize,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(columns: usize, rows: usize) -> Result<Self, ConfigError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptySurface { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![BLANK; columns * rows],
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.columns as i64 {
            return None;
        }
        Some(row as usize * self.columns + col as usize)
    }

    /// Resets every cell to [`BLANK`].
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Writes one cell. Coordinates outside the grid are ignored.
    pub fn set(&mut self, row: i64, col: i64, symbol: char) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = symbol;
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(self.cells[row * self.columns + col])
    }

    /// Each row of the grid, top to bottom.
    ///
    /// The display borrows the live buffer through this; the next `clear`
    /// cannot happen while a flush still holds the rows.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.columns)
    }

    /// Owned copy of the grid, one `String` per row
    pub fn snapshot(&self) -> Vec<String> {
        self.lines().map(|line| line.iter().collect()).collect()
    }

    /// Number of non-blank cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLANK).count()
    }
}

impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in line {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
