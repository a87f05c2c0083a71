use crate::BoardError;
use std::fmt;

/// Bounded Game of Life field.
///
/// The play area is `width x height` cells, surrounded by a one cell wide
/// border that is always dead. Rows and columns are 1-based inside the play
/// area: `1 <= row <= height`, `1 <= col <= width`. Row `0`, row `height + 1`,
/// column `0` and column `width + 1` form the border.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<bool>, // Row-major padded grid, `(width + 2) * (height + 2)` cells.
    width: usize,
    height: usize,
}

impl Board {
    /// Creates a board with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let size = width
            .checked_add(2)
            .zip(height.checked_add(2))
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(BoardError::Allocation { cells: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| BoardError::Allocation { cells: size })?;
        cells.resize(size, false);
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Creates a board with randomly filled play area.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        width: usize,
        height: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, BoardError> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        let mut result = Self::new(width, height)?;
        for row in 1..=height {
            for col in 1..=width {
                let idx = result.index(row, col);
                result.cells[idx] = rng.gen_bool(fill_rate);
            }
        }
        Ok(result)
    }

    /// Creates a board from a padded grid, deriving the play area from its size.
    ///
    /// The matrix must be rectangular and at least `3 x 3`.
    /// Border values of the matrix are ignored.
    pub fn from_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self, BoardError> {
        let padded_height = matrix.len();
        let padded_width = matrix.first().map_or(0, |row| row.as_ref().len());
        if padded_width < 3 || padded_height < 3 {
            return Err(BoardError::InvalidDimensions {
                width: padded_width.saturating_sub(2),
                height: padded_height.saturating_sub(2),
            });
        }
        let (width, height) = (padded_width - 2, padded_height - 2);
        let mut board = Self::new(width, height)?;
        board.load_from_matrix(matrix, width, height)?;
        Ok(board)
    }

    /// Width of the play area.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the play area.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the grid including the border.
    pub fn padded_width(&self) -> usize {
        self.width + 2
    }

    /// Height of the grid including the border.
    pub fn padded_height(&self) -> usize {
        self.height + 2
    }

    /// Returns `true` if the coordinate lies in the play area.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        (1..=self.height).contains(&row) && (1..=self.width).contains(&col)
    }

    /// State of any cell of the padded grid, border included.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        if row > self.height + 1 || col > self.width + 1 {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Flips a cell of the play area. Border coordinates are rejected.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let idx = self.interior_index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Sets a cell of the play area. Border coordinates are rejected.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError> {
        let idx = self.interior_index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Replaces the play area with the interior of a padded external grid.
    ///
    /// `width` and `height` are the play area dimensions the matrix declares;
    /// they must match both this board and the matrix shape. Border values of
    /// the matrix are discarded, the border stays dead.
    pub fn load_from_matrix<R: AsRef<[bool]>>(
        &mut self,
        matrix: &[R],
        width: usize,
        height: usize,
    ) -> Result<(), BoardError> {
        let expected = (self.padded_width(), self.padded_height());
        let declared = (width.saturating_add(2), height.saturating_add(2));
        if declared != expected {
            return Err(BoardError::DimensionMismatch {
                expected,
                found: declared,
            });
        }
        if matrix.len() != expected.1 {
            let found_width = matrix.first().map_or(0, |row| row.as_ref().len());
            return Err(BoardError::DimensionMismatch {
                expected,
                found: (found_width, matrix.len()),
            });
        }
        if let Some(row) = matrix.iter().find(|row| row.as_ref().len() != expected.0) {
            return Err(BoardError::DimensionMismatch {
                expected,
                found: (row.as_ref().len(), matrix.len()),
            });
        }

        // validated in full before touching the cells
        for (row, values) in matrix.iter().enumerate() {
            let values = values.as_ref();
            for (col, &value) in values.iter().enumerate() {
                let alive = value && self.is_interior(row, col);
                let idx = self.index(row, col);
                self.cells[idx] = alive;
            }
        }
        Ok(())
    }

    /// The full padded grid, border included, indexed `[row][col]`.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks_exact(self.padded_width())
            .map(<[bool]>::to_vec)
            .collect()
    }

    /// Coordinates of the play area in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.width, self.height);
        (1..=height).flat_map(move |row| (1..=width).map(move |col| (row, col)))
    }

    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.padded_width() + col
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Swaps storage with a board of identical size.
    pub(crate) fn swap_cells(&mut self, other: &mut Board) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        std::mem::swap(&mut self.cells, &mut other.cells);
    }

    fn interior_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if !self.is_interior(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(self.index(row, col))
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> BoardError {
        BoardError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.height {
            for col in 1..=self.width {
                let c = if self.cells[self.index(row, col)] {
                    '@'
                } else {
                    '-'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
