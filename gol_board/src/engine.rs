use crate::{Board, BoardError};

/// `(row, col)` coordinate of a play area cell.
pub type Coord = (usize, usize);

/// Cells that flipped during one generation, in row-major order.
///
/// Every coordinate appears once and refers to a play area cell whose state
/// differs from the previous generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeList(Vec<Coord>);

impl ChangeList {
    /// `true` if the generation changed nothing (the board has stalled).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        // row-major order allows a binary search
        self.0.binary_search(&coord).is_ok()
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }
}

impl IntoIterator for ChangeList {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeList {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// B3/S23: a dead cell with three neighbours is born,
/// an alive cell with two or three neighbours survives.
#[inline]
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

/// Number of alive cells among the eight surrounding `(row, col)`.
///
/// Only play area coordinates are accepted; the dead border guarantees that
/// all eight neighbours exist.
pub fn count_neighbors(board: &Board, row: usize, col: usize) -> Result<usize, BoardError> {
    if !board.is_interior(row, col) {
        return Err(BoardError::OutOfBounds {
            row,
            col,
            width: board.width(),
            height: board.height(),
        });
    }
    Ok(count_neibs(board.cells(), board.padded_width(), board.index(row, col)))
}

#[inline]
fn count_neibs(cells: &[bool], stride: usize, idx: usize) -> usize {
    let (above, below) = (idx - stride, idx + stride);
    cells[above - 1] as usize
        + cells[above] as usize
        + cells[above + 1] as usize
        + cells[idx - 1] as usize
        + cells[idx + 1] as usize
        + cells[below - 1] as usize
        + cells[below] as usize
        + cells[below + 1] as usize
}

/// Advances the board by one generation and reports the flipped cells.
///
/// Next states are computed into a separate buffer, so every cell sees the
/// previous generation of its neighbours. The buffer is swapped into `board`
/// afterwards; the board keeps its identity and dimensions.
pub fn advance(board: &mut Board) -> Result<ChangeList, BoardError> {
    let mut next = Board::new(board.width(), board.height())?;
    let stride = board.padded_width();
    let mut changes = Vec::new();

    {
        let curr = board.cells();
        let dst = next.cells_mut();
        for row in 1..=board.height() {
            for col in 1..=board.width() {
                let idx = row * stride + col;
                let alive = curr[idx];
                let state = next_state(alive, count_neibs(curr, stride, idx));
                dst[idx] = state;
                if state != alive {
                    changes.push((row, col));
                }
            }
        }
    }

    board.swap_cells(&mut next);
    Ok(ChangeList(changes))
}

impl Board {
    /// Advances the board by one generation, see [`advance`].
    pub fn advance(&mut self) -> Result<ChangeList, BoardError> {
        advance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(width: usize, height: usize, alive: &[Coord]) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for &(row, col) in alive {
            board.set(row, col, true).unwrap();
        }
        board
    }

    fn alive_cells(board: &Board) -> Vec<Coord> {
        board
            .interior()
            .filter(|&(row, col)| board.get(row, col).unwrap())
            .collect()
    }

    #[test]
    fn test_next_state_table() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead with {} neighbours", n);
            assert_eq!(
                next_state(true, n),
                n == 2 || n == 3,
                "alive with {} neighbours",
                n
            );
        }
    }

    #[test]
    fn test_count_neighbors_at_edges() {
        let board = board_with(3, 3, &[(1, 1), (1, 2), (2, 1), (3, 3)]);
        assert_eq!(count_neighbors(&board, 1, 1).unwrap(), 2);
        assert_eq!(count_neighbors(&board, 2, 2).unwrap(), 4);
        assert_eq!(count_neighbors(&board, 3, 3).unwrap(), 0);
        assert!(count_neighbors(&board, 0, 1).is_err());
        assert!(count_neighbors(&board, 1, 4).is_err());
    }

    #[test]
    fn test_block_is_still() {
        let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
        let mut board = board_with(4, 4, &block);
        let before = board.clone();
        let changes = board.advance().unwrap();
        assert!(changes.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = [(3, 2), (3, 3), (3, 4)];
        let vertical = [(2, 3), (3, 3), (4, 3)];
        let mut board = board_with(5, 5, &horizontal);

        let changes = board.advance().unwrap();
        assert_eq!(alive_cells(&board), vertical.to_vec());
        assert_eq!(changes.into_vec(), vec![(2, 3), (3, 2), (3, 4), (4, 3)]);

        let changes = board.advance().unwrap();
        assert_eq!(alive_cells(&board), horizontal.to_vec());
        assert_eq!(changes.len(), 4);
    }

    #[test]
    fn test_corner_blinker_clipped_by_border() {
        // cells outside the play area never come alive
        let mut board = board_with(3, 3, &[(1, 1), (1, 2), (1, 3)]);
        board.advance().unwrap();
        assert_eq!(alive_cells(&board), vec![(1, 2), (2, 2)]);
        assert_eq!(board.get(0, 2), Ok(false));
    }

    #[test]
    fn test_single_column_board() {
        let mut board = board_with(1, 3, &[(1, 1), (2, 1), (3, 1)]);
        let changes = board.advance().unwrap();
        assert_eq!(alive_cells(&board), vec![(2, 1)]);
        assert_eq!(changes.into_vec(), vec![(1, 1), (3, 1)]);
    }

    #[test]
    fn test_change_list_contains() {
        let mut board = board_with(5, 5, &[(3, 2), (3, 3), (3, 4)]);
        let changes = board.advance().unwrap();
        assert!(changes.contains((2, 3)));
        assert!(!changes.contains((3, 3)));
        assert_eq!((&changes).into_iter().count(), 4);
    }
}
