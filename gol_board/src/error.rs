/// Errors raised by [`Board`](crate::Board) construction and cell access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Width and height of the play area must both be positive.
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Coordinate lies outside the range accepted by the operation.
    #[error("cell ({row}, {col}) is outside the {width}x{height} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// External matrix does not match the board it is loaded into.
    /// Both sizes are `(width, height)` of the padded grid.
    #[error("expected a {}x{} grid, found {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Backing storage for the grid could not be allocated.
    #[error("failed to allocate storage for {cells} cells")]
    Allocation { cells: usize },
}

/// Errors raised while reading or writing a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported snapshot version {0:?}")]
    UnsupportedVersion(String),

    #[error("snapshot ended before the {0} line")]
    MissingLine(&'static str),

    #[error("malformed dimensions line {0:?}")]
    BadHeader(String),

    #[error("line {line}: unexpected token {token:?}")]
    BadToken { line: usize, token: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("snapshot has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("padded grid {width}x{height} leaves no play area")]
    TooSmall { width: usize, height: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}
