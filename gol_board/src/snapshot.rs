//! Plain-text board snapshots.
//!
//! ```text
//! 0.1
//! <padded width> <padded height>
//! <padded width space-separated 0/1 tokens>   (one line per padded row)
//! ```
//!
//! The border rows and columns are written as stored (always dead). When
//! reading, the border values found in the file are discarded.

use crate::{Board, SnapshotError};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

/// Version tag on the first line of every snapshot.
pub const FORMAT_VERSION: &str = "0.1";

/// Upper bound on the length of the version line, newline included.
const VERSION_LINE_LIMIT: u64 = 64;

/// Writes `board` in snapshot format.
pub fn write<W: Write>(board: &Board, mut dst: W) -> Result<(), SnapshotError> {
    writeln!(dst, "{}", FORMAT_VERSION)?;
    writeln!(dst, "{} {}", board.padded_width(), board.padded_height())?;
    let mut line = String::with_capacity(board.padded_width() * 2);
    for row in board.to_matrix() {
        line.clear();
        for (i, alive) in row.into_iter().enumerate() {
            if i != 0 {
                line.push(' ');
            }
            line.push(if alive { '1' } else { '0' });
        }
        writeln!(dst, "{}", line)?;
    }
    dst.flush()?;
    Ok(())
}

/// Reads a snapshot, refusing anything that is not a complete, well-formed grid.
pub fn read<R: BufRead>(mut src: R) -> Result<Board, SnapshotError> {
    // raw bytes: a foreign first line need not be UTF-8
    let mut version = vec![];
    let n = src
        .by_ref()
        .take(VERSION_LINE_LIMIT)
        .read_until(b'\n', &mut version)?;
    if n == 0 {
        return Err(SnapshotError::MissingLine("version"));
    }
    let too_long = version.last() != Some(&b'\n') && n as u64 == VERSION_LINE_LIMIT;
    if too_long || version.trim_ascii() != FORMAT_VERSION.as_bytes() {
        let found = String::from_utf8_lossy(version.trim_ascii()).into_owned();
        return Err(SnapshotError::UnsupportedVersion(found));
    }

    let mut lines = src.lines();
    let header = lines.next().ok_or(SnapshotError::MissingLine("dimensions"))??;
    let (width, height) = parse_header(&header)?;
    if width < 3 || height < 3 {
        return Err(SnapshotError::TooSmall { width, height });
    }

    let mut matrix = vec![];
    for (row, line) in lines.by_ref().take(height).enumerate() {
        let line = line?;
        let mut values = vec![];
        for token in line.split_whitespace() {
            let alive = match token {
                "0" => false,
                "1" => true,
                _ => {
                    return Err(SnapshotError::BadToken {
                        line: row + 3,
                        token: token.to_string(),
                    })
                }
            };
            values.push(alive);
        }
        if values.len() != width {
            return Err(SnapshotError::RowLength {
                row,
                expected: width,
                found: values.len(),
            });
        }
        matrix.push(values);
    }
    if matrix.len() != height {
        return Err(SnapshotError::RowCount {
            expected: height,
            found: matrix.len(),
        });
    }

    let mut extra = 0;
    for line in lines {
        if !line?.trim().is_empty() {
            extra += 1;
        }
    }
    if extra != 0 {
        return Err(SnapshotError::RowCount {
            expected: height,
            found: height + extra,
        });
    }

    Ok(Board::from_matrix(&matrix)?)
}

/// Writes `board` into the file at `path`, replacing its contents.
pub fn save(board: &Board, path: &Path) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    write(board, BufWriter::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = board.width(),
        height = board.height(),
        "snapshot saved"
    );
    Ok(())
}

/// Reads the board stored in the file at `path`.
pub fn load(path: &Path) -> Result<Board, SnapshotError> {
    let file = File::open(path)?;
    match read(BufReader::new(file)) {
        Ok(board) => {
            tracing::debug!(
                path = %path.display(),
                width = board.width(),
                height = board.height(),
                "snapshot loaded"
            );
            Ok(board)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "rejected snapshot");
            Err(err)
        }
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), SnapshotError> {
    let bad = || SnapshotError::BadHeader(line.to_string());
    let mut tokens = line.split_whitespace();
    let width = tokens.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let height = tokens.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if tokens.next().is_some() {
        return Err(bad());
    }
    Ok((width, height))
}
