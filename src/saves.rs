use crate::Config;
use gol_board::{snapshot, Board, SnapshotError};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("invalid save name {0:?}: use letters, digits, '-' or '_'")]
    InvalidName(String),

    #[error("save {0:?} already exists")]
    AlreadyExists(String),

    #[error("cannot access save directory {path}: {source}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("board {width}x{height} is too large, sides are limited to {max} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Directory holding board snapshots, one `<name>.txt` file per save.
pub struct SaveDir {
    root: PathBuf,
}

impl SaveDir {
    /// Opens the directory, creating it if it does not exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, SaveError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| SaveError::Directory {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Directory named by `GOL_SAVES_DIR`, or `saves` in the working directory.
    pub fn from_env() -> Result<Self, SaveError> {
        let root = std::env::var_os(Config::SAVES_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Config::SAVES_DIR));
        Self::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of existing saves, sorted.
    pub fn list(&self) -> Result<Vec<String>, SaveError> {
        let entries = fs::read_dir(&self.root).map_err(|source| self.dir_error(source))?;
        let mut names = vec![];
        for entry in entries {
            let path = entry.map_err(|source| self.dir_error(source))?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(Config::SAVE_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_name(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf, SaveError> {
        if !is_valid_name(name) {
            return Err(SaveError::InvalidName(name.to_string()));
        }
        Ok(self
            .root
            .join(format!("{}.{}", name, Config::SAVE_EXTENSION)))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Stores `board` under `name`. An existing save is replaced only with `overwrite`.
    pub fn save(&self, board: &Board, name: &str, overwrite: bool) -> Result<PathBuf, SaveError> {
        let path = self.path_for(name)?;
        if path.exists() && !overwrite {
            return Err(SaveError::AlreadyExists(name.to_string()));
        }
        snapshot::save(board, &path)?;
        tracing::info!(name, path = %path.display(), "board saved");
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<Board, SaveError> {
        Self::load_file(&self.path_for(name)?)
    }

    /// Reads a snapshot from any path, refusing boards too large to display.
    pub fn load_file(path: &Path) -> Result<Board, SaveError> {
        let board = snapshot::load(path)?;
        if board.width() > Config::MAX_BOARD_SIDE || board.height() > Config::MAX_BOARD_SIDE {
            tracing::warn!(
                path = %path.display(),
                width = board.width(),
                height = board.height(),
                "board too large"
            );
            return Err(SaveError::TooLarge {
                width: board.width(),
                height: board.height(),
                max: Config::MAX_BOARD_SIDE,
            });
        }
        Ok(board)
    }

    fn dir_error(&self, source: std::io::Error) -> SaveError {
        SaveError::Directory {
            path: self.root.clone(),
            source,
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= Config::MAX_SAVE_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
