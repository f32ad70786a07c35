//! File-backed board store: one JSON file per saved board.

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
    path::PathBuf,
    sync::Arc,
};

use log::debug;
use ninefold_core::Board;
use ninefold_solver::BacktrackingSolver;
use serde::{Deserialize, Serialize};

use crate::{BoardStore, error::StoreError};

/// File name suffix of every stored board.
const FILE_EXTENSION: &str = "json";

/// The persisted payload: the 81 cell values, 0 for an explicitly empty
/// cell.
#[derive(Debug, Serialize, Deserialize)]
struct BoardRecord {
    cells: [[u8; 9]; 9],
}

/// Stores each board as `<name>.json` inside a directory.
///
/// The directory is created at construction; all file handles are scoped to
/// the operation that opened them. Writes stream into a sibling temporary
/// file that is renamed over the target only on success, so a failed write
/// never clobbers a previously stored board.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use ninefold_core::Board;
/// use ninefold_solver::BacktrackingSolver;
/// use ninefold_store::{BoardStore, FileBoardStore};
///
/// let mut store = FileBoardStore::new("saves")?;
/// let board = Board::new(Arc::new(BacktrackingSolver::new()));
/// store.write(&board, "morning-game")?;
/// assert_eq!(store.names()?, vec!["morning-game".to_owned()]);
/// # Ok::<(), ninefold_store::StoreError>(())
/// ```
#[derive(Debug)]
pub struct FileBoardStore {
    dir: PathBuf,
}

impl FileBoardStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{FILE_EXTENSION}"))
    }

    fn tmp_path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{FILE_EXTENSION}.tmp"))
    }
}

fn write_payload(file: File, record: &BoardRecord) -> Result<(), StoreError> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    Ok(())
}

impl BoardStore for FileBoardStore {
    fn write(&mut self, board: &Board, name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let record = BoardRecord {
            cells: board.values(),
        };
        // The payload goes to a temporary file first; the target is only
        // replaced by the rename below, after the write has fully succeeded.
        let tmp = self.tmp_path_for(name);
        let result = File::create(&tmp)
            .map_err(StoreError::from)
            .and_then(|file| write_payload(file, &record));
        if let Err(err) = result {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        fs::rename(&tmp, self.path_for(name))?;
        debug!("saved board {name:?} under {}", self.dir.display());
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Board, StoreError> {
        let path = self.path_for(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    name: name.to_owned(),
                });
            }
            Err(err) => return Err(err.into()),
        };
        let record: BoardRecord = serde_json::from_reader(BufReader::new(file))?;
        let board = Board::from_values(Arc::new(BacktrackingSolver::new()), record.cells)
            .map_err(|_| StoreError::Corrupt {
                name: name.to_owned(),
            })?;
        debug!("loaded board {name:?} from {}", self.dir.display());
        Ok(board)
    }

    fn names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == FILE_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::testing::sample_board;

    /// Creates a unique throwaway directory under the system temp dir.
    fn scratch_dir() -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let unique = format!(
            "ninefold-store-test-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed),
        );
        std::env::temp_dir().join(unique)
    }

    #[test]
    fn round_trip_preserves_all_cells() {
        let dir = scratch_dir();
        let mut store = FileBoardStore::new(&dir).unwrap();
        let board = sample_board();

        store.write(&board, "round-trip").unwrap();
        let loaded = store.read("round-trip").unwrap();
        assert_eq!(loaded, board);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn read_of_missing_name_is_not_found() {
        let dir = scratch_dir();
        let store = FileBoardStore::new(&dir).unwrap();
        assert!(matches!(
            store.read("nope"),
            Err(StoreError::NotFound { name }) if name == "nope"
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_with_empty_name_is_rejected() {
        let dir = scratch_dir();
        let mut store = FileBoardStore::new(&dir).unwrap();
        assert!(matches!(
            store.write(&sample_board(), ""),
            Err(StoreError::EmptyName)
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn failed_write_keeps_the_previous_save() {
        let dir = scratch_dir();
        let mut store = FileBoardStore::new(&dir).unwrap();
        let original = sample_board();
        store.write(&original, "game").unwrap();

        // Blocking the temporary path makes the next write fail before the
        // target file is touched.
        fs::create_dir(store.tmp_path_for("game")).unwrap();
        let mut changed = original.clone();
        changed.clear_cell(0, 0);
        assert!(matches!(
            store.write(&changed, "game"),
            Err(StoreError::Io { .. })
        ));

        // The stored board is untouched and no partial entry shows up.
        assert_eq!(store.read("game").unwrap(), original);
        assert_eq!(store.names().unwrap(), vec!["game"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn names_lists_exactly_the_stored_boards() {
        let dir = scratch_dir();
        let mut store = FileBoardStore::new(&dir).unwrap();
        assert_eq!(store.names().unwrap(), Vec::<String>::new());

        store.write(&sample_board(), "beta").unwrap();
        store.write(&sample_board(), "alpha").unwrap();
        assert_eq!(store.names().unwrap(), vec!["alpha", "beta"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn corrupted_payload_is_reported() {
        let dir = scratch_dir();
        let mut store = FileBoardStore::new(&dir).unwrap();
        store.write(&sample_board(), "bad").unwrap();

        // Out-of-range cell value in an otherwise well-formed record.
        let mut record = String::from("{\"cells\":[");
        for row in 0..9 {
            if row > 0 {
                record.push(',');
            }
            record.push_str("[12,0,0,0,0,0,0,0,0]");
        }
        record.push_str("]}");
        fs::write(store.path_for("bad"), record).unwrap();

        assert!(matches!(
            store.read("bad"),
            Err(StoreError::Corrupt { name }) if name == "bad"
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unparseable_payload_is_a_codec_error() {
        let dir = scratch_dir();
        let store = FileBoardStore::new(&dir).unwrap();
        fs::write(store.path_for("garbled"), "not json").unwrap();
        assert!(matches!(
            store.read("garbled"),
            Err(StoreError::Codec { .. })
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
