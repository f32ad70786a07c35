//! Database-backed board store on embedded SQLite.
//!
//! One header row per board plus 81 child rows holding the cell values.
//! Writes run inside a single transaction: if any statement fails, the
//! transaction rolls back and no partial board is ever visible to readers.

use std::{path::Path, sync::Arc};

use log::debug;
use ninefold_core::Board;
use ninefold_solver::BacktrackingSolver;
use rusqlite::{Connection, OptionalExtension as _, params};

use crate::{BoardStore, error::StoreError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS boards (
    id   INTEGER PRIMARY KEY,
    name TEXT UNIQUE NOT NULL
);
CREATE TABLE IF NOT EXISTS cells (
    board_id INTEGER NOT NULL,
    row      INTEGER NOT NULL,
    col      INTEGER NOT NULL,
    value    INTEGER NOT NULL,
    FOREIGN KEY (board_id) REFERENCES boards (id)
);
";

/// Stores boards in a SQLite database.
///
/// The schema is created on open. Duplicate names are rejected by the
/// `UNIQUE` constraint, surfacing as [`StoreError::Database`] with the
/// previously stored board left intact. Reads require exactly one cell row
/// per grid cell and report anything else as [`StoreError::Corrupt`].
#[derive(Debug)]
pub struct DbBoardStore {
    conn: Connection,
}

impl DbBoardStore {
    /// Opens (and if necessary creates) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the file cannot be opened or the
    /// schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    /// Opens a transient in-memory database, handy for tests.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl BoardStore for DbBoardStore {
    fn write(&mut self, board: &Board, name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        // Dropping the transaction without committing rolls everything
        // back, so an error in any statement leaves no partial board.
        let tx = self.conn.transaction()?;
        tx.execute("INSERT INTO boards (name) VALUES (?1)", params![name])?;
        let board_id = tx.last_insert_rowid();
        {
            let mut insert_cell = tx.prepare(
                "INSERT INTO cells (board_id, row, col, value) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (row, row_values) in (0_i64..).zip(board.values()) {
                for (col, value) in (0_i64..).zip(row_values) {
                    insert_cell.execute(params![board_id, row, col, i64::from(value)])?;
                }
            }
        }
        tx.commit()?;
        debug!("saved board {name:?} to the database");
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Board, StoreError> {
        let board_id: i64 = self
            .conn
            .query_row(
                "SELECT id FROM boards WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_owned(),
            })?;

        let mut values = [[0_u8; 9]; 9];
        let mut seen = [[false; 9]; 9];
        let mut select_cells = self
            .conn
            .prepare("SELECT row, col, value FROM cells WHERE board_id = ?1")?;
        let cells = select_cells.query_map(params![board_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;
        for cell in cells {
            let (row, col, value) = cell?;
            let (Ok(row), Ok(col), Ok(value)) = (
                usize::try_from(row),
                usize::try_from(col),
                u8::try_from(value),
            ) else {
                return Err(StoreError::Corrupt {
                    name: name.to_owned(),
                });
            };
            if row >= 9 || col >= 9 || seen[row][col] {
                return Err(StoreError::Corrupt {
                    name: name.to_owned(),
                });
            }
            seen[row][col] = true;
            values[row][col] = value;
        }

        // A stored board has exactly one row per cell; anything missing
        // means the database was torn or tampered with.
        if seen.iter().flatten().any(|&cell| !cell) {
            return Err(StoreError::Corrupt {
                name: name.to_owned(),
            });
        }

        let board = Board::from_values(Arc::new(BacktrackingSolver::new()), values).map_err(
            |_| StoreError::Corrupt {
                name: name.to_owned(),
            },
        )?;
        debug!("loaded board {name:?} from the database");
        Ok(board)
    }

    fn names(&self) -> Result<Vec<String>, StoreError> {
        let mut select_names = self.conn.prepare("SELECT name FROM boards ORDER BY name")?;
        let names = select_names
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}
