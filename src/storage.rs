//! Local persistence for the front desk, backed by a single `SQLite` file.
//!
//! ```text
//! <root>/salon.sqlite
//!   staff, services, clients   # reference records
//!   appointments               # bookings; references may dangle
//!   blockouts                  # unavailable staff time
//! ```
//!
//! Ids are stored as UUID strings and instants as RFC 3339 text. Each
//! instant also gets an epoch-second column so range queries compare
//! integers instead of strings.

mod appointments;
mod blockouts;
mod catalog;

use std::{fs, io, path::Path, path::PathBuf};

use rusqlite::Connection;
use uuid::Uuid;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no {table} id starts with '{prefix}'")]
    NoMatch { table: &'static str, prefix: String },

    #[error("'{prefix}' is ambiguous: matches {count} {table} ids")]
    Ambiguous {
        table: &'static str,
        prefix: String,
        count: usize,
    },

    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS staff (
    id      TEXT PRIMARY KEY,
    name    TEXT NOT NULL,
    active  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS services (
    id                TEXT PRIMARY KEY,
    name              TEXT NOT NULL,
    duration_minutes  INTEGER NOT NULL,
    price             INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS clients (
    id     TEXT PRIMARY KEY,
    name   TEXT NOT NULL,
    phone  TEXT
);

CREATE TABLE IF NOT EXISTS appointments (
    id            TEXT PRIMARY KEY,
    client_id     TEXT,
    service_id    TEXT,
    staff_id      TEXT,
    starts_at     TEXT NOT NULL,
    starts_sec    INTEGER NOT NULL,
    notes         TEXT,
    status        TEXT NOT NULL,
    confirmation  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS appointments_by_staff ON appointments (staff_id, starts_sec);

CREATE TABLE IF NOT EXISTS blockouts (
    id          TEXT PRIMARY KEY,
    staff_id    TEXT NOT NULL,
    starts_at   TEXT NOT NULL,
    starts_sec  INTEGER NOT NULL,
    ends_at     TEXT NOT NULL,
    ends_sec    INTEGER NOT NULL,
    reason      TEXT NOT NULL,
    notes       TEXT
);

CREATE INDEX IF NOT EXISTS blockouts_by_staff ON blockouts (staff_id, starts_sec);
";

/// Tables whose ids can be resolved from a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Staff,
    Services,
    Clients,
    Appointments,
    Blockouts,
}

impl Table {
    fn name(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Services => "services",
            Self::Clients => "clients",
            Self::Appointments => "appointments",
            Self::Blockouts => "blockouts",
        }
    }
}

/// `SQLite`-backed storage for the catalog, appointments, and blockouts.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the database at `path` and applies the schema.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Returns the default database path: `~/.salon/salon.sqlite`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".salon").join("salon.sqlite"))
    }

    /// Resolves a full UUID or an unambiguous prefix to an id in `table`.
    pub fn resolve_id(&self, table: Table, reference: &str) -> Result<Uuid> {
        if let Ok(id) = reference.parse::<Uuid>() {
            return Ok(id);
        }

        // Ids are lowercase hex and dashes; anything else would reach LIKE
        // as a wildcard.
        let is_id_text = |c: char| c.is_ascii_hexdigit() || c == '-';
        if reference.is_empty() || !reference.chars().all(is_id_text) {
            return Err(StorageError::NoMatch {
                table: table.name(),
                prefix: reference.to_string(),
            });
        }

        let sql = format!(
            "SELECT id FROM {} WHERE id LIKE ?1 || '%' ORDER BY id",
            table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let ids = stmt
            .query_map([reference.to_ascii_lowercase()], |row| row.get::<_, String>(0))?
            .collect::<core::result::Result<Vec<_>, _>>()?;

        match ids.as_slice() {
            [] => Err(StorageError::NoMatch {
                table: table.name(),
                prefix: reference.to_string(),
            }),
            [only] => parse_id(only),
            _ => Err(StorageError::Ambiguous {
                table: table.name(),
                prefix: reference.to_string(),
                count: ids.len(),
            }),
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    raw.parse::<Uuid>()
        .map_err(|e| StorageError::Corrupt(format!("invalid id {raw:?}: {e}")))
}

fn parse_optional_id(raw: Option<String>) -> Result<Option<Uuid>> {
    raw.as_deref().map(parse_id).transpose()
}

fn parse_timestamp(raw: &str) -> Result<jiff::Timestamp> {
    raw.parse::<jiff::Timestamp>()
        .map_err(|e| StorageError::Corrupt(format!("invalid timestamp {raw:?}: {e}")))
}
