//! Blockout storage: insert, load, update, delete, and range listing.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row};
use uuid::Uuid;

use crate::model::Blockout;

use super::{Result, Storage, StorageError, parse_id, parse_timestamp};

const COLUMNS: &str = "id, staff_id, starts_at, ends_at, reason, notes";

impl Storage {
    pub fn insert_blockout(&self, blockout: &Blockout) -> Result<()> {
        self.conn.execute(
            "INSERT INTO blockouts
                (id, staff_id, starts_at, starts_sec, ends_at, ends_sec, reason, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                blockout.id.to_string(),
                blockout.staff_id.to_string(),
                blockout.start.to_string(),
                blockout.start.as_second(),
                blockout.end.to_string(),
                blockout.end.as_second(),
                blockout.reason.as_str(),
                &blockout.notes,
            ],
        )?;
        Ok(())
    }

    /// Overwrites a blockout. Returns `false` if no such blockout exists.
    pub fn update_blockout(&self, blockout: &Blockout) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE blockouts
             SET staff_id = ?1, starts_at = ?2, starts_sec = ?3, ends_at = ?4, ends_sec = ?5,
                 reason = ?6, notes = ?7
             WHERE id = ?8",
            rusqlite::params![
                blockout.staff_id.to_string(),
                blockout.start.to_string(),
                blockout.start.as_second(),
                blockout.end.to_string(),
                blockout.end.as_second(),
                blockout.reason.as_str(),
                &blockout.notes,
                blockout.id.to_string(),
            ],
        )?;
        Ok(rows > 0)
    }

    /// Removes a blockout. Returns `false` if it was already gone.
    pub fn delete_blockout(&self, id: Uuid) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM blockouts WHERE id = ?1", [id.to_string()])?;
        Ok(rows > 0)
    }

    pub fn load_blockout(&self, id: Uuid) -> Result<Option<Blockout>> {
        let sql = format!("SELECT {COLUMNS} FROM blockouts WHERE id = ?1");
        let row = self
            .conn
            .query_row(&sql, [id.to_string()], BlockoutRow::read)
            .optional()?;
        row.map(BlockoutRow::into_blockout).transpose()
    }

    /// Blockouts for `staff_id` that overlap `[from, until)`, ordered by start.
    ///
    /// A blockout that began before `from` but is still running is included.
    pub fn blockouts_between(
        &self,
        staff_id: Uuid,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Blockout>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM blockouts
             WHERE staff_id = ?1 AND starts_sec < ?3 AND ends_sec > ?2
             ORDER BY starts_sec, id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        stmt.query_map(
            rusqlite::params![staff_id.to_string(), from.as_second(), until.as_second()],
            BlockoutRow::read,
        )?
        .map(|row| row?.into_blockout())
        .collect()
    }
}

struct BlockoutRow {
    id: String,
    staff_id: String,
    starts_at: String,
    ends_at: String,
    reason: String,
    notes: Option<String>,
}

impl BlockoutRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            staff_id: row.get(1)?,
            starts_at: row.get(2)?,
            ends_at: row.get(3)?,
            reason: row.get(4)?,
            notes: row.get(5)?,
        })
    }

    fn into_blockout(self) -> Result<Blockout> {
        Ok(Blockout {
            id: parse_id(&self.id)?,
            staff_id: parse_id(&self.staff_id)?,
            start: parse_timestamp(&self.starts_at)?,
            end: parse_timestamp(&self.ends_at)?,
            reason: self
                .reason
                .parse()
                .map_err(|e| StorageError::Corrupt(format!("blockout {}: {e}", self.id)))?,
            notes: self.notes,
        })
    }
}
