//! Appointment storage: insert, load, update, delete, and range listing.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row};
use uuid::Uuid;

use crate::model::Appointment;

use super::{Result, Storage, StorageError, parse_id, parse_optional_id, parse_timestamp};

const COLUMNS: &str =
    "id, client_id, service_id, staff_id, starts_at, notes, status, confirmation";

impl Storage {
    pub fn insert_appointment(&self, appointment: &Appointment) -> Result<()> {
        self.conn.execute(
            "INSERT INTO appointments
                (id, client_id, service_id, staff_id, starts_at, starts_sec, notes, status, confirmation)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                appointment.id.to_string(),
                appointment.client_id.map(|id| id.to_string()),
                appointment.service_id.map(|id| id.to_string()),
                appointment.staff_id.map(|id| id.to_string()),
                appointment.start.to_string(),
                appointment.start.as_second(),
                &appointment.notes,
                appointment.status.as_str(),
                appointment.confirmation.as_str(),
            ],
        )?;
        Ok(())
    }

    /// Overwrites an appointment. Returns `false` if no such appointment exists.
    pub fn update_appointment(&self, appointment: &Appointment) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE appointments
             SET client_id = ?1, service_id = ?2, staff_id = ?3, starts_at = ?4,
                 starts_sec = ?5, notes = ?6, status = ?7, confirmation = ?8
             WHERE id = ?9",
            rusqlite::params![
                appointment.client_id.map(|id| id.to_string()),
                appointment.service_id.map(|id| id.to_string()),
                appointment.staff_id.map(|id| id.to_string()),
                appointment.start.to_string(),
                appointment.start.as_second(),
                &appointment.notes,
                appointment.status.as_str(),
                appointment.confirmation.as_str(),
                appointment.id.to_string(),
            ],
        )?;
        Ok(rows > 0)
    }

    /// Removes an appointment. Returns `false` if it was already gone.
    pub fn delete_appointment(&self, id: Uuid) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM appointments WHERE id = ?1", [id.to_string()])?;
        Ok(rows > 0)
    }

    pub fn load_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        let sql = format!("SELECT {COLUMNS} FROM appointments WHERE id = ?1");
        let row = self
            .conn
            .query_row(&sql, [id.to_string()], AppointmentRow::read)
            .optional()?;
        row.map(AppointmentRow::into_appointment).transpose()
    }

    /// Appointments for `staff_id` starting in `[from, until)`, ordered by start.
    pub fn appointments_between(
        &self,
        staff_id: Uuid,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Appointment>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM appointments
             WHERE staff_id = ?1 AND starts_sec >= ?2 AND starts_sec < ?3
             ORDER BY starts_sec, id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        stmt.query_map(
            rusqlite::params![staff_id.to_string(), from.as_second(), until.as_second()],
            AppointmentRow::read,
        )?
        .map(|row| row?.into_appointment())
        .collect()
    }
}

/// Raw column values, converted outside the `rusqlite` row closure so
/// parse failures surface as [`StorageError::Corrupt`].
struct AppointmentRow {
    id: String,
    client_id: Option<String>,
    service_id: Option<String>,
    staff_id: Option<String>,
    starts_at: String,
    notes: Option<String>,
    status: String,
    confirmation: String,
}

impl AppointmentRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            client_id: row.get(1)?,
            service_id: row.get(2)?,
            staff_id: row.get(3)?,
            starts_at: row.get(4)?,
            notes: row.get(5)?,
            status: row.get(6)?,
            confirmation: row.get(7)?,
        })
    }

    fn into_appointment(self) -> Result<Appointment> {
        Ok(Appointment {
            id: parse_id(&self.id)?,
            client_id: parse_optional_id(self.client_id)?,
            service_id: parse_optional_id(self.service_id)?,
            staff_id: parse_optional_id(self.staff_id)?,
            start: parse_timestamp(&self.starts_at)?,
            notes: self.notes,
            status: self
                .status
                .parse()
                .map_err(|e| StorageError::Corrupt(format!("appointment {}: {e}", self.id)))?,
            confirmation: self
                .confirmation
                .parse()
                .map_err(|e| StorageError::Corrupt(format!("appointment {}: {e}", self.id)))?,
        })
    }
}
