//! The persistence collaborator, as the front desk sees it.
//!
//! The engine never owns appointment or blockout state. It asks a
//! [`BookingStore`] for records and sends changes back through it; which
//! database sits behind the trait is the implementor's business.

use jiff::Timestamp;
use uuid::Uuid;

use crate::model::{Appointment, Blockout, Catalog};
use crate::storage::{Storage, StorageError};

/// Request/response access to bookings.
///
/// Update and delete report `false` when the target no longer exists so the
/// caller can surface a not-found error without a second round trip.
pub trait BookingStore {
    type Error: std::error::Error + 'static;

    fn catalog(&self) -> Result<Catalog, Self::Error>;

    fn appointment(&self, id: Uuid) -> Result<Option<Appointment>, Self::Error>;
    fn insert_appointment(&self, appointment: &Appointment) -> Result<(), Self::Error>;
    fn update_appointment(&self, appointment: &Appointment) -> Result<bool, Self::Error>;
    fn delete_appointment(&self, id: Uuid) -> Result<bool, Self::Error>;

    fn blockout(&self, id: Uuid) -> Result<Option<Blockout>, Self::Error>;
    fn insert_blockout(&self, blockout: &Blockout) -> Result<(), Self::Error>;
    fn update_blockout(&self, blockout: &Blockout) -> Result<bool, Self::Error>;
    fn delete_blockout(&self, id: Uuid) -> Result<bool, Self::Error>;

    /// Appointments for a staff member starting in `[from, until)`.
    fn appointments_between(
        &self,
        staff_id: Uuid,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Appointment>, Self::Error>;

    /// Blockouts for a staff member overlapping `[from, until)`, including
    /// ones that started earlier and are still running.
    fn blockouts_between(
        &self,
        staff_id: Uuid,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Blockout>, Self::Error>;
}

impl BookingStore for Storage {
    type Error = StorageError;

    fn catalog(&self) -> Result<Catalog, StorageError> {
        self.load_catalog()
    }

    fn appointment(&self, id: Uuid) -> Result<Option<Appointment>, StorageError> {
        self.load_appointment(id)
    }

    fn insert_appointment(&self, appointment: &Appointment) -> Result<(), StorageError> {
        Storage::insert_appointment(self, appointment)
    }

    fn update_appointment(&self, appointment: &Appointment) -> Result<bool, StorageError> {
        Storage::update_appointment(self, appointment)
    }

    fn delete_appointment(&self, id: Uuid) -> Result<bool, StorageError> {
        Storage::delete_appointment(self, id)
    }

    fn blockout(&self, id: Uuid) -> Result<Option<Blockout>, StorageError> {
        self.load_blockout(id)
    }

    fn insert_blockout(&self, blockout: &Blockout) -> Result<(), StorageError> {
        Storage::insert_blockout(self, blockout)
    }

    fn update_blockout(&self, blockout: &Blockout) -> Result<bool, StorageError> {
        Storage::update_blockout(self, blockout)
    }

    fn delete_blockout(&self, id: Uuid) -> Result<bool, StorageError> {
        Storage::delete_blockout(self, id)
    }

    fn appointments_between(
        &self,
        staff_id: Uuid,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Appointment>, StorageError> {
        Storage::appointments_between(self, staff_id, from, until)
    }

    fn blockouts_between(
        &self,
        staff_id: Uuid,
        from: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<Blockout>, StorageError> {
        Storage::blockouts_between(self, staff_id, from, until)
    }
}
