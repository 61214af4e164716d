//! Core data model for the front desk.
//!
//! These are the records the persistence collaborator hands to the engine:
//! staff, services, clients, appointments, and blockouts. The engine borrows
//! them read-only; every change goes back out as a request.

mod appointment;
mod blockout;
mod catalog;
mod status;

pub use appointment::{Appointment, AppointmentDraft};
pub use blockout::{Blockout, BlockoutDraft, BlockoutReason};
pub use catalog::{Catalog, Client, ServiceDefinition, StaffMember};
pub use status::{AppointmentStatus, Confirmation, ParseStatusError};
