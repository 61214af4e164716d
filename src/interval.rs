//! Interval model: a staff member's time occupied by an appointment or a blockout.
//!
//! Every record entering the engine is normalized to a half-open `[start, end)`
//! interval here. Malformed records (end at or before start, missing or
//! dangling references) are rejected at this boundary and never reach the
//! overlap detector.

use std::cmp::Ordering;
use std::fmt;

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Appointment, Blockout, Catalog};

/// What kind of record an interval came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntervalKind {
    Appointment,
    Blockout,
}

/// A half-open occupation `[start, end)` of one staff member's time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    /// Id of the appointment or blockout this was built from.
    pub id: Uuid,
    pub staff_id: Uuid,
    pub start: Timestamp,
    pub end: Timestamp,
    pub kind: IntervalKind,
}

/// Which reference an appointment is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Client,
    Service,
    Staff,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Client => "client",
            Self::Service => "service",
            Self::Staff => "staff",
        })
    }
}

/// A record that cannot be placed on a timeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{id} ends at or before it starts ({start} .. {end})")]
    EmptyInterval {
        id: Uuid,
        start: Timestamp,
        end: Timestamp,
    },

    #[error("appointment {id} has no {reference}")]
    MissingReference { id: Uuid, reference: Reference },

    #[error("appointment {id} refers to unknown {reference} {target}")]
    UnknownReference {
        id: Uuid,
        reference: Reference,
        target: Uuid,
    },

    #[error("{id} ends beyond the representable time range")]
    OutOfRange { id: Uuid },
}

impl Interval {
    /// Builds an interval, rejecting `end <= start`.
    pub fn new(
        id: Uuid,
        staff_id: Uuid,
        start: Timestamp,
        end: Timestamp,
        kind: IntervalKind,
    ) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::EmptyInterval { id, start, end });
        }
        Ok(Self {
            id,
            staff_id,
            start,
            end,
            kind,
        })
    }

    /// Builds an interval from a start and a duration in minutes.
    pub fn with_duration(
        id: Uuid,
        staff_id: Uuid,
        start: Timestamp,
        minutes: u32,
        kind: IntervalKind,
    ) -> Result<Self, ValidationError> {
        let end = start
            .checked_add(SignedDuration::from_mins(i64::from(minutes)))
            .map_err(|_| ValidationError::OutOfRange { id })?;
        Self::new(id, staff_id, start, end, kind)
    }

    /// Normalizes an appointment, deriving its end from the service duration.
    ///
    /// Client, service, and staff must all be present and known to `catalog`.
    pub fn from_appointment(
        appointment: &Appointment,
        catalog: &Catalog,
    ) -> Result<Self, ValidationError> {
        let id = appointment.id;
        let missing = |reference| ValidationError::MissingReference { id, reference };
        let unknown = |reference, target| ValidationError::UnknownReference {
            id,
            reference,
            target,
        };

        let client_id = appointment
            .client_id
            .ok_or_else(|| missing(Reference::Client))?;
        let service_id = appointment
            .service_id
            .ok_or_else(|| missing(Reference::Service))?;
        let staff_id = appointment
            .staff_id
            .ok_or_else(|| missing(Reference::Staff))?;

        if catalog.client(client_id).is_none() {
            return Err(unknown(Reference::Client, client_id));
        }
        if catalog.staff(staff_id).is_none() {
            return Err(unknown(Reference::Staff, staff_id));
        }
        let service = catalog
            .service(service_id)
            .ok_or_else(|| unknown(Reference::Service, service_id))?;

        Self::with_duration(
            id,
            staff_id,
            appointment.start,
            service.duration_minutes,
            IntervalKind::Appointment,
        )
    }

    pub fn from_blockout(blockout: &Blockout) -> Result<Self, ValidationError> {
        Self::new(
            blockout.id,
            blockout.staff_id,
            blockout.start,
            blockout.end,
            IntervalKind::Blockout,
        )
    }

    /// Half-open overlap: `a.start < b.end && b.start < a.end`, same staff only.
    ///
    /// Back-to-back intervals touching at a boundary do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.staff_id == other.staff_id && self.start < other.end && other.start < self.end
    }

    /// The ordering every layout decision is made in: start, then record id.
    ///
    /// End and kind only break ties between records that share an id, which
    /// keeps the order total.
    pub fn layout_order(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.end.cmp(&other.end))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}
