//! Appointment records: a client booked with a staff member for a service.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AppointmentStatus, Confirmation};

/// A booked appointment as the store returns it.
///
/// References are optional because the store may hand back records whose
/// client, service, or staff has gone missing. Such records are skipped by
/// the timeline rather than failing the build.
///
/// There is no stored end: it is always `start` plus the service duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub staff_id: Option<Uuid>,
    pub start: Timestamp,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub confirmation: Confirmation,
}

/// What the desk supplies when booking. Everything else is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub client_id: Uuid,
    pub service_id: Uuid,
    pub staff_id: Uuid,
    pub start: Timestamp,
    pub notes: Option<String>,
}

impl Appointment {
    /// A freshly booked appointment: `scheduled`, reminder not yet sent.
    pub fn book(draft: AppointmentDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id: Some(draft.client_id),
            service_id: Some(draft.service_id),
            staff_id: Some(draft.staff_id),
            start: draft.start,
            notes: draft.notes,
            status: AppointmentStatus::Scheduled,
            confirmation: Confirmation::Unsent,
        }
    }

    /// Moves to `next`, returning the status it left. Confirmation is untouched.
    pub fn set_status(&mut self, next: AppointmentStatus) -> AppointmentStatus {
        std::mem::replace(&mut self.status, next)
    }

    /// Flips the confirmation flag, returning the new value. Status is untouched.
    pub fn toggle_confirmation(&mut self) -> Confirmation {
        self.confirmation = self.confirmation.toggled();
        self.confirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> AppointmentDraft {
        AppointmentDraft {
            client_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            staff_id: Uuid::new_v4(),
            start: Timestamp::new(1_800_000_000, 0).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn booking_starts_scheduled_and_unsent() {
        let appt = Appointment::book(draft());
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(appt.confirmation, Confirmation::Unsent);
        assert!(appt.client_id.is_some() && appt.service_id.is_some() && appt.staff_id.is_some());
    }

    #[test]
    fn status_change_leaves_confirmation_alone() {
        let mut appt = Appointment::book(draft());
        appt.toggle_confirmation();

        let previous = appt.set_status(AppointmentStatus::NoShow);

        assert_eq!(previous, AppointmentStatus::Scheduled);
        assert_eq!(appt.status, AppointmentStatus::NoShow);
        assert_eq!(appt.confirmation, Confirmation::Sent);
    }

    #[test]
    fn confirmation_toggle_leaves_status_alone() {
        let mut appt = Appointment::book(draft());
        appt.set_status(AppointmentStatus::Arrived);

        assert_eq!(appt.toggle_confirmation(), Confirmation::Sent);
        assert_eq!(appt.toggle_confirmation(), Confirmation::Unsent);
        assert_eq!(appt.status, AppointmentStatus::Arrived);
    }

    #[test]
    fn completed_can_be_corrected_back() {
        let mut appt = Appointment::book(draft());
        appt.set_status(AppointmentStatus::Completed);
        appt.set_status(AppointmentStatus::Arrived);
        assert_eq!(appt.status, AppointmentStatus::Arrived);
    }

    #[test]
    fn every_status_reaches_every_status() {
        for from in AppointmentStatus::ALL {
            for to in AppointmentStatus::ALL {
                let mut appt = Appointment::book(draft());
                appt.set_status(from);

                assert_eq!(appt.set_status(to), from);
                assert_eq!(appt.status, to, "{from} -> {to}");
            }
        }
    }
}
