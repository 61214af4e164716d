//! The front desk: shapes, validates, and sends every change to bookings.
//!
//! Each operation checks its request against the catalog and the interval
//! rules before anything reaches the store. Only after the store
//! acknowledges a change are listeners told which timelines went stale.
//! Nothing is cached here; every read goes back to the store.

use jiff::{Timestamp, ToSpan};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use uuid::Uuid;

use crate::interval::{Interval, Reference, ValidationError};
use crate::model::{
    Appointment, AppointmentDraft, AppointmentStatus, Blockout, BlockoutDraft, Catalog,
    Confirmation, ParseStatusError,
};
use crate::notify::{Listeners, StaleTimeline, SubscriptionId};
use crate::store::BookingStore;
use crate::timeline::{self, Timeline, TimelineRange, TimelineRequest};

/// What a desk operation can fail with.
#[derive(Debug, thiserror::Error)]
pub enum DeskError<E: std::error::Error + 'static> {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error(transparent)]
    InvalidState(#[from] ParseStatusError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("time out of range: {0}")]
    Time(#[from] jiff::Error),

    #[error(transparent)]
    Store(E),
}

pub type Result<T, E> = core::result::Result<T, DeskError<E>>;

/// New values for a reschedule. The end is recomputed from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reschedule {
    pub start: Timestamp,
    pub staff_id: Uuid,
    pub service_id: Uuid,
}

/// Coordinates mutations against a [`BookingStore`].
pub struct FrontDesk<S> {
    store: S,
    time_zone: TimeZone,
    listeners: Listeners,
}

impl<S: BookingStore> FrontDesk<S> {
    /// A desk drawing calendar days in `time_zone`.
    pub fn new(store: S, time_zone: TimeZone) -> Self {
        Self {
            store,
            time_zone,
            listeners: Listeners::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Registers a callback for stale-timeline notices.
    pub fn subscribe(&mut self, callback: impl Fn(&StaleTimeline) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ── Reads ──

    /// Fetches records for `staff_id` over `range` and builds the timeline.
    ///
    /// Either a complete timeline comes back or an error does; callers keep
    /// showing what they had on error.
    pub fn timeline(&self, staff_id: Uuid, range: TimelineRange) -> Result<Timeline, S::Error> {
        let days = range.days();
        let first = range.first_day();
        let last = days.last().copied().unwrap_or(first);
        let from = self.day_start(first)?;
        let until = self.day_start(last.tomorrow()?)?;
        // Appointments are listed by start; one booked late the evening
        // before can still run into the first day.
        let evening_before = self.day_start(first.yesterday()?)?;

        let catalog = self.store.catalog().map_err(DeskError::Store)?;
        let appointments = self
            .store
            .appointments_between(staff_id, evening_before, until)
            .map_err(DeskError::Store)?;
        let blockouts = self
            .store
            .blockouts_between(staff_id, from, until)
            .map_err(DeskError::Store)?;

        let request = TimelineRequest {
            staff_id,
            range,
            time_zone: self.time_zone.clone(),
        };
        Ok(timeline::build(&request, &appointments, &blockouts, &catalog))
    }

    // ── Appointments ──

    /// Books a new appointment as `scheduled` with confirmation `unsent`.
    pub fn book_appointment(&self, draft: AppointmentDraft) -> Result<Appointment, S::Error> {
        let appointment = Appointment::book(draft);
        let catalog = self.store.catalog().map_err(DeskError::Store)?;
        check_references(&appointment, &catalog)?;

        self.store
            .insert_appointment(&appointment)
            .map_err(DeskError::Store)?;
        tracing::info!(appointment = %appointment.id, start = %appointment.start, "booked");

        self.listeners.notify(self.stale_for_appointment(&appointment));
        Ok(appointment)
    }

    /// Parses `status` and applies it. Unknown values are rejected before
    /// the store is touched.
    pub fn change_status(&self, id: Uuid, status: &str) -> Result<Appointment, S::Error> {
        let status: AppointmentStatus = status.parse()?;
        self.set_status(id, status)
    }

    /// Moves an appointment to `status`. Setting the current status again
    /// succeeds and leaves the record as it was.
    pub fn set_status(&self, id: Uuid, status: AppointmentStatus) -> Result<Appointment, S::Error> {
        let mut appointment = self.require_appointment(id)?;
        let previous = appointment.status;
        appointment.set_status(status);

        self.save_appointment(&appointment)?;
        tracing::info!(appointment = %id, from = %previous, to = %status, "status changed");

        self.listeners.notify(self.stale_for_appointment(&appointment));
        Ok(appointment)
    }

    /// Flips whether the reminder has been sent. Status is not touched.
    pub fn toggle_confirmation(&self, id: Uuid) -> Result<Confirmation, S::Error> {
        let mut appointment = self.require_appointment(id)?;
        let confirmation = appointment.toggle_confirmation();

        self.save_appointment(&appointment)?;
        tracing::info!(appointment = %id, confirmation = %confirmation, "confirmation toggled");

        self.listeners.notify(self.stale_for_appointment(&appointment));
        Ok(confirmation)
    }

    /// Moves an appointment to a new start, staff member, and service.
    ///
    /// Both the old and the new day are reported stale.
    pub fn reschedule(&self, id: Uuid, change: Reschedule) -> Result<Appointment, S::Error> {
        let before = self.require_appointment(id)?;

        let mut after = before.clone();
        after.start = change.start;
        after.staff_id = Some(change.staff_id);
        after.service_id = Some(change.service_id);

        let catalog = self.store.catalog().map_err(DeskError::Store)?;
        check_references(&after, &catalog)?;

        self.save_appointment(&after)?;
        tracing::info!(
            appointment = %id,
            from = %before.start,
            to = %after.start,
            staff = %change.staff_id,
            "rescheduled"
        );

        let mut stale = self.stale_for_appointment(&before);
        stale.extend(self.stale_for_appointment(&after));
        self.listeners.notify(stale);
        Ok(after)
    }

    /// Deletes an appointment. It disappears from every later build.
    pub fn delete_appointment(&self, id: Uuid) -> Result<(), S::Error> {
        let appointment = self.require_appointment(id)?;
        if !self
            .store
            .delete_appointment(id)
            .map_err(DeskError::Store)?
        {
            return Err(not_found("appointment", id));
        }
        tracing::info!(appointment = %id, "deleted");

        self.listeners.notify(self.stale_for_appointment(&appointment));
        Ok(())
    }

    // ── Blockouts ──

    pub fn create_blockout(&self, draft: BlockoutDraft) -> Result<Blockout, S::Error> {
        let blockout = Blockout::from_draft(Uuid::new_v4(), draft);
        self.check_blockout(&blockout)?;

        self.store
            .insert_blockout(&blockout)
            .map_err(DeskError::Store)?;
        tracing::info!(blockout = %blockout.id, reason = %blockout.reason, "blockout created");

        self.listeners.notify(self.stale_for_blockout(&blockout));
        Ok(blockout)
    }

    pub fn update_blockout(&self, id: Uuid, draft: BlockoutDraft) -> Result<Blockout, S::Error> {
        let before = self
            .store
            .blockout(id)
            .map_err(DeskError::Store)?
            .ok_or_else(|| not_found("blockout", id))?;
        let after = Blockout::from_draft(id, draft);
        self.check_blockout(&after)?;

        if !self
            .store
            .update_blockout(&after)
            .map_err(DeskError::Store)?
        {
            return Err(not_found("blockout", id));
        }
        tracing::info!(blockout = %id, "blockout updated");

        let mut stale = self.stale_for_blockout(&before);
        stale.extend(self.stale_for_blockout(&after));
        self.listeners.notify(stale);
        Ok(after)
    }

    pub fn delete_blockout(&self, id: Uuid) -> Result<(), S::Error> {
        let blockout = self
            .store
            .blockout(id)
            .map_err(DeskError::Store)?
            .ok_or_else(|| not_found("blockout", id))?;
        if !self.store.delete_blockout(id).map_err(DeskError::Store)? {
            return Err(not_found("blockout", id));
        }
        tracing::info!(blockout = %id, "blockout deleted");

        self.listeners.notify(self.stale_for_blockout(&blockout));
        Ok(())
    }

    // ── Helpers ──

    fn require_appointment(&self, id: Uuid) -> Result<Appointment, S::Error> {
        self.store
            .appointment(id)
            .map_err(DeskError::Store)?
            .ok_or_else(|| not_found("appointment", id))
    }

    fn save_appointment(&self, appointment: &Appointment) -> Result<(), S::Error> {
        if self
            .store
            .update_appointment(appointment)
            .map_err(DeskError::Store)?
        {
            Ok(())
        } else {
            Err(not_found("appointment", appointment.id))
        }
    }

    fn check_blockout(&self, blockout: &Blockout) -> Result<(), S::Error> {
        let catalog = self.store.catalog().map_err(DeskError::Store)?;
        if catalog.staff(blockout.staff_id).is_none() {
            return Err(not_found("staff member", blockout.staff_id));
        }
        Interval::from_blockout(blockout)?;
        Ok(())
    }

    fn day_start(&self, day: Date) -> Result<Timestamp, S::Error> {
        Ok(day.to_zoned(self.time_zone.clone())?.timestamp())
    }

    /// Every day `[start, end)` touches, as stale notices for `staff_id`.
    fn stale_days(&self, staff_id: Uuid, start: Timestamp, end: Timestamp) -> Vec<StaleTimeline> {
        let (first, last) = timeline::day_span(start, end, &self.time_zone);
        first
            .series(1.day())
            .take_while(|day| *day <= last)
            .map(|day| StaleTimeline { staff_id, day })
            .collect()
    }

    fn stale_for_appointment(&self, appointment: &Appointment) -> Vec<StaleTimeline> {
        let Some(staff_id) = appointment.staff_id else {
            return Vec::new();
        };
        // Without a resolvable service the end is unknown; the start day is
        // still stale.
        let end = self
            .store
            .catalog()
            .ok()
            .and_then(|catalog| Interval::from_appointment(appointment, &catalog).ok())
            .map_or(appointment.start, |interval| interval.end);
        self.stale_days(staff_id, appointment.start, end)
    }

    fn stale_for_blockout(&self, blockout: &Blockout) -> Vec<StaleTimeline> {
        self.stale_days(blockout.staff_id, blockout.start, blockout.end)
    }
}

fn not_found<E: std::error::Error + 'static>(kind: &'static str, id: Uuid) -> DeskError<E> {
    DeskError::NotFound { kind, id }
}

/// Booking-time check: every reference must resolve and the derived
/// interval must be well formed. Missing references surface as not-found.
fn check_references<E: std::error::Error + 'static>(
    appointment: &Appointment,
    catalog: &Catalog,
) -> core::result::Result<(), DeskError<E>> {
    match Interval::from_appointment(appointment, catalog) {
        Ok(_) => Ok(()),
        Err(ValidationError::UnknownReference {
            reference, target, ..
        }) => Err(DeskError::NotFound {
            kind: match reference {
                Reference::Client => "client",
                Reference::Service => "service",
                Reference::Staff => "staff member",
            },
            id: target,
        }),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use jiff::civil::date;
    use tempfile::TempDir;

    use crate::interval::IntervalKind;
    use crate::model::{BlockoutReason, Client, ServiceDefinition, StaffMember};
    use crate::storage::Storage;

    struct Fixture {
        _dir: TempDir,
        desk: FrontDesk<Storage>,
        staff: Uuid,
        other_staff: Uuid,
        service: Uuid,
        long_service: Uuid,
        client: Uuid,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("salon.sqlite")).unwrap();

        let staff = Uuid::new_v4();
        let other_staff = Uuid::new_v4();
        let service = Uuid::new_v4();
        let long_service = Uuid::new_v4();
        let client = Uuid::new_v4();

        for (id, name) in [(staff, "Robin"), (other_staff, "Kai")] {
            storage
                .insert_staff(&StaffMember {
                    id,
                    name: name.into(),
                    active: true,
                })
                .unwrap();
        }
        for (id, minutes) in [(service, 30), (long_service, 60)] {
            storage
                .insert_service(&ServiceDefinition {
                    id,
                    name: format!("{minutes} min"),
                    duration_minutes: minutes,
                    price: 3_000,
                })
                .unwrap();
        }
        storage
            .insert_client(&Client {
                id: client,
                name: "Sam".into(),
                phone: None,
            })
            .unwrap();

        Fixture {
            _dir: dir,
            desk: FrontDesk::new(storage, TimeZone::UTC),
            staff,
            other_staff,
            service,
            long_service,
            client,
        }
    }

    fn at(hour: i8, minute: i8) -> Timestamp {
        date(2026, 10, 16)
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp()
    }

    fn today() -> TimelineRange {
        TimelineRange::Day(date(2026, 10, 16))
    }

    fn book(f: &Fixture, hour: i8, minute: i8) -> Appointment {
        f.desk
            .book_appointment(AppointmentDraft {
                client_id: f.client,
                service_id: f.service,
                staff_id: f.staff,
                start: at(hour, minute),
                notes: None,
            })
            .unwrap()
    }

    fn record_notices(desk: &mut FrontDesk<Storage>) -> Rc<RefCell<Vec<StaleTimeline>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        desk.subscribe(move |n| sink.borrow_mut().push(*n));
        seen
    }

    #[test]
    fn booking_lands_on_the_timeline() {
        let f = fixture();
        let appt = book(&f, 9, 0);

        let timeline = f.desk.timeline(f.staff, today()).unwrap();

        assert_eq!(timeline.entries.len(), 1);
        assert_eq!(timeline.entries[0].id(), appt.id);
        assert_eq!(timeline.entries[0].end, at(9, 30));
    }

    #[test]
    fn booking_with_unknown_service_is_not_found() {
        let f = fixture();
        let err = f
            .desk
            .book_appointment(AppointmentDraft {
                client_id: f.client,
                service_id: Uuid::new_v4(),
                staff_id: f.staff,
                start: at(9, 0),
                notes: None,
            })
            .unwrap_err();

        assert!(matches!(err, DeskError::NotFound { kind: "service", .. }));
        assert!(f.desk.timeline(f.staff, today()).unwrap().entries.is_empty());
    }

    #[test]
    fn change_status_twice_is_idempotent() {
        let f = fixture();
        let appt = book(&f, 9, 0);

        let first = f.desk.change_status(appt.id, "completed").unwrap();
        let second = f.desk.change_status(appt.id, "completed").unwrap();

        assert_eq!(first, second);
        assert_eq!(second.status, AppointmentStatus::Completed);
    }

    #[test]
    fn unknown_status_is_invalid_state_and_changes_nothing() {
        let mut f = fixture();
        let appt = book(&f, 9, 0);
        let notices = record_notices(&mut f.desk);

        let err = f.desk.change_status(appt.id, "cancelled").unwrap_err();

        assert!(matches!(err, DeskError::InvalidState(_)));
        assert!(notices.borrow().is_empty());
        let stored = f.desk.store().load_appointment(appt.id).unwrap().unwrap();
        assert_eq!(stored.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn status_change_on_missing_appointment_is_not_found() {
        let f = fixture();
        let err = f.desk.change_status(Uuid::new_v4(), "arrived").unwrap_err();
        assert!(matches!(err, DeskError::NotFound { kind: "appointment", .. }));
    }

    #[test]
    fn status_change_notifies_affected_day() {
        let mut f = fixture();
        let appt = book(&f, 9, 0);
        let notices = record_notices(&mut f.desk);

        f.desk.set_status(appt.id, AppointmentStatus::Arrived).unwrap();

        assert_eq!(
            *notices.borrow(),
            vec![StaleTimeline {
                staff_id: f.staff,
                day: date(2026, 10, 16),
            }]
        );
    }

    #[test]
    fn desk_moves_between_every_pair_of_statuses() {
        let f = fixture();
        let appt = book(&f, 9, 0);

        for from in AppointmentStatus::ALL {
            for to in AppointmentStatus::ALL {
                f.desk.set_status(appt.id, from).unwrap();
                let changed = f.desk.set_status(appt.id, to).unwrap();

                assert_eq!(changed.status, to, "{from} -> {to}");
                let stored = f.desk.store().load_appointment(appt.id).unwrap().unwrap();
                assert_eq!(stored.status, to);
            }
        }
    }

    #[test]
    fn confirmation_toggle_keeps_status() {
        let f = fixture();
        let appt = book(&f, 9, 0);
        f.desk.set_status(appt.id, AppointmentStatus::Arrived).unwrap();

        assert_eq!(f.desk.toggle_confirmation(appt.id).unwrap(), Confirmation::Sent);

        let stored = f.desk.store().load_appointment(appt.id).unwrap().unwrap();
        assert_eq!(stored.status, AppointmentStatus::Arrived);
        assert_eq!(stored.confirmation, Confirmation::Sent);
    }

    #[test]
    fn no_show_stays_on_grid_until_deleted() {
        let f = fixture();
        let z = book(&f, 14, 0);
        let partner = book(&f, 14, 15);

        f.desk.set_status(z.id, AppointmentStatus::NoShow).unwrap();
        let timeline = f.desk.timeline(f.staff, today()).unwrap();
        assert_eq!(timeline.entry(partner.id).unwrap().lane_count, 2);

        f.desk.delete_appointment(z.id).unwrap();
        let timeline = f.desk.timeline(f.staff, today()).unwrap();
        assert!(timeline.entry(z.id).is_none());
        assert_eq!(timeline.entry(partner.id).unwrap().lane_count, 1);
    }

    #[test]
    fn deleting_twice_is_not_found() {
        let f = fixture();
        let appt = book(&f, 9, 0);
        f.desk.delete_appointment(appt.id).unwrap();

        let err = f.desk.delete_appointment(appt.id).unwrap_err();
        assert!(matches!(err, DeskError::NotFound { .. }));
    }

    #[test]
    fn reschedule_recomputes_end_and_notifies_both_days() {
        let mut f = fixture();
        let appt = book(&f, 9, 0);
        let notices = record_notices(&mut f.desk);

        let new_start = date(2026, 10, 17)
            .at(11, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp();
        let moved = f
            .desk
            .reschedule(
                appt.id,
                Reschedule {
                    start: new_start,
                    staff_id: f.other_staff,
                    service_id: f.long_service,
                },
            )
            .unwrap();

        assert_eq!(moved.staff_id, Some(f.other_staff));
        let timeline = f
            .desk
            .timeline(f.other_staff, TimelineRange::Day(date(2026, 10, 17)))
            .unwrap();
        let entry = timeline.entry(appt.id).unwrap();
        assert_eq!(entry.end.as_second() - entry.start.as_second(), 3_600);

        let days: Vec<_> = notices.borrow().iter().map(|n| (n.staff_id, n.day)).collect();
        assert_eq!(days.len(), 2);
        assert!(days.contains(&(f.staff, date(2026, 10, 16))));
        assert!(days.contains(&(f.other_staff, date(2026, 10, 17))));
    }

    #[test]
    fn reschedule_to_unknown_staff_changes_nothing() {
        let f = fixture();
        let appt = book(&f, 9, 0);

        let err = f
            .desk
            .reschedule(
                appt.id,
                Reschedule {
                    start: at(10, 0),
                    staff_id: Uuid::new_v4(),
                    service_id: f.service,
                },
            )
            .unwrap_err();

        assert!(matches!(err, DeskError::NotFound { kind: "staff member", .. }));
        let stored = f.desk.store().load_appointment(appt.id).unwrap().unwrap();
        assert_eq!(stored.start, at(9, 0));
    }

    #[test]
    fn blockout_lifecycle() {
        let f = fixture();
        let lunch = f
            .desk
            .create_blockout(BlockoutDraft {
                staff_id: f.staff,
                start: at(12, 0),
                end: at(13, 0),
                reason: BlockoutReason::Lunch,
                notes: None,
            })
            .unwrap();

        let timeline = f.desk.timeline(f.staff, today()).unwrap();
        assert_eq!(timeline.entries.len(), 1);
        assert_eq!(timeline.entries[0].kind, IntervalKind::Blockout);
        assert!(!timeline.entries[0].has_collision);

        let moved = f
            .desk
            .update_blockout(
                lunch.id,
                BlockoutDraft {
                    staff_id: f.staff,
                    start: at(13, 0),
                    end: at(14, 0),
                    reason: BlockoutReason::Lunch,
                    notes: Some("late lunch".into()),
                },
            )
            .unwrap();
        assert_eq!(moved.start, at(13, 0));

        f.desk.delete_blockout(lunch.id).unwrap();
        assert!(f.desk.timeline(f.staff, today()).unwrap().entries.is_empty());
    }

    #[test]
    fn leave_covers_every_day_and_notifies_each() {
        let mut f = fixture();
        let on = |d: Date, h| d.at(h, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();
        let notices = record_notices(&mut f.desk);

        let leave = f
            .desk
            .create_blockout(BlockoutDraft {
                staff_id: f.staff,
                start: on(date(2026, 10, 15), 9),
                end: on(date(2026, 10, 17), 18),
                reason: BlockoutReason::Leave,
                notes: None,
            })
            .unwrap();
        let appt = book(&f, 10, 0);

        let timeline = f.desk.timeline(f.staff, today()).unwrap();
        assert_eq!(timeline.entries.len(), 2);
        assert_eq!(timeline.entry(leave.id).unwrap().lane_count, 2);
        assert_eq!(timeline.entry(appt.id).unwrap().lane_index, 1);

        let week = TimelineRange::week_containing(date(2026, 10, 16), jiff::civil::Weekday::Monday)
            .unwrap();
        let timeline = f.desk.timeline(f.staff, week).unwrap();
        let leave_days: Vec<_> = timeline
            .entries
            .iter()
            .filter(|e| e.id() == leave.id)
            .map(|e| e.day)
            .collect();
        assert_eq!(
            leave_days,
            vec![date(2026, 10, 15), date(2026, 10, 16), date(2026, 10, 17)]
        );

        let days: Vec<_> = notices.borrow().iter().map(|n| n.day).collect();
        assert_eq!(
            days,
            vec![
                date(2026, 10, 15),
                date(2026, 10, 16),
                date(2026, 10, 17),
                date(2026, 10, 16),
            ]
        );
    }

    #[test]
    fn late_appointment_runs_into_the_next_day() {
        let mut f = fixture();
        let notices = record_notices(&mut f.desk);

        let late = f
            .desk
            .book_appointment(AppointmentDraft {
                client_id: f.client,
                service_id: f.long_service,
                staff_id: f.staff,
                start: at(23, 30),
                notes: None,
            })
            .unwrap();

        let next_day = f
            .desk
            .timeline(f.staff, TimelineRange::Day(date(2026, 10, 17)))
            .unwrap();
        assert_eq!(next_day.entry(late.id).unwrap().day, date(2026, 10, 17));

        let days: Vec<_> = notices.borrow().iter().map(|n| n.day).collect();
        assert_eq!(days, vec![date(2026, 10, 16), date(2026, 10, 17)]);
    }

    #[test]
    fn backwards_blockout_is_rejected_before_store() {
        let f = fixture();
        let err = f
            .desk
            .create_blockout(BlockoutDraft {
                staff_id: f.staff,
                start: at(13, 0),
                end: at(12, 0),
                reason: BlockoutReason::Other,
                notes: None,
            })
            .unwrap_err();

        assert!(matches!(
            err,
            DeskError::Validation(ValidationError::EmptyInterval { .. })
        ));
        assert!(f.desk.timeline(f.staff, today()).unwrap().entries.is_empty());
    }

    #[test]
    fn updating_missing_blockout_is_not_found() {
        let f = fixture();
        let err = f
            .desk
            .update_blockout(
                Uuid::new_v4(),
                BlockoutDraft {
                    staff_id: f.staff,
                    start: at(12, 0),
                    end: at(13, 0),
                    reason: BlockoutReason::Lunch,
                    notes: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, DeskError::NotFound { kind: "blockout", .. }));
    }
}
