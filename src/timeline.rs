//! Unified timeline: appointments and blockouts for one staff member,
//! laid out per calendar day.
//!
//! Building is a pure function of the records, the catalog, and the request.
//! It never mutates anything and never fetches, so a superseded build can be
//! thrown away without consequence. Records that cannot be placed are logged
//! and skipped; they never fail the build.

use std::collections::{BTreeMap, HashSet};

use jiff::civil::{Date, Time, Weekday};
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interval::{Interval, IntervalKind};
use crate::layout;
use crate::model::{Appointment, Blockout, Catalog};

/// The days a timeline covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineRange {
    /// A single calendar day.
    Day(Date),

    /// Seven consecutive daily buckets starting on the given date.
    Week(Date),
}

impl TimelineRange {
    /// The week containing `date`, starting on `week_start`.
    pub fn week_containing(date: Date, week_start: Weekday) -> Result<Self, jiff::Error> {
        let back = date.weekday().since(week_start);
        Ok(Self::Week(date.checked_sub(i64::from(back).days())?))
    }

    pub fn first_day(&self) -> Date {
        match *self {
            Self::Day(d) | Self::Week(d) => d,
        }
    }

    pub fn days(&self) -> Vec<Date> {
        let len = match self {
            Self::Day(_) => 1,
            Self::Week(_) => 7,
        };
        self.first_day().series(1.day()).take(len).collect()
    }
}

/// What to build: whose calendar, which days, in which time zone.
#[derive(Debug, Clone)]
pub struct TimelineRequest {
    pub staff_id: Uuid,
    pub range: TimelineRange,

    /// Zone the salon's calendar days are drawn in.
    pub time_zone: TimeZone,
}

/// The record behind a timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "camelCase")]
pub enum Occupant {
    Appointment(Appointment),
    Blockout(Blockout),
}

impl Occupant {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Appointment(a) => a.id,
            Self::Blockout(b) => b.id,
        }
    }
}

/// One positioned item on the grid. Derived; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Calendar day this entry is drawn on. A record crossing midnight has
    /// one entry for every day it touches.
    pub day: Date,
    pub start: Timestamp,
    pub end: Timestamp,
    pub kind: IntervalKind,
    pub lane_index: usize,
    pub lane_count: usize,
    pub has_collision: bool,
    pub occupant: Occupant,
}

impl TimelineEntry {
    pub fn id(&self) -> Uuid {
        self.occupant.id()
    }
}

/// A built timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub staff_id: Uuid,
    pub days: Vec<Date>,

    /// Ordered by day, then start, then record id.
    pub entries: Vec<TimelineEntry>,

    /// Records for this staff member starting on a requested day that were
    /// dropped as malformed.
    pub skipped: usize,
}

impl Timeline {
    /// Entries that fall on `day`, in start order.
    pub fn on(&self, day: Date) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter().filter(move |e| e.day == day)
    }

    /// The first entry for `id`. Records spanning several days have one
    /// entry per day.
    pub fn entry(&self, id: Uuid) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }
}

/// The first and last calendar day `[start, end)` occupies in `time_zone`.
///
/// An end exactly at midnight does not reach into that day.
pub fn day_span(start: Timestamp, end: Timestamp, time_zone: &TimeZone) -> (Date, Date) {
    let first = time_zone.to_datetime(start).date();
    let end = time_zone.to_datetime(end);
    let last = if end.time() == Time::midnight() && end.date() > first {
        end.date().yesterday().unwrap_or(first)
    } else {
        end.date()
    };
    (first, last.max(first))
}

/// Builds the timeline for `request` from whatever records were fetched.
///
/// Records for other staff members and outside the requested days are
/// ignored. A record running across midnight gets an entry on every
/// requested day it touches, laid out against that day's records. Input
/// order has no effect on the result.
pub fn build(
    request: &TimelineRequest,
    appointments: &[Appointment],
    blockouts: &[Blockout],
    catalog: &Catalog,
) -> Timeline {
    let days = request.range.days();
    let tz = &request.time_zone;
    let requested = |at: Timestamp| days.contains(&tz.to_datetime(at).date());

    let mut skipped = 0;
    let mut placed: Vec<(Interval, Occupant)> = Vec::new();

    for appointment in appointments {
        if appointment
            .staff_id
            .is_some_and(|staff| staff != request.staff_id)
        {
            continue;
        }
        match Interval::from_appointment(appointment, catalog) {
            Ok(interval) => placed.push((interval, Occupant::Appointment(appointment.clone()))),
            Err(e) if requested(appointment.start) => {
                tracing::warn!(appointment = %appointment.id, error = %e, "skipping appointment");
                skipped += 1;
            }
            Err(_) => {}
        }
    }

    for blockout in blockouts {
        if blockout.staff_id != request.staff_id {
            continue;
        }
        match Interval::from_blockout(blockout) {
            Ok(interval) => placed.push((interval, Occupant::Blockout(blockout.clone()))),
            Err(e) if requested(blockout.start) => {
                tracing::warn!(blockout = %blockout.id, error = %e, "skipping blockout");
                skipped += 1;
            }
            Err(_) => {}
        }
    }

    // A record fetched twice is laid out once: the first in layout order wins.
    placed.sort_by(|(a, _), (b, _)| a.layout_order(b));
    let mut seen = HashSet::new();
    placed.retain(|(interval, _)| seen.insert(interval.id));

    let mut by_day: BTreeMap<Date, Vec<Interval>> = BTreeMap::new();
    let mut occupants: BTreeMap<Uuid, Occupant> = BTreeMap::new();
    for (interval, occupant) in placed {
        let (first, last) = day_span(interval.start, interval.end, tz);
        let mut touched = false;
        for day in days.iter().filter(|d| first <= **d && **d <= last) {
            by_day.entry(*day).or_default().push(interval);
            touched = true;
        }
        if touched {
            occupants.insert(interval.id, occupant);
        }
    }

    let mut entries = Vec::new();
    for (day, intervals) in &by_day {
        let mut laid_out = layout::layout(intervals);
        laid_out.sort_by(|(a, _), (b, _)| a.layout_order(b));

        for (interval, lane) in laid_out {
            let Some(occupant) = occupants.get(&interval.id) else {
                continue;
            };
            entries.push(TimelineEntry {
                day: *day,
                start: interval.start,
                end: interval.end,
                kind: interval.kind,
                lane_index: lane.lane_index,
                lane_count: lane.lane_count,
                has_collision: lane.has_collision,
                occupant: occupant.clone(),
            });
        }
    }

    tracing::debug!(
        staff = %request.staff_id,
        from = %request.range.first_day(),
        entries = entries.len(),
        skipped,
        "built timeline"
    );

    Timeline {
        staff_id: request.staff_id,
        days,
        entries,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::{
        AppointmentStatus, BlockoutReason, Client, Confirmation, ServiceDefinition, StaffMember,
    };

    const STAFF: u128 = 100;
    const OTHER_STAFF: u128 = 101;
    const HALF_HOUR: u128 = 200;
    const HOUR: u128 = 201;
    const CLIENT: u128 = 300;

    fn day() -> Date {
        date(2026, 10, 16)
    }

    fn at(hour: i8, minute: i8) -> Timestamp {
        day()
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp()
    }

    fn catalog() -> Catalog {
        Catalog::new(
            [STAFF, OTHER_STAFF].map(|id| StaffMember {
                id: Uuid::from_u128(id),
                name: format!("staff {id}"),
                active: true,
            }),
            [(HALF_HOUR, 30), (HOUR, 60)].map(|(id, minutes)| ServiceDefinition {
                id: Uuid::from_u128(id),
                name: format!("{minutes} min"),
                duration_minutes: minutes,
                price: 2_500,
            }),
            [Client {
                id: Uuid::from_u128(CLIENT),
                name: "Alex".into(),
                phone: None,
            }],
        )
    }

    fn appointment(id: u128, start: Timestamp, service: u128) -> Appointment {
        Appointment {
            id: Uuid::from_u128(id),
            client_id: Some(Uuid::from_u128(CLIENT)),
            service_id: Some(Uuid::from_u128(service)),
            staff_id: Some(Uuid::from_u128(STAFF)),
            start,
            notes: None,
            status: AppointmentStatus::Scheduled,
            confirmation: Confirmation::Unsent,
        }
    }

    fn blockout(id: u128, start: Timestamp, end: Timestamp) -> Blockout {
        Blockout {
            id: Uuid::from_u128(id),
            staff_id: Uuid::from_u128(STAFF),
            start,
            end,
            reason: BlockoutReason::Lunch,
            notes: None,
        }
    }

    fn request(range: TimelineRange) -> TimelineRequest {
        TimelineRequest {
            staff_id: Uuid::from_u128(STAFF),
            range,
            time_zone: TimeZone::UTC,
        }
    }

    fn lanes(timeline: &Timeline) -> Vec<(u128, usize, usize)> {
        timeline
            .entries
            .iter()
            .map(|e| (e.id().as_u128(), e.lane_index, e.lane_count))
            .collect()
    }

    #[test]
    fn overlapping_pair_splits_into_two_lanes() {
        let x = appointment(1, at(9, 0), HALF_HOUR);
        let y = appointment(2, at(9, 15), HALF_HOUR);

        let timeline = build(&request(TimelineRange::Day(day())), &[y, x], &[], &catalog());

        assert_eq!(lanes(&timeline), vec![(1, 0, 2), (2, 1, 2)]);
        assert!(timeline.entries.iter().all(|e| e.has_collision));
    }

    #[test]
    fn lone_lunch_blockout_is_full_width() {
        let lunch = blockout(9, at(12, 0), at(13, 0));

        let timeline = build(&request(TimelineRange::Day(day())), &[], &[lunch], &catalog());

        assert_eq!(timeline.entries.len(), 1);
        let entry = &timeline.entries[0];
        assert_eq!(entry.kind, IntervalKind::Blockout);
        assert_eq!(entry.lane_count, 1);
        assert!(!entry.has_collision);
        assert!(matches!(entry.occupant, Occupant::Blockout(_)));
    }

    #[test]
    fn removed_appointment_frees_its_partner() {
        let z = appointment(1, at(14, 0), HALF_HOUR);
        let w = appointment(2, at(14, 15), HALF_HOUR);
        let req = request(TimelineRange::Day(day()));

        let before = build(&req, &[z, w.clone()], &[], &catalog());
        assert_eq!(before.entry(w.id).unwrap().lane_count, 2);

        let after = build(&req, &[w.clone()], &[], &catalog());
        assert!(after.entry(Uuid::from_u128(1)).is_none());
        assert_eq!(after.entry(w.id).unwrap().lane_count, 1);
        assert!(!after.entry(w.id).unwrap().has_collision);
    }

    #[test]
    fn four_at_once_caps_at_three_lanes() {
        let appts: Vec<_> = (1..=4)
            .map(|id| appointment(id, at(10, 0), HALF_HOUR))
            .collect();

        let timeline = build(&request(TimelineRange::Day(day())), &appts, &[], &catalog());

        assert_eq!(timeline.entries.len(), 4);
        for entry in &timeline.entries {
            assert_eq!(entry.lane_count, 3);
            assert!(entry.lane_index <= 2);
            assert!(entry.has_collision);
        }
    }

    #[test]
    fn blockout_and_appointment_share_a_cluster() {
        let appt = appointment(1, at(12, 30), HOUR);
        let lunch = blockout(2, at(12, 0), at(13, 0));

        let timeline = build(&request(TimelineRange::Day(day())), &[appt], &[lunch], &catalog());

        assert_eq!(lanes(&timeline), vec![(2, 0, 2), (1, 1, 2)]);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let mut orphan = appointment(1, at(9, 0), HALF_HOUR);
        orphan.client_id = None;
        let mut unknown_service = appointment(2, at(10, 0), HALF_HOUR);
        unknown_service.service_id = Some(Uuid::from_u128(999));
        let backwards = blockout(3, at(13, 0), at(12, 0));
        let fine = appointment(4, at(11, 0), HALF_HOUR);

        let timeline = build(
            &request(TimelineRange::Day(day())),
            &[orphan, unknown_service, fine],
            &[backwards],
            &catalog(),
        );

        assert_eq!(timeline.skipped, 3);
        assert_eq!(lanes(&timeline), vec![(4, 0, 1)]);
    }

    #[test]
    fn other_staff_and_other_days_are_ignored() {
        let mut theirs = appointment(1, at(9, 0), HALF_HOUR);
        theirs.staff_id = Some(Uuid::from_u128(OTHER_STAFF));
        let tomorrow = appointment(
            2,
            at(9, 0).checked_add(jiff::SignedDuration::from_hours(24)).unwrap(),
            HALF_HOUR,
        );
        let mine = appointment(3, at(9, 0), HALF_HOUR);

        let timeline = build(
            &request(TimelineRange::Day(day())),
            &[theirs, tomorrow, mine],
            &[],
            &catalog(),
        );

        assert_eq!(lanes(&timeline), vec![(3, 0, 1)]);
        assert_eq!(timeline.skipped, 0);
    }

    #[test]
    fn week_buckets_by_day() {
        let monday = date(2026, 10, 12);
        let on = |d: Date, h| d.at(h, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();
        let a = appointment(1, on(monday, 9), HOUR);
        let b = appointment(2, on(date(2026, 10, 14), 9), HOUR);
        let c = appointment(3, on(date(2026, 10, 14), 9), HALF_HOUR);
        let next_week = appointment(4, on(date(2026, 10, 19), 9), HOUR);

        let range = TimelineRange::week_containing(date(2026, 10, 16), Weekday::Monday).unwrap();
        assert_eq!(range, TimelineRange::Week(monday));

        let timeline = build(&request(range), &[next_week, c, b, a], &[], &catalog());

        assert_eq!(timeline.days.len(), 7);
        assert_eq!(lanes(&timeline), vec![(1, 0, 1), (2, 0, 2), (3, 1, 2)]);
        assert_eq!(timeline.on(date(2026, 10, 14)).count(), 2);
        assert_eq!(timeline.on(date(2026, 10, 13)).count(), 0);
    }

    #[test]
    fn day_bucket_follows_time_zone() {
        // 23:30 UTC on the 16th is already the 17th at UTC+13.
        let late = appointment(1, at(23, 30), HALF_HOUR);
        let tz = TimeZone::fixed(jiff::tz::offset(13));

        let mut req = request(TimelineRange::Day(date(2026, 10, 17)));
        req.time_zone = tz;

        let timeline = build(&req, &[late], &[], &catalog());
        assert_eq!(timeline.entries.len(), 1);
        assert_eq!(timeline.entries[0].day, date(2026, 10, 17));
    }

    #[test]
    fn leave_shows_on_every_day_it_covers() {
        let on = |d: Date, h| d.at(h, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();
        let leave = Blockout {
            reason: BlockoutReason::Leave,
            ..blockout(9, on(date(2026, 10, 15), 9), on(date(2026, 10, 17), 18))
        };
        let appt = appointment(1, at(10, 0), HALF_HOUR);

        let day_view = build(
            &request(TimelineRange::Day(day())),
            std::slice::from_ref(&appt),
            std::slice::from_ref(&leave),
            &catalog(),
        );
        assert_eq!(lanes(&day_view), vec![(9, 0, 2), (1, 1, 2)]);
        assert!(day_view.entries.iter().all(|e| e.day == day()));

        let week = TimelineRange::week_containing(day(), Weekday::Monday).unwrap();
        let week_view = build(&request(week), &[appt], &[leave], &catalog());
        let leave_days: Vec<Date> = week_view
            .entries
            .iter()
            .filter(|e| e.id() == Uuid::from_u128(9))
            .map(|e| e.day)
            .collect();
        assert_eq!(
            leave_days,
            vec![date(2026, 10, 15), date(2026, 10, 16), date(2026, 10, 17)]
        );
        assert_eq!(week_view.on(date(2026, 10, 15)).count(), 1);
        assert_eq!(week_view.on(date(2026, 10, 16)).count(), 2);
        assert_eq!(week_view.on(date(2026, 10, 18)).count(), 0);
    }

    #[test]
    fn blockout_ending_at_midnight_stays_on_its_day() {
        let midnight = date(2026, 10, 17)
            .at(0, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .timestamp();
        let evening = blockout(1, at(20, 0), midnight);
        let overnight = blockout(2, at(23, 0), at(23, 0) + jiff::SignedDuration::from_hours(2));

        assert_eq!(day_span(at(20, 0), midnight, &TimeZone::UTC), (day(), day()));

        let next = build(
            &request(TimelineRange::Day(date(2026, 10, 17))),
            &[],
            &[evening, overnight],
            &catalog(),
        );
        assert_eq!(lanes(&next), vec![(2, 0, 1)]);
    }

    #[test]
    fn malformed_records_on_other_days_are_not_counted() {
        let mut elsewhere = appointment(1, at(9, 0) + jiff::SignedDuration::from_hours(48), HALF_HOUR);
        elsewhere.client_id = None;
        let two_days_back = at(9, 0) - jiff::SignedDuration::from_hours(48);
        let backwards = blockout(2, two_days_back + jiff::SignedDuration::from_hours(1), two_days_back);
        let mut today = appointment(3, at(9, 0), HALF_HOUR);
        today.client_id = None;

        let timeline = build(
            &request(TimelineRange::Day(day())),
            &[elsewhere, today],
            &[backwards],
            &catalog(),
        );

        assert_eq!(timeline.skipped, 1);
        assert!(timeline.entries.is_empty());
    }

    #[test]
    fn duplicate_records_are_laid_out_once() {
        let a = appointment(1, at(9, 0), HALF_HOUR);

        let timeline = build(
            &request(TimelineRange::Day(day())),
            &[a.clone(), a],
            &[],
            &catalog(),
        );

        assert_eq!(lanes(&timeline), vec![(1, 0, 1)]);
    }

    #[test]
    fn completed_and_no_show_still_occupy_the_grid() {
        let mut done = appointment(1, at(9, 0), HALF_HOUR);
        done.status = AppointmentStatus::Completed;
        let mut missing = appointment(2, at(9, 10), HALF_HOUR);
        missing.status = AppointmentStatus::NoShow;

        let timeline = build(
            &request(TimelineRange::Day(day())),
            &[done, missing],
            &[],
            &catalog(),
        );

        assert_eq!(lanes(&timeline), vec![(1, 0, 2), (2, 1, 2)]);
    }

    #[test]
    fn timeline_serializes_lane_fields_in_camel_case() {
        let timeline = build(
            &request(TimelineRange::Day(day())),
            &[appointment(1, at(9, 0), HALF_HOUR)],
            &[],
            &catalog(),
        );
        let json = serde_json::to_value(&timeline).unwrap();
        let entry = &json["entries"][0];
        assert_eq!(entry["laneIndex"], 0);
        assert_eq!(entry["laneCount"], 1);
        assert_eq!(entry["kind"], "appointment");
        assert_eq!(entry["occupant"]["kind"], "appointment");
    }
}
