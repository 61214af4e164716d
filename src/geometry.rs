//! Grid geometry for rendering a day column.
//!
//! Turns a [`TimelineEntry`] into percentage offsets inside a column that
//! spans the salon's opening hours. Entries are clipped to those hours.

use jiff::civil::{DateTime, Time};
use jiff::tz::TimeZone;
use serde::Serialize;

use crate::timeline::TimelineEntry;

const SECONDS_PER_DAY: i32 = 24 * 60 * 60;

/// The visible span of one day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayGrid {
    pub opens: Time,
    pub closes: Time,
}

/// Where an entry sits inside its day column, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

impl Default for DayGrid {
    fn default() -> Self {
        Self {
            opens: Time::constant(9, 0, 0, 0),
            closes: Time::constant(18, 0, 0, 0),
        }
    }
}

impl DayGrid {
    /// Places `entry` in its day column. Returns `None` when the entry lies
    /// entirely outside opening hours or the grid itself is empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn place(&self, entry: &TimelineEntry, time_zone: &TimeZone) -> Option<Placement> {
        let open = second_of_day(self.opens);
        let close = second_of_day(self.closes);
        if close <= open || entry.lane_count == 0 {
            return None;
        }

        let start = clock_on(entry.day, time_zone.to_datetime(entry.start));
        let end = clock_on(entry.day, time_zone.to_datetime(entry.end));
        let top = start.max(open);
        let bottom = end.min(close);
        if bottom <= top {
            return None;
        }

        let span = f64::from(close - open);
        let width = 100.0 / entry.lane_count as f64;
        Some(Placement {
            top: f64::from(top - open) / span * 100.0,
            height: f64::from(bottom - top) / span * 100.0,
            left: width * entry.lane_index as f64,
            width,
        })
    }
}

fn second_of_day(time: Time) -> i32 {
    i32::from(time.hour()) * 3600 + i32::from(time.minute()) * 60 + i32::from(time.second())
}

/// Seconds since midnight of `day`, pinned to the day's edges when `at`
/// falls on another date.
fn clock_on(day: jiff::civil::Date, at: DateTime) -> i32 {
    match at.date().cmp(&day) {
        std::cmp::Ordering::Less => 0,
        std::cmp::Ordering::Equal => second_of_day(at.time()),
        std::cmp::Ordering::Greater => SECONDS_PER_DAY,
    }
}
