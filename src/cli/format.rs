//! Output formatting for CLI display.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::model::Catalog;
use crate::timeline::{Occupant, TimelineEntry};

/// Format an instant as wall-clock time in `tz`, e.g. `2026-10-16 09:30`.
pub(super) fn format_instant(tz: &TimeZone, at: Timestamp) -> String {
    tz.to_datetime(at).strftime("%Y-%m-%d %H:%M").to_string()
}

/// Format minor currency units, e.g. `3500` → `35.00`.
pub(super) fn format_price(minor: u64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}

/// One line of a day listing:
///
/// ```text
/// 09:00-09:30  [1/2 !]  Sam · Cut  scheduled, unsent   5d1c0a2e
/// 12:00-13:00  [1/1]    lunch                          9a0b11f3
/// ```
pub(super) fn format_entry(tz: &TimeZone, catalog: &Catalog, entry: &TimelineEntry) -> String {
    let start = tz.to_datetime(entry.start).strftime("%H:%M").to_string();
    let end = tz.to_datetime(entry.end).strftime("%H:%M").to_string();
    let lane = format!(
        "[{}/{}{}]",
        entry.lane_index + 1,
        entry.lane_count,
        if entry.has_collision { " !" } else { "" }
    );

    let what = match &entry.occupant {
        Occupant::Appointment(a) => {
            let client = a
                .client_id
                .and_then(|id| catalog.client(id))
                .map_or("?", |c| c.name.as_str());
            let service = a
                .service_id
                .and_then(|id| catalog.service(id))
                .map_or("?", |s| s.name.as_str());
            format!("{client} · {service}  {}, {}", a.status, a.confirmation)
        }
        Occupant::Blockout(b) => match &b.notes {
            Some(notes) => format!("{} ({notes})", b.reason),
            None => b.reason.to_string(),
        },
    };

    let short_id = &entry.id().to_string()[..8];
    format!("{start}-{end}  {lane:<7}  {what:<40}  {short_id}")
}
