//! Calendar views: one day or one week for a staff member.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::desk::FrontDesk;
use crate::geometry::{DayGrid, Placement};
use crate::model::Catalog;
use crate::storage::{Storage, Table};
use crate::timeline::{Timeline, TimelineRange};

use super::format::format_entry;
use super::{resolve, today};

/// JSON shape: the timeline plus where each entry sits in its day column,
/// keyed by day and then by record id.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Rendered<'a> {
    #[serde(flatten)]
    timeline: &'a Timeline,
    placements: BTreeMap<Date, BTreeMap<Uuid, Placement>>,
}

pub(super) fn cmd_day(
    config: &Config,
    desk: &FrontDesk<Storage>,
    staff: &str,
    date: Option<Date>,
    json: bool,
) -> Result<(), String> {
    let date = date.unwrap_or_else(|| today(desk));
    show(config, desk, staff, TimelineRange::Day(date), json)
}

pub(super) fn cmd_week(
    config: &Config,
    desk: &FrontDesk<Storage>,
    staff: &str,
    from: Option<Date>,
    json: bool,
) -> Result<(), String> {
    let week_start = config.week_start().map_err(|e| e.to_string())?;
    let range = TimelineRange::week_containing(from.unwrap_or_else(|| today(desk)), week_start)
        .map_err(|e| format!("invalid week: {e}"))?;
    show(config, desk, staff, range, json)
}

fn show(
    config: &Config,
    desk: &FrontDesk<Storage>,
    staff: &str,
    range: TimelineRange,
    json: bool,
) -> Result<(), String> {
    let staff_id = resolve(desk, Table::Staff, staff)?;
    let grid = config.grid().map_err(|e| e.to_string())?;
    let timeline = desk
        .timeline(staff_id, range)
        .map_err(|e| format!("failed to build timeline: {e}"))?;

    if json {
        return print_json(desk, &grid, &timeline);
    }

    let catalog = desk
        .store()
        .load_catalog()
        .map_err(|e| format!("failed to load catalog: {e}"))?;
    print_text(desk, &catalog, &timeline);
    Ok(())
}

fn print_json(desk: &FrontDesk<Storage>, grid: &DayGrid, timeline: &Timeline) -> Result<(), String> {
    let mut placements: BTreeMap<Date, BTreeMap<Uuid, Placement>> = BTreeMap::new();
    for entry in &timeline.entries {
        if let Some(placement) = grid.place(entry, desk.time_zone()) {
            placements
                .entry(entry.day)
                .or_default()
                .insert(entry.id(), placement);
        }
    }
    let rendered = Rendered {
        timeline,
        placements,
    };
    let json = serde_json::to_string_pretty(&rendered)
        .map_err(|e| format!("failed to serialize timeline: {e}"))?;
    println!("{json}");
    Ok(())
}

fn print_text(desk: &FrontDesk<Storage>, catalog: &Catalog, timeline: &Timeline) {
    let name = catalog
        .staff(timeline.staff_id)
        .map_or("unknown staff member", |s| s.name.as_str());
    println!("{name}");

    for &day in &timeline.days {
        println!();
        println!("{}", day.strftime("%a %Y-%m-%d"));
        let mut any = false;
        for entry in timeline.on(day) {
            any = true;
            println!("  {}", format_entry(desk.time_zone(), catalog, entry));
        }
        if !any {
            println!("  (free)");
        }
    }

    if timeline.skipped > 0 {
        eprintln!("{} malformed record(s) skipped", timeline.skipped);
    }
}
