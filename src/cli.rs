//! CLI interface for the salon front desk.
//!
//! Every subcommand is non-interactive: arguments in, plain text (or JSON
//! with `--json`) out. Commands fall into three groups:
//!
//! - `salon staff|service|client`: seed the reference catalog.
//! - `salon book|status|confirm|reschedule|cancel|blockout`: changes,
//!   all routed through the front desk.
//! - `salon day|week`: print a staff member's laid-out timeline.
//!
//! Any id argument takes a full UUID or an unambiguous prefix.

mod appointment;
mod blockout;
mod catalog;
mod format;
mod timeline;

use clap::{Parser, Subcommand};
use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use uuid::Uuid;

use crate::config::Config;
use crate::desk::FrontDesk;
use crate::model::BlockoutReason;
use crate::storage::{Storage, Table};

/// Salon: appointment book and calendar layout.
#[derive(Debug, Parser)]
#[command(name = "salon", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow: a day at the desk
  1. salon staff add Robin            → prints a staff id (e.g. 3f2a91c0)
  2. salon service add Cut --minutes 30 --price 3500
  3. salon client add Sam --phone 555-0100
  4. salon book --staff 3f2 --client 8c1 --service a07 --at '2026-10-16 09:00'
  5. salon day --staff 3f2 --date 2026-10-16

Changes:
  salon status 5d1 arrived
  salon confirm 5d1
  salon reschedule 5d1 --at '2026-10-16 11:00'
  salon blockout add --staff 3f2 --from '2026-10-16 12:00' --until '2026-10-16 13:00' --reason lunch";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage staff members.
    Staff {
        #[command(subcommand)]
        command: StaffCommand,
    },

    /// Manage bookable services.
    Service {
        #[command(subcommand)]
        command: ServiceCommand,
    },

    /// Manage clients.
    Client {
        #[command(subcommand)]
        command: ClientCommand,
    },

    /// Book an appointment. Prints the appointment id.
    ///
    /// New bookings start as `scheduled` with the reminder unsent.
    Book {
        #[arg(long)]
        staff: String,

        #[arg(long)]
        client: String,

        #[arg(long)]
        service: String,

        /// Start time in the salon's zone, e.g. `2026-10-16 09:30`.
        #[arg(long)]
        at: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Set an appointment's status: scheduled, arrived, completed, no-show.
    Status { appointment: String, status: String },

    /// Toggle whether the reminder for an appointment has been sent.
    Confirm { appointment: String },

    /// Move an appointment. Unspecified fields keep their current value.
    Reschedule {
        appointment: String,

        /// New start time in the salon's zone.
        #[arg(long)]
        at: Option<String>,

        #[arg(long)]
        staff: Option<String>,

        #[arg(long)]
        service: Option<String>,
    },

    /// Delete an appointment. This cannot be undone.
    Cancel { appointment: String },

    /// Manage blockouts: time a staff member is unavailable.
    Blockout {
        #[command(subcommand)]
        command: BlockoutCommand,
    },

    /// Show one day of a staff member's calendar.
    Day {
        #[arg(long)]
        staff: String,

        /// Defaults to today.
        #[arg(long)]
        date: Option<Date>,

        /// Print the timeline as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the week containing a date.
    Week {
        #[arg(long)]
        staff: String,

        /// Any day in the week. Defaults to today.
        #[arg(long)]
        from: Option<Date>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// Add a staff member. Prints the id.
    Add {
        name: String,

        /// Record the staff member as inactive.
        #[arg(long)]
        inactive: bool,
    },

    List,
}

#[derive(Debug, Subcommand)]
pub enum ServiceCommand {
    /// Add a service. Prints the id.
    Add {
        name: String,

        #[arg(long)]
        minutes: u32,

        /// Price in minor currency units.
        #[arg(long, default_value_t = 0)]
        price: u64,
    },

    List,
}

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Add a client. Prints the id.
    Add {
        name: String,

        #[arg(long)]
        phone: Option<String>,
    },

    List,
}

#[derive(Debug, Subcommand)]
pub enum BlockoutCommand {
    /// Block out a staff member's time. Prints the id.
    Add {
        #[arg(long)]
        staff: String,

        #[arg(long)]
        from: String,

        #[arg(long)]
        until: String,

        /// leave, lunch, meeting, training, or other.
        #[arg(long, default_value = "other")]
        reason: BlockoutReason,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Change a blockout. Unspecified fields keep their current value.
    Edit {
        blockout: String,

        #[arg(long)]
        staff: Option<String>,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        until: Option<String>,

        #[arg(long)]
        reason: Option<BlockoutReason>,

        #[arg(long)]
        notes: Option<String>,
    },

    Remove { blockout: String },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, desk: &FrontDesk<Storage>) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Staff { command } => match command {
            StaffCommand::Add { name, inactive } => catalog::cmd_staff_add(desk, &name, !inactive),
            StaffCommand::List => catalog::cmd_staff_list(desk),
        },
        Command::Service { command } => match command {
            ServiceCommand::Add {
                name,
                minutes,
                price,
            } => catalog::cmd_service_add(desk, &name, minutes, price),
            ServiceCommand::List => catalog::cmd_service_list(desk),
        },
        Command::Client { command } => match command {
            ClientCommand::Add { name, phone } => catalog::cmd_client_add(desk, &name, phone),
            ClientCommand::List => catalog::cmd_client_list(desk),
        },
        Command::Book {
            staff,
            client,
            service,
            at,
            notes,
        } => appointment::cmd_book(desk, &staff, &client, &service, &at, notes),
        Command::Status {
            appointment,
            status,
        } => appointment::cmd_status(desk, &appointment, &status),
        Command::Confirm { appointment } => appointment::cmd_confirm(desk, &appointment),
        Command::Reschedule {
            appointment,
            at,
            staff,
            service,
        } => appointment::cmd_reschedule(
            desk,
            &appointment,
            at.as_deref(),
            staff.as_deref(),
            service.as_deref(),
        ),
        Command::Cancel { appointment } => appointment::cmd_cancel(desk, &appointment),
        Command::Blockout { command } => match command {
            BlockoutCommand::Add {
                staff,
                from,
                until,
                reason,
                notes,
            } => blockout::cmd_add(desk, &staff, &from, &until, reason, notes),
            BlockoutCommand::Edit {
                blockout,
                staff,
                from,
                until,
                reason,
                notes,
            } => blockout::cmd_edit(
                desk,
                &blockout,
                blockout::Changes {
                    staff: staff.as_deref(),
                    from: from.as_deref(),
                    until: until.as_deref(),
                    reason,
                    notes,
                },
            ),
            BlockoutCommand::Remove { blockout } => blockout::cmd_remove(desk, &blockout),
        },
        Command::Day { staff, date, json } => timeline::cmd_day(config, desk, &staff, date, json),
        Command::Week { staff, from, json } => timeline::cmd_week(config, desk, &staff, from, json),
    }
}

/// Resolve an id reference (full UUID or unambiguous prefix) in `table`.
fn resolve(desk: &FrontDesk<Storage>, table: Table, reference: &str) -> Result<Uuid, String> {
    desk.store()
        .resolve_id(table, reference)
        .map_err(|e| e.to_string())
}

/// Parse a wall-clock time such as `2026-10-16 09:30` in the desk's zone.
fn parse_at(desk: &FrontDesk<Storage>, raw: &str) -> Result<Timestamp, String> {
    let civil: DateTime = raw
        .parse()
        .map_err(|e| format!("invalid time '{raw}': {e}"))?;
    civil
        .to_zoned(desk.time_zone().clone())
        .map(|z| z.timestamp())
        .map_err(|e| format!("invalid time '{raw}': {e}"))
}

/// Today's date in the desk's zone.
fn today(desk: &FrontDesk<Storage>) -> Date {
    desk.time_zone().to_datetime(Timestamp::now()).date()
}

fn short(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}
