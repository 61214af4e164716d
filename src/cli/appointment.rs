//! Appointment commands: book, status, confirm, reschedule, cancel.

use crate::desk::{FrontDesk, Reschedule};
use crate::model::AppointmentDraft;
use crate::storage::{Storage, Table};

use super::format::format_instant;
use super::{parse_at, resolve, short};

pub(super) fn cmd_book(
    desk: &FrontDesk<Storage>,
    staff: &str,
    client: &str,
    service: &str,
    at: &str,
    notes: Option<String>,
) -> Result<(), String> {
    let draft = AppointmentDraft {
        staff_id: resolve(desk, Table::Staff, staff)?,
        client_id: resolve(desk, Table::Clients, client)?,
        service_id: resolve(desk, Table::Services, service)?,
        start: parse_at(desk, at)?,
        notes,
    };

    let appointment = desk
        .book_appointment(draft)
        .map_err(|e| format!("failed to book: {e}"))?;

    println!("{}", appointment.id);
    Ok(())
}

pub(super) fn cmd_status(
    desk: &FrontDesk<Storage>,
    appointment: &str,
    status: &str,
) -> Result<(), String> {
    let id = resolve(desk, Table::Appointments, appointment)?;
    let updated = desk
        .change_status(id, status)
        .map_err(|e| format!("failed to change status: {e}"))?;

    eprintln!("Appointment {} is {}", short(id), updated.status);
    Ok(())
}

pub(super) fn cmd_confirm(desk: &FrontDesk<Storage>, appointment: &str) -> Result<(), String> {
    let id = resolve(desk, Table::Appointments, appointment)?;
    let confirmation = desk
        .toggle_confirmation(id)
        .map_err(|e| format!("failed to toggle confirmation: {e}"))?;

    eprintln!("Reminder for {} marked {confirmation}", short(id));
    Ok(())
}

pub(super) fn cmd_reschedule(
    desk: &FrontDesk<Storage>,
    appointment: &str,
    at: Option<&str>,
    staff: Option<&str>,
    service: Option<&str>,
) -> Result<(), String> {
    let id = resolve(desk, Table::Appointments, appointment)?;
    let current = desk
        .store()
        .load_appointment(id)
        .map_err(|e| format!("failed to load appointment: {e}"))?
        .ok_or_else(|| format!("appointment not found: {id}"))?;

    let start = match at {
        Some(raw) => parse_at(desk, raw)?,
        None => current.start,
    };
    let staff_id = match staff {
        Some(reference) => resolve(desk, Table::Staff, reference)?,
        None => current
            .staff_id
            .ok_or("appointment has no staff member; pass --staff")?,
    };
    let service_id = match service {
        Some(reference) => resolve(desk, Table::Services, reference)?,
        None => current
            .service_id
            .ok_or("appointment has no service; pass --service")?,
    };

    let moved = desk
        .reschedule(
            id,
            Reschedule {
                start,
                staff_id,
                service_id,
            },
        )
        .map_err(|e| format!("failed to reschedule: {e}"))?;

    eprintln!(
        "Appointment {} moved to {}",
        short(id),
        format_instant(desk.time_zone(), moved.start)
    );
    Ok(())
}

pub(super) fn cmd_cancel(desk: &FrontDesk<Storage>, appointment: &str) -> Result<(), String> {
    let id = resolve(desk, Table::Appointments, appointment)?;
    desk.delete_appointment(id)
        .map_err(|e| format!("failed to cancel: {e}"))?;

    eprintln!("Appointment {} deleted", short(id));
    Ok(())
}
