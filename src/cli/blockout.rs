//! Blockout commands: add, edit, remove.

use crate::desk::FrontDesk;
use crate::model::{BlockoutDraft, BlockoutReason};
use crate::storage::{Storage, Table};

use super::{parse_at, resolve, short};

/// Optional overrides for `blockout edit`.
pub(super) struct Changes<'a> {
    pub staff: Option<&'a str>,
    pub from: Option<&'a str>,
    pub until: Option<&'a str>,
    pub reason: Option<BlockoutReason>,
    pub notes: Option<String>,
}

pub(super) fn cmd_add(
    desk: &FrontDesk<Storage>,
    staff: &str,
    from: &str,
    until: &str,
    reason: BlockoutReason,
    notes: Option<String>,
) -> Result<(), String> {
    let draft = BlockoutDraft {
        staff_id: resolve(desk, Table::Staff, staff)?,
        start: parse_at(desk, from)?,
        end: parse_at(desk, until)?,
        reason,
        notes,
    };

    let blockout = desk
        .create_blockout(draft)
        .map_err(|e| format!("failed to add blockout: {e}"))?;

    println!("{}", blockout.id);
    Ok(())
}

pub(super) fn cmd_edit(
    desk: &FrontDesk<Storage>,
    blockout: &str,
    changes: Changes<'_>,
) -> Result<(), String> {
    let id = resolve(desk, Table::Blockouts, blockout)?;
    let current = desk
        .store()
        .load_blockout(id)
        .map_err(|e| format!("failed to load blockout: {e}"))?
        .ok_or_else(|| format!("blockout not found: {id}"))?;

    let draft = BlockoutDraft {
        staff_id: match changes.staff {
            Some(reference) => resolve(desk, Table::Staff, reference)?,
            None => current.staff_id,
        },
        start: match changes.from {
            Some(raw) => parse_at(desk, raw)?,
            None => current.start,
        },
        end: match changes.until {
            Some(raw) => parse_at(desk, raw)?,
            None => current.end,
        },
        reason: changes.reason.unwrap_or(current.reason),
        notes: changes.notes.or(current.notes),
    };

    desk.update_blockout(id, draft)
        .map_err(|e| format!("failed to edit blockout: {e}"))?;

    eprintln!("Blockout {} updated", short(id));
    Ok(())
}

pub(super) fn cmd_remove(desk: &FrontDesk<Storage>, blockout: &str) -> Result<(), String> {
    let id = resolve(desk, Table::Blockouts, blockout)?;
    desk.delete_blockout(id)
        .map_err(|e| format!("failed to remove blockout: {e}"))?;

    eprintln!("Blockout {} removed", short(id));
    Ok(())
}
