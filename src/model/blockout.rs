//! Blockouts: staff time that is occupied but not bookable.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A period a staff member is unavailable. Has an explicit end and no status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blockout {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub start: Timestamp,
    pub end: Timestamp,
    pub reason: BlockoutReason,
    pub notes: Option<String>,
}

/// Why the time is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockoutReason {
    Leave,
    Lunch,
    Meeting,
    Training,
    Other,
}

impl BlockoutReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leave => "leave",
            Self::Lunch => "lunch",
            Self::Meeting => "meeting",
            Self::Training => "training",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for BlockoutReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockoutReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leave" => Ok(Self::Leave),
            "lunch" => Ok(Self::Lunch),
            "meeting" => Ok(Self::Meeting),
            "training" => Ok(Self::Training),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown blockout reason: {other}")),
        }
    }
}

/// The fields of a blockout the desk controls on create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockoutDraft {
    pub staff_id: Uuid,
    pub start: Timestamp,
    pub end: Timestamp,
    pub reason: BlockoutReason,
    pub notes: Option<String>,
}

impl Blockout {
    pub fn from_draft(id: Uuid, draft: BlockoutDraft) -> Self {
        Self {
            id,
            staff_id: draft.staff_id,
            start: draft.start,
            end: draft.end,
            reason: draft.reason,
            notes: draft.notes,
        }
    }
}
