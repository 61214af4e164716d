//! Appointment status and confirmation flag.
//!
//! Status moves freely between the four values: an operator may correct
//! a mistaken `completed` or `no-show` by setting it back. Deletion is not a
//! status; it is a separate action on the store.
//!
//! Confirmation records whether a reminder went out and is independent of
//! status in both directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where an appointment stands on the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    /// Booked, client not yet in.
    #[default]
    Scheduled,

    /// Client is at the desk.
    Arrived,

    /// Service delivered.
    Completed,

    /// Client never showed. Still occupies the grid.
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Scheduled, Self::Arrived, Self::Completed, Self::NoShow];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Arrived => "arrived",
            Self::Completed => "completed",
            Self::NoShow => "no-show",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The requested status is not one of the four known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown appointment status: {0:?} (expected scheduled, arrived, completed or no-show)")]
pub struct ParseStatusError(pub String);

impl FromStr for AppointmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "arrived" => Ok(Self::Arrived),
            "completed" => Ok(Self::Completed),
            "no-show" | "no_show" | "noshow" => Ok(Self::NoShow),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Whether a reminder message has been sent for an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confirmation {
    Sent,
    #[default]
    Unsent,
}

impl Confirmation {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Sent => Self::Unsent,
            Self::Unsent => Self::Sent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Unsent => "unsent",
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confirmation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(Self::Sent),
            "unsent" => Ok(Self::Unsent),
            other => Err(format!("unknown confirmation flag: {other}")),
        }
    }
}
