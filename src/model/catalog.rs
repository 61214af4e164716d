//! Reference records: who works, what is sold, and who is booked.
//!
//! Owned by the roster and catalog collaborators. The engine only looks
//! things up here; it never edits them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of staff whose calendar the engine lays out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
}

/// A bookable service. Only `duration_minutes` matters to scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: u32,

    /// Price in minor currency units (cents).
    pub price: u64,
}

/// A client an appointment is booked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
}

/// Lookup tables for the references an appointment carries.
///
/// Keyed by id in ordered maps so iteration is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    staff: BTreeMap<Uuid, StaffMember>,
    services: BTreeMap<Uuid, ServiceDefinition>,
    clients: BTreeMap<Uuid, Client>,
}

impl Catalog {
    pub fn new(
        staff: impl IntoIterator<Item = StaffMember>,
        services: impl IntoIterator<Item = ServiceDefinition>,
        clients: impl IntoIterator<Item = Client>,
    ) -> Self {
        Self {
            staff: staff.into_iter().map(|s| (s.id, s)).collect(),
            services: services.into_iter().map(|s| (s.id, s)).collect(),
            clients: clients.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn staff(&self, id: Uuid) -> Option<&StaffMember> {
        self.staff.get(&id)
    }

    pub fn service(&self, id: Uuid) -> Option<&ServiceDefinition> {
        self.services.get(&id)
    }

    pub fn client(&self, id: Uuid) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn all_staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.staff.values()
    }

    pub fn all_services(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.services.values()
    }

    pub fn all_clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }
}
