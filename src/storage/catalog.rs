//! Catalog storage: staff, services, and clients.
//!
//! The desk only reads these. Inserts exist so a fresh database can be seeded.

use crate::model::{Catalog, Client, ServiceDefinition, StaffMember};

use super::{Result, Storage, StorageError, parse_id};

impl Storage {
    pub fn insert_staff(&self, staff: &StaffMember) -> Result<()> {
        self.conn.execute(
            "INSERT INTO staff (id, name, active) VALUES (?1, ?2, ?3)",
            rusqlite::params![staff.id.to_string(), &staff.name, staff.active],
        )?;
        Ok(())
    }

    pub fn insert_service(&self, service: &ServiceDefinition) -> Result<()> {
        self.conn.execute(
            "INSERT INTO services (id, name, duration_minutes, price) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                service.id.to_string(),
                &service.name,
                service.duration_minutes,
                service.price,
            ],
        )?;
        Ok(())
    }

    pub fn insert_client(&self, client: &Client) -> Result<()> {
        self.conn.execute(
            "INSERT INTO clients (id, name, phone) VALUES (?1, ?2, ?3)",
            rusqlite::params![client.id.to_string(), &client.name, &client.phone],
        )?;
        Ok(())
    }

    /// Loads every staff member, service, and client.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let mut stmt = self.conn.prepare("SELECT id, name, active FROM staff")?;
        let staff = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, bool>(2)?,
                ))
            })?
            .map(|row| {
                let (id, name, active) = row?;
                Ok(StaffMember {
                    id: parse_id(&id)?,
                    name,
                    active,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT id, name, duration_minutes, price FROM services")?;
        let services = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })?
            .map(|row| {
                let (id, name, duration, price) = row?;
                Ok(ServiceDefinition {
                    id: parse_id(&id)?,
                    name,
                    duration_minutes: u32::try_from(duration).map_err(|_| {
                        StorageError::Corrupt(format!("invalid service duration: {duration}"))
                    })?,
                    price: u64::try_from(price).map_err(|_| {
                        StorageError::Corrupt(format!("invalid service price: {price}"))
                    })?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut stmt = self.conn.prepare("SELECT id, name, phone FROM clients")?;
        let clients = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            })?
            .map(|row| {
                let (id, name, phone) = row?;
                Ok(Client {
                    id: parse_id(&id)?,
                    name,
                    phone,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Catalog::new(staff, services, clients))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::storage::tests::test_storage;

    use super::*;

    #[test]
    fn seeded_records_come_back_in_catalog() {
        let (_dir, storage) = test_storage();
        let staff = StaffMember {
            id: Uuid::new_v4(),
            name: "Robin".into(),
            active: true,
        };
        let service = ServiceDefinition {
            id: Uuid::new_v4(),
            name: "Colour".into(),
            duration_minutes: 90,
            price: 12_000,
        };
        let client = Client {
            id: Uuid::new_v4(),
            name: "Sam".into(),
            phone: Some("555-0100".into()),
        };

        storage.insert_staff(&staff).unwrap();
        storage.insert_service(&service).unwrap();
        storage.insert_client(&client).unwrap();

        let catalog = storage.load_catalog().unwrap();
        assert_eq!(catalog.staff(staff.id), Some(&staff));
        assert_eq!(catalog.service(service.id), Some(&service));
        assert_eq!(catalog.client(client.id), Some(&client));
    }

    #[test]
    fn duplicate_staff_id_fails() {
        let (_dir, storage) = test_storage();
        let staff = StaffMember {
            id: Uuid::new_v4(),
            name: "Robin".into(),
            active: true,
        };
        storage.insert_staff(&staff).unwrap();
        let err = storage.insert_staff(&staff).unwrap_err();
        assert!(matches!(err, StorageError::Sqlite(_)));
    }

    #[test]
    fn empty_database_has_empty_catalog() {
        let (_dir, storage) = test_storage();
        let catalog = storage.load_catalog().unwrap();
        assert_eq!(catalog.all_staff().count(), 0);
    }
}
