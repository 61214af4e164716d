//! Catalog seeding commands: staff, services, clients.

use uuid::Uuid;

use crate::desk::FrontDesk;
use crate::model::{Catalog, Client, ServiceDefinition, StaffMember};
use crate::storage::Storage;

use super::format::format_price;
use super::short;

pub(super) fn cmd_staff_add(
    desk: &FrontDesk<Storage>,
    name: &str,
    active: bool,
) -> Result<(), String> {
    let staff = StaffMember {
        id: Uuid::new_v4(),
        name: name.to_string(),
        active,
    };
    desk.store()
        .insert_staff(&staff)
        .map_err(|e| format!("failed to add staff member: {e}"))?;

    println!("{}", staff.id);
    Ok(())
}

pub(super) fn cmd_staff_list(desk: &FrontDesk<Storage>) -> Result<(), String> {
    let catalog = load(desk)?;
    let mut staff: Vec<_> = catalog.all_staff().collect();
    if staff.is_empty() {
        println!("No staff");
        return Ok(());
    }
    staff.sort_by(|a, b| a.name.cmp(&b.name));

    for s in staff {
        let flag = if s.active { "" } else { "  [inactive]" };
        println!("{}  {}{flag}", short(s.id), s.name);
    }
    Ok(())
}

pub(super) fn cmd_service_add(
    desk: &FrontDesk<Storage>,
    name: &str,
    minutes: u32,
    price: u64,
) -> Result<(), String> {
    if minutes == 0 {
        return Err("a service must last at least one minute".to_string());
    }
    let service = ServiceDefinition {
        id: Uuid::new_v4(),
        name: name.to_string(),
        duration_minutes: minutes,
        price,
    };
    desk.store()
        .insert_service(&service)
        .map_err(|e| format!("failed to add service: {e}"))?;

    println!("{}", service.id);
    Ok(())
}

pub(super) fn cmd_service_list(desk: &FrontDesk<Storage>) -> Result<(), String> {
    let catalog = load(desk)?;
    let mut services: Vec<_> = catalog.all_services().collect();
    if services.is_empty() {
        println!("No services");
        return Ok(());
    }
    services.sort_by(|a, b| a.name.cmp(&b.name));

    for s in services {
        println!(
            "{}  {:>4} min  {:>9}  {}",
            short(s.id),
            s.duration_minutes,
            format_price(s.price),
            s.name
        );
    }
    Ok(())
}

pub(super) fn cmd_client_add(
    desk: &FrontDesk<Storage>,
    name: &str,
    phone: Option<String>,
) -> Result<(), String> {
    let client = Client {
        id: Uuid::new_v4(),
        name: name.to_string(),
        phone,
    };
    desk.store()
        .insert_client(&client)
        .map_err(|e| format!("failed to add client: {e}"))?;

    println!("{}", client.id);
    Ok(())
}

pub(super) fn cmd_client_list(desk: &FrontDesk<Storage>) -> Result<(), String> {
    let catalog = load(desk)?;
    let mut clients: Vec<_> = catalog.all_clients().collect();
    if clients.is_empty() {
        println!("No clients");
        return Ok(());
    }
    clients.sort_by(|a, b| a.name.cmp(&b.name));

    for c in clients {
        match &c.phone {
            Some(phone) => println!("{}  {}  ({phone})", short(c.id), c.name),
            None => println!("{}  {}", short(c.id), c.name),
        }
    }
    Ok(())
}

fn load(desk: &FrontDesk<Storage>) -> Result<Catalog, String> {
    desk.store()
        .load_catalog()
        .map_err(|e| format!("failed to load catalog: {e}"))
}
