//! Appointment book and calendar layout for a salon front desk.
//!
//! Records come in from a [`store::BookingStore`]; [`timeline::build`]
//! turns them into lane-assigned entries a day or week grid can draw
//! without collisions. Changes go through [`desk::FrontDesk`].

pub mod cli;
pub mod config;
pub mod desk;
pub mod geometry;
pub mod interval;
pub mod layout;
pub mod model;
pub mod notify;
pub mod overlap;
pub mod storage;
pub mod store;
pub mod timeline;
pub mod view;
