//! A http gateway exposing the status of minecraft java edition servers.
//!
//! Statuses are fetched with the server list ping protocol ([net]) and
//! served as json by the [web] frontend.

pub mod address;
pub mod config;
pub mod error;
pub mod favicon;
pub mod net;
pub mod web;

pub use address::Address;
pub use config::Config;
pub use net::{PingResult, StatusClient};
