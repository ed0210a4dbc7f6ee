//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and IP geolocation.
//!
//! # Modules
//!
//! - [`geoip`] - Optional MaxMind-backed IP-to-country resolution
//! - [`persistence`] - SQLite repository implementations

pub mod geoip;
pub mod persistence;
