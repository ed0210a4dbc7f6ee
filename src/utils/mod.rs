//! Utility functions for code generation, validation, and request handling.
//!
//! - [`codegen`] - Short code generation and validation
//! - [`expiry`] - Expiry timestamp calculation
//! - [`validate`] - Target URL validation
//! - [`client_ip`] - Client IP extraction from request metadata
//! - [`base_url`] - Base URL selection for generated short links

pub mod base_url;
pub mod client_ip;
pub mod codegen;
pub mod expiry;
pub mod validate;
