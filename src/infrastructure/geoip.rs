//! IP-to-country resolution backed by a MaxMind MMDB database.
//!
//! The resolver is optional and pluggable. Its contract, including one
//! asymmetry kept for compatibility with existing consumers:
//!
//! - no resolver configured and no IP available → no country value at all
//! - resolver configured but no IP available → `"unknown"`
//! - IP available but no resolver, or the IP fails to parse, or the lookup
//!   fails → `"unknown"`
//! - otherwise → the resolved two-letter ISO code
//!
//! Resolver failures never fail the enclosing request.

use maxminddb::{Mmap, Reader, geoip2};
use std::net::IpAddr;

use crate::error::AppError;

/// Country value used whenever resolution is impossible or fails.
pub const UNKNOWN_COUNTRY: &str = "unknown";

/// Maps an IP address to a two-letter country code.
pub trait CountryResolver: Send + Sync {
    /// Returns the ISO country code for `ip`, or `None` when the database
    /// has no answer.
    fn country_code(&self, ip: IpAddr) -> Option<String>;
}

/// MaxMind GeoLite2/GeoIP2 resolver over a memory-mapped MMDB file.
pub struct MaxMindResolver {
    reader: Reader<Mmap>,
}

impl MaxMindResolver {
    /// Opens an MMDB database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ResolverUnavailable`] when the file cannot be
    /// opened or is not a valid MMDB database. Callers are expected to log
    /// the error and continue without a resolver.
    pub fn open(path: &str) -> Result<Self, AppError> {
        let reader = unsafe { Reader::open_mmap(path) }
            .map_err(|e| AppError::ResolverUnavailable(e.to_string()))?;

        Ok(Self { reader })
    }
}

impl CountryResolver for MaxMindResolver {
    fn country_code(&self, ip: IpAddr) -> Option<String> {
        let result = self.reader.lookup(ip).ok()?;
        let country = result.decode::<geoip2::Country>().ok()??;
        country.country.iso_code.map(|code| code.to_string())
    }
}

/// Derives the country value for a click.
///
/// Implements the contract documented at module level; see the module docs
/// for the case table.
pub fn resolve_country(
    resolver: Option<&dyn CountryResolver>,
    ip: Option<&str>,
) -> Option<String> {
    let Some(resolver) = resolver else {
        return ip.map(|_| UNKNOWN_COUNTRY.to_string());
    };

    let Some(raw) = ip else {
        return Some(UNKNOWN_COUNTRY.to_string());
    };

    let Ok(addr) = raw.parse::<IpAddr>() else {
        return Some(UNKNOWN_COUNTRY.to_string());
    };

    Some(
        resolver
            .country_code(addr)
            .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
    )
}
