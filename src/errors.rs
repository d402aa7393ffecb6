use crate::editions::Edition;
use std::io;
use thiserror::Error;

/// Enum representing the errors that may occur while reading a GeoIP database.
///
/// "No data for this address" is not an error: lookups report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum GeoIpError {
    /// Error from the underlying file or buffer.
    #[error("error reading database: {0}")]
    Io(#[from] io::Error),
    /// The query string is neither an IP literal nor resolvable to one.
    #[error("invalid address: {0}")]
    BadAddress(String),
    /// The trailing structure marker carries an edition byte this crate
    /// does not implement.
    #[error("unsupported database edition byte: {0}")]
    UnsupportedEdition(u8),
    /// The requested operation is not defined for the opened edition.
    #[error("operation not valid for a {0} database")]
    InvalidForEdition(Edition),
    /// The database violates a structural invariant.
    #[error("corrupt database: {0}")]
    CorruptDatabase(&'static str),
}
