//! Transport error types.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the dispatcher maps it to a
//! different synthesized status (403) than every other failure (504).
//! The `From<ureq::Error>` impl is the single place where transport-level
//! failures are classified; the executor and dispatcher never inspect ureq
//! errors directly.

use std::fmt;
use std::io;

use crate::http::status;

/// Failures raised while executing an exchange.
#[derive(Debug)]
pub enum TransportError {
    /// The host or resource could not be located or opened.
    NotFound,

    /// A connect or read deadline expired.
    Timeout,

    /// The URL could not be parsed into something the transport can open.
    InvalidUrl(String),

    /// Any other I/O or protocol failure.
    Io(String),
}

impl TransportError {
    /// The status code delivered in place of a real server status.
    pub fn as_status(&self) -> u16 {
        match self {
            TransportError::NotFound => status::FORBIDDEN,
            _ => status::GATEWAY_TIMEOUT,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NotFound => write!(f, "host or resource not found"),
            TransportError::Timeout => write!(f, "transport deadline expired"),
            TransportError::InvalidUrl(url) => write!(f, "invalid url: {url}"),
            TransportError::Io(msg) => write!(f, "transport failure: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::HostNotFound => TransportError::NotFound,
            ureq::Error::Timeout(_) => TransportError::Timeout,
            ureq::Error::BadUri(uri) => TransportError::InvalidUrl(uri.to_string()),
            ureq::Error::Io(e) if e.kind() == io::ErrorKind::NotFound => TransportError::NotFound,
            ureq::Error::Io(e) if e.kind() == io::ErrorKind::TimedOut => TransportError::Timeout,
            other => TransportError::Io(other.to_string()),
        }
    }
}
