//! Request and result types exchanged with the courier.
//!
//! # Design
//! These types describe one submission and its single result as plain data.
//! All fields use owned types (`String`, `Vec`) and derive serde traits so
//! values can cross host-envelope boundaries without lifetime concerns.
//! Bodies are raw bytes; the courier never interprets response content.

use serde::{Deserialize, Serialize};

/// Status codes synthesized by the courier when no real server status is
/// available. Anything else in a [`Response`] came from the server verbatim.
pub mod status {
    /// Not-found-class transport failure.
    pub const FORBIDDEN: u16 = 403;

    /// No connectivity, timeout expiry, or any other transport failure.
    pub const GATEWAY_TIMEOUT: u16 = 504;
}

/// Method selector carried in a submission.
///
/// Host envelopes carry the method as a raw integer code. Codes other than
/// GET and POST are preserved as [`Method::Unrecognized`] so the executor
/// can apply its pass-through default instead of rejecting the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    /// Any other wire code. Executed as a no-op yielding the empty result.
    Unrecognized(i32),
}

impl Method {
    /// Wire code for a GET submission.
    pub const GET_CODE: i32 = 0;
    /// Wire code for a POST submission.
    pub const POST_CODE: i32 = 1;

    /// Decode a host-envelope method code.
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::GET_CODE => Method::Get,
            Self::POST_CODE => Method::Post,
            other => Method::Unrecognized(other),
        }
    }
}

/// One submission: a single HTTP exchange to perform.
///
/// The `parameter` plays a different role per method. For GET it is appended
/// verbatim to `base_url` — no URL-escaping, no separator insertion; callers
/// pre-format any `?`/`&` themselves, and existing callers rely on that raw
/// concatenation. For POST it is sent as the full request body, UTF-8 text,
/// and never touches the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub base_url: String,
    pub parameter: Option<String>,
}

impl Request {
    pub fn get(base_url: impl Into<String>, parameter: Option<String>) -> Self {
        Self {
            method: Method::Get,
            base_url: base_url.into(),
            parameter,
        }
    }

    pub fn post(base_url: impl Into<String>, parameter: Option<String>) -> Self {
        Self {
            method: Method::Post,
            base_url: base_url.into(),
            parameter,
        }
    }

    /// The URL the exchange actually targets.
    ///
    /// For GET with a present, non-empty parameter this is `base_url` with
    /// the parameter concatenated verbatim; in every other case it is
    /// `base_url` unmodified.
    pub fn effective_url(&self) -> String {
        match (self.method, self.parameter.as_deref()) {
            (Method::Get, Some(param)) if !param.is_empty() => {
                format!("{}{}", self.base_url, param)
            }
            _ => self.base_url.clone(),
        }
    }
}

/// The one result delivered per submission.
///
/// `body` is present only when an exchange completed. Non-2xx server
/// statuses are passed through verbatim with their body; they are results,
/// not failures. Synthesized failures carry no body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

impl Response {
    /// A completed exchange: the server's status with its buffered body.
    pub fn completed(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// A synthesized failure: status code only, no body.
    pub fn failure(status: u16) -> Self {
        Self { status, body: None }
    }

    /// The empty result produced for unrecognized methods. No exchange is
    /// performed and the host-envelope default result code 0 is delivered.
    pub fn empty() -> Self {
        Self {
            status: 0,
            body: None,
        }
    }

    /// The body as UTF-8 text, if present and valid.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().and_then(|b| std::str::from_utf8(b).ok())
    }
}
