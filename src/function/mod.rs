//! HTTP trigger function
//!
//! The function itself is a pure mapping from a [`FunctionRequest`] to a
//! [`FunctionResponse`]. It knows nothing about sockets or hyper; the
//! `handler` module adapts it to the server.

mod clock;
mod error;
mod trigger;

use hyper::Method;
use std::collections::HashMap;

pub use clock::{Clock, SystemClock};
pub use error::FunctionError;
pub use trigger::HttpTrigger;

/// Inbound request as seen by the function
///
/// The body is not part of the function's input and is never read off the wire.
#[derive(Debug, Clone)]
pub struct FunctionRequest {
    pub method: Method,
    pub url: String,
}

impl FunctionRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }
}

/// Outbound response produced by the function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    /// Create a response with the given status, no headers and an empty body
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    /// Create a `text/plain` response
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

#[cfg(test)]
impl FunctionResponse {
    /// Look up a header value by name, ignoring ASCII case
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
