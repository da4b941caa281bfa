//! Greeting function with CORS preflight handling

use std::fmt::Write;

use hyper::Method;

use super::{Clock, FunctionError, FunctionRequest, FunctionResponse, SystemClock};
use crate::logger;

/// Timestamp layout in the greeting body
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";
/// Preflight cache lifetime in seconds (24 hours)
const PREFLIGHT_MAX_AGE: u32 = 86_400;

/// The HTTP-triggered function
pub struct HttpTrigger<C = SystemClock> {
    name: String,
    clock: C,
}

impl<C: Clock> HttpTrigger<C> {
    pub fn new(name: impl Into<String>, clock: C) -> Self {
        Self {
            name: name.into(),
            clock,
        }
    }

    /// Handle one request. Never fails: errors become a 500 response.
    pub fn handle(&self, req: &FunctionRequest) -> FunctionResponse {
        logger::log_info(&format!("{} function processed a request.", self.name));

        match self.try_handle(req) {
            Ok(response) => response,
            Err(err) => {
                let message = format!("Error in function execution: {err}");
                logger::log_error(&message);
                FunctionResponse::text(err.status_code(), message)
            }
        }
    }

    fn try_handle(&self, req: &FunctionRequest) -> Result<FunctionResponse, FunctionError> {
        if req.method == Method::OPTIONS {
            return Ok(preflight_response());
        }

        logger::log_debug(&format!("Request method: {}", req.method));
        logger::log_debug(&format!("Request URL: {}", req.url));

        let message = self.greeting()?;
        logger::log_debug(&format!("Sending response: {message}"));

        Ok(FunctionResponse::text(200, message)
            .with_header("Access-Control-Allow-Origin", ALLOW_ORIGIN))
    }

    fn greeting(&self) -> Result<String, FunctionError> {
        let now = self.clock.now()?;
        let mut message = String::from("Hello, World! Current time: ");
        write!(message, "{}", now.format(TIMESTAMP_FORMAT))?;
        Ok(message)
    }
}

fn preflight_response() -> FunctionResponse {
    FunctionResponse::new(204)
        .with_header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .with_header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .with_header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .with_header("Access-Control-Max-Age", PREFLIGHT_MAX_AGE.to_string())
}
