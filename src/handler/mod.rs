//! Request handler module
//!
//! Adapts hyper requests to the HTTP trigger function and writes the access log.

pub mod dispatch;

pub use dispatch::handle_request;
