//! HTTP protocol layer module
//!
//! Converts function responses into hyper responses.

pub mod response;

pub use response::into_hyper_response;
