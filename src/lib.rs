//! Structured error value for API responses
//!
//! [`ErrorResponse`] couples a human-readable message with a numeric
//! status code classifying the failure. Both fields stay independently
//! mutable after construction, so boundary layers can reclassify an
//! error before rendering it. With the `axum` feature (on by default)
//! the value converts directly into an HTTP response.

#[cfg(feature = "axum")]
mod http;
pub mod response;

pub use response::ErrorResponse;
