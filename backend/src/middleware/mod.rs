//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns:
//! trace correlation and the per-request deadline.

pub mod timeout;
pub mod trace;

pub use timeout::RequestTimeout;
pub use trace::Trace;
