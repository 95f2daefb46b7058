//! Request handlers for API endpoints
//!
//! Handlers extract the request, call into a service and format the response.

pub mod data;
pub mod metrics;

pub use data::*;
pub use metrics::*;
