//! Middleware stack for the API

pub mod layers;
pub mod metrics;
pub mod request_id;
pub mod request_scope;

// Re-export public API
pub use layers::{catch_panic, cors, trace};
pub use metrics::metrics_middleware;
pub use request_id::request_id_middleware;
pub use request_scope::request_scope_middleware;
