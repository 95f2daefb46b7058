//! Scoped data server
//!
//! An axum service where every HTTP request owns a private data slot:
//! - `POST /api/data` stores a value in the current request's slot
//! - `GET /api/data` reports what the current request has stored
//! - no value ever crosses from one request to another

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
