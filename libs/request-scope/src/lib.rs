//! Request-scoped slot storage.
//!
//! Each request runs inside [`scope`] and gets exactly one [`RequestSlot`]:
//! - created empty when the scope is entered
//! - reachable through the free functions ([`put`], [`get`], [`has`], [`describe`])
//!   from any code polled by that request's future
//! - released when the scope's future finishes, fails, or is dropped
//!
//! Calls made outside a scope fail with [`ScopeError::NotActive`].

#![forbid(unsafe_code)]

mod error;
mod scope;
mod slot;

pub use error::{Result, ScopeError};
pub use scope::{
    active_scopes, clear, created_at, describe, get, has, is_active, opened_scopes, put, scope,
    sync_scope,
};
pub use slot::RequestSlot;
