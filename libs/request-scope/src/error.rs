use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScopeError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScopeError {
    /// A slot operation ran outside of [`crate::scope`] / [`crate::sync_scope`].
    #[error("no active request scope")]
    NotActive,
}
