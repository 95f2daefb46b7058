//! Binding of a [`RequestSlot`] to the currently executing request.
//!
//! The slot is stored in a tokio task-local, so it follows the request's future
//! across every `.await` regardless of which worker thread polls it. The scope
//! future owns the slot: when it completes, panics, or is dropped mid-flight the
//! slot goes with it, and nothing is left behind for the next request a worker
//! picks up.

use std::cell::RefCell;
use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use crate::error::{Result, ScopeError};
use crate::slot::RequestSlot;

tokio::task_local! {
    static CURRENT_SLOT: RefCell<RequestSlot>;
}

static ACTIVE_SCOPES: AtomicUsize = AtomicUsize::new(0);
static OPENED_SCOPES: AtomicU64 = AtomicU64::new(0);

/// Counts a scope as active for as long as it is alive.
struct ActiveScope;

impl ActiveScope {
    fn enter() -> Self {
        ACTIVE_SCOPES.fetch_add(1, Ordering::Relaxed);
        OPENED_SCOPES.fetch_add(1, Ordering::Relaxed);
        Self
    }
}

impl Drop for ActiveScope {
    fn drop(&mut self) {
        ACTIVE_SCOPES.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Run `future` with a fresh, empty slot bound to it.
///
/// Nested calls shadow the outer slot until the inner future completes.
pub async fn scope<F>(future: F) -> F::Output
where
    F: Future,
{
    let _active = ActiveScope::enter();
    let slot = RequestSlot::new();
    tracing::trace!(created_at = slot.timestamp_millis(), "request scope opened");

    let output = CURRENT_SLOT.scope(RefCell::new(slot), future).await;

    tracing::trace!("request scope closed");
    output
}

/// Synchronous counterpart of [`scope`].
pub fn sync_scope<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _active = ActiveScope::enter();
    CURRENT_SLOT.sync_scope(RefCell::new(RequestSlot::new()), f)
}

fn with_slot<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&RefCell<RequestSlot>) -> R,
{
    CURRENT_SLOT.try_with(f).map_err(|_| ScopeError::NotActive)
}

/// Store `value` in the current request's slot, replacing any earlier value.
pub fn put(value: impl Into<String>) -> Result<()> {
    let value = value.into();
    with_slot(|slot| slot.borrow_mut().set_value(value))
}

/// The value stored earlier in this request, if any.
pub fn get() -> Result<Option<String>> {
    with_slot(|slot| slot.borrow().value().map(str::to_owned))
}

pub fn has() -> Result<bool> {
    with_slot(|slot| slot.borrow().has_value())
}

/// `Data: <value>, Created at: <epoch-millis>` for the current slot.
pub fn describe() -> Result<String> {
    with_slot(|slot| slot.borrow().describe())
}

/// Drop the current value, returning it. The slot itself stays bound.
pub fn clear() -> Result<Option<String>> {
    with_slot(|slot| slot.borrow_mut().take_value())
}

pub fn created_at() -> Result<DateTime<Utc>> {
    with_slot(|slot| slot.borrow().timestamp())
}

/// Whether the caller is running inside a request scope. Never fails.
pub fn is_active() -> bool {
    CURRENT_SLOT.try_with(|_| ()).is_ok()
}

/// Number of scopes currently open in this process.
pub fn active_scopes() -> usize {
    ACTIVE_SCOPES.load(Ordering::Relaxed)
}

/// Number of scopes opened since process start.
pub fn opened_scopes() -> u64 {
    OPENED_SCOPES.load(Ordering::Relaxed)
}
