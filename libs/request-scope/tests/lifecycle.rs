//! Scope release on every exit path.
//!
//! Kept as a single test: the active-scope counter is process-wide and the
//! assertions below rely on nothing else opening scopes concurrently.

use futures::FutureExt as _;
use scoped_data_scope::{active_scopes, is_active, opened_scopes, put, scope, sync_scope};
use std::time::Duration;

#[tokio::test]
async fn scopes_are_released_on_success_panic_and_cancellation() {
    assert_eq!(active_scopes(), 0);
    let opened_before = opened_scopes();

    // Normal completion.
    scope(async {
        assert_eq!(active_scopes(), 1);
        put("ok").unwrap();
    })
    .await;
    assert_eq!(active_scopes(), 0);

    // Handler panics inside the scope.
    let panicked = std::panic::AssertUnwindSafe(scope(async {
        put("boom").unwrap();
        panic!("handler failure");
    }))
    .catch_unwind()
    .await;
    assert!(panicked.is_err());
    assert_eq!(active_scopes(), 0);
    assert!(!is_active());

    // Request aborted mid-flight.
    let aborted = tokio::time::timeout(
        Duration::from_millis(10),
        scope(async {
            put("slow").unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
        }),
    )
    .await;
    assert!(aborted.is_err());
    assert_eq!(active_scopes(), 0);

    // Synchronous scope returning an error.
    let result: Result<(), &str> = sync_scope(|| {
        put("err").unwrap();
        Err("failed")
    });
    assert!(result.is_err());
    assert_eq!(active_scopes(), 0);

    assert_eq!(opened_scopes() - opened_before, 4);
}
