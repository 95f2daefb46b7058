//! Request-scope middleware
//!
//! Binds a fresh slot to every request before it reaches a handler. The slot
//! lives exactly as long as the inner service future, so it is released on
//! success, on error responses, on panics caught further out, and when the
//! connection drops mid-request.

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn request_scope_middleware(req: Request, next: Next) -> Response {
    scoped_data_scope::scope(async move {
        if let Ok(created_at) = scoped_data_scope::created_at() {
            tracing::trace!(
                slot_created_at = created_at.timestamp_millis(),
                path = %req.uri().path(),
                "Request slot bound"
            );
        }
        next.run(req).await
    })
    .await
}
