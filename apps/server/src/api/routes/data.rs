//! Request-scoped data API routes

use crate::api::handlers::data;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn data_routes() -> Router<AppState> {
    Router::new().route("/data", get(data::get_data).post(data::set_data))
}
