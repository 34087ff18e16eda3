//! 路由模块

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cafe", get(handlers::list_cafes))
        .route("/api/health", get(handlers::health_check))
}
