use axum::response::{IntoResponse, Json};

use crate::controllers::RootController;

pub async fn health_check_route() -> impl IntoResponse {
    Json(RootController::health_check())
}
