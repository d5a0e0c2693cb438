//! HTTP handlers for the `/api` surface. Handlers stay thin: parameter
//! extraction and error-envelope mapping live here, the fallback policy
//! lives in the controller.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;

use crate::controllers::CatalogController;
use crate::models::catalog::ErrorMessage;
use crate::routers::root::health_check_route;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartsParams {
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "ID".to_string()
}

pub fn api_routes() -> Router<CatalogController> {
    Router::new()
        .route("/home", get(home_route))
        .route("/search", get(search_route))
        .route("/categories", get(categories_route))
        .route("/song/{video_id}", get(song_route))
        .route("/stream/{video_id}", get(stream_route))
        .route("/artist/{channel_id}", get(artist_route))
        .route("/playlist/{playlist_id}", get(playlist_route))
        .route("/charts", get(charts_route))
        .route("/health", get(health_check_route))
}

async fn home_route(State(gateway): State<CatalogController>) -> Response {
    Json(gateway.home().await).into_response()
}

async fn search_route(
    State(gateway): State<CatalogController>,
    Query(params): Query<SearchParams>,
) -> Response {
    if params.query.is_empty() {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "query must not be empty",
        );
    }
    Json(gateway.search(&params.query).await).into_response()
}

async fn categories_route(State(gateway): State<CatalogController>) -> Response {
    Json(gateway.categories()).into_response()
}

async fn song_route(
    State(gateway): State<CatalogController>,
    Path(video_id): Path<String>,
) -> Response {
    Json(gateway.song(&video_id).await).into_response()
}

async fn stream_route(
    State(gateway): State<CatalogController>,
    Path(video_id): Path<String>,
) -> Response {
    Json(gateway.stream(&video_id).await).into_response()
}

async fn artist_route(
    State(gateway): State<CatalogController>,
    Path(channel_id): Path<String>,
) -> Response {
    match gateway.artist(&channel_id).await {
        Ok(artist) => Json(artist).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}

async fn playlist_route(
    State(gateway): State<CatalogController>,
    Path(playlist_id): Path<String>,
) -> Response {
    match gateway.playlist(&playlist_id).await {
        Ok(playlist) => Json(playlist).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    }
}

async fn charts_route(
    State(gateway): State<CatalogController>,
    Query(params): Query<ChartsParams>,
) -> Response {
    Json(gateway.charts(&params.country).await).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorMessage {
            message: message.to_string(),
        }),
    )
        .into_response()
}
