use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{examen, pregunta, respuesta, state::ApiState, tema};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(tema::routes())
        .merge(pregunta::routes())
        .merge(respuesta::routes())
        .merge(examen::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
