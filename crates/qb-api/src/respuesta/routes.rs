use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{error::ApiError, state::ApiState};

use qb_db::{models::Respuesta, repositories::respuesta};

use super::model::RespuestaPayload;

/// Create the respuesta routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/respuestas", get(list_respuestas))
        .route("/respuestas", post(create_respuesta))
        .route("/respuestas/{id}", get(get_respuesta))
        .route("/respuestas/{id}", put(update_respuesta))
        .route("/respuestas/{id}", delete(delete_respuesta))
}

async fn list_respuestas(State(state): State<ApiState>) -> Result<Json<Vec<Respuesta>>, ApiError> {
    let respuestas = respuesta::list_all(&state.pool).await?;
    Ok(Json(respuestas))
}

async fn get_respuesta(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Respuesta>, ApiError> {
    match respuesta::find_by_id(&state.pool, id).await? {
        Some(encontrada) => Ok(Json(encontrada)),
        None => Err(ApiError::NotFound("Respuesta no encontrada".to_string())),
    }
}

async fn create_respuesta(
    State(state): State<ApiState>,
    Json(payload): Json<RespuestaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let id = respuesta::insert(
        &state.pool,
        payload.id_pregunta,
        &payload.respuesta,
        payload.es_correcta,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_respuesta(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<RespuestaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = respuesta::update(
        &state.pool,
        id,
        payload.id_pregunta,
        &payload.respuesta,
        payload.es_correcta,
    )
    .await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Respuesta no encontrada".to_string()));
    }

    Ok(Json(json!({ "message": "Respuesta actualizada correctamente" })))
}

async fn delete_respuesta(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = respuesta::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Respuesta no encontrada".to_string()));
    }

    Ok(Json(json!({ "message": "Respuesta eliminada correctamente" })))
}
