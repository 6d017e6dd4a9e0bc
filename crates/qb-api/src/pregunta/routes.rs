use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{error::ApiError, state::ApiState};

use qb_db::{
    models::Pregunta,
    repositories::{pregunta, respuesta},
};

use super::model::PreguntaPayload;

/// Create the pregunta routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/preguntas", get(list_preguntas))
        .route("/preguntas", post(create_pregunta))
        .route("/preguntas/{id}", get(get_pregunta))
        .route("/preguntas/{id}", put(update_pregunta))
        .route("/preguntas/{id}", delete(delete_pregunta))
}

async fn list_preguntas(State(state): State<ApiState>) -> Result<Json<Vec<Pregunta>>, ApiError> {
    let preguntas = pregunta::list_all(&state.pool).await?;
    Ok(Json(preguntas))
}

async fn get_pregunta(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Pregunta>, ApiError> {
    match pregunta::find_by_id(&state.pool, id).await? {
        Some(encontrada) => Ok(Json(encontrada)),
        None => Err(ApiError::NotFound("Pregunta no encontrada".to_string())),
    }
}

async fn create_pregunta(
    State(state): State<ApiState>,
    Json(payload): Json<PreguntaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let id = pregunta::insert(
        &state.pool,
        payload.id_tema,
        &payload.pregunta,
        &payload.dificultad,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_pregunta(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<PreguntaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = pregunta::update(
        &state.pool,
        id,
        payload.id_tema,
        &payload.pregunta,
        &payload.dificultad,
    )
    .await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Pregunta no encontrada".to_string()));
    }

    Ok(Json(json!({ "message": "Pregunta actualizada correctamente" })))
}

/// Delete a question and its answers. The answers go first; there is no
/// transaction around the pair, so a failure in between leaves the answers
/// gone and the question in place.
async fn delete_pregunta(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    respuesta::delete_by_pregunta(&state.pool, id).await?;

    let affected = pregunta::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Pregunta no encontrada".to_string()));
    }

    Ok(Json(json!({ "message": "Pregunta eliminada correctamente" })))
}
