use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{error::ApiError, state::ApiState, validation};

use qb_db::{models::Tema, repositories::tema};

use super::model::TemaPayload;

/// Create the tema routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/temas", get(list_temas))
        .route("/temas", post(create_tema))
        .route("/temas/{id}", get(get_tema))
        .route("/temas/{id}", put(update_tema))
        .route("/temas/{id}", delete(delete_tema))
}

async fn list_temas(State(state): State<ApiState>) -> Result<Json<Vec<Tema>>, ApiError> {
    let temas = tema::list_all(&state.pool).await?;
    Ok(Json(temas))
}

async fn get_tema(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Tema>, ApiError> {
    match tema::find_by_id(&state.pool, id).await? {
        Some(encontrado) => Ok(Json(encontrado)),
        None => Err(ApiError::NotFound("Tema no encontrado".to_string())),
    }
}

async fn create_tema(
    State(state): State<ApiState>,
    Json(payload): Json<TemaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_tema_name(&payload.tema)?;

    let id = tema::insert(&state.pool, &payload.tema)
        .await
        .map_err(|err| {
            ApiError::conflict_on_unique(err, format!("El tema '{}' ya existe", payload.tema))
        })?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

async fn update_tema(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<TemaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = tema::update_nombre(&state.pool, id, &payload.tema).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Tema no encontrado".to_string()));
    }

    Ok(Json(json!({ "message": "Tema actualizado correctamente" })))
}

async fn delete_tema(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = tema::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Tema no encontrado".to_string()));
    }

    Ok(Json(json!({ "message": "Tema eliminado correctamente" })))
}
