use axum::{Json, Router, extract::State, routing::post};
use rand::{SeedableRng, rngs::StdRng};

use crate::{error::ApiError, state::ApiState, validation};

use super::{
    assembler,
    model::{Examen, ExamenRequest},
};

/// Create the examen routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/examen", post(create_examen))
}

async fn create_examen(
    State(state): State<ApiState>,
    Json(request): Json<ExamenRequest>,
) -> Result<Json<Examen>, ApiError> {
    validation::validate_nombres_temas(&request.nombres_temas)?;
    validation::validate_limite(request.limite)?;

    // StdRng stays Send across the fetches, unlike thread_rng
    let mut rng = StdRng::from_entropy();
    let examen = assembler::assemble(&state.pool, &request, &mut rng).await?;

    Ok(Json(examen))
}
