use serde::{Deserialize, Serialize};

use qb_db::models::Respuesta;

/// Body for assembling an exam.
#[derive(Debug, Deserialize)]
pub struct ExamenRequest {
    /// Topic names to draw questions from. Names with no matching tema are
    /// dropped without error.
    #[serde(rename = "nombresTemas")]
    pub nombres_temas: Vec<String>,
    pub dificultad: String,
    /// Upper bound on the number of questions returned.
    pub limite: i64,
}

/// One exam question with its answers in randomized order.
#[derive(Debug, Serialize)]
pub struct ExamenPregunta {
    pub id_pregunta: i64,
    pub pregunta: String,
    pub respuestas: Vec<Respuesta>,
}

/// An assembled exam. Built per request, never persisted.
#[derive(Debug, Serialize)]
pub struct Examen {
    pub preguntas: Vec<ExamenPregunta>,
}
