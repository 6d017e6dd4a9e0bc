use serde::Deserialize;

/// Body for creating or updating a pregunta.
#[derive(Debug, Deserialize)]
pub struct PreguntaPayload {
    pub id_tema: i64,
    pub pregunta: String,
    pub dificultad: String,
}
