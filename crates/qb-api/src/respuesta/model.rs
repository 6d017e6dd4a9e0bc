use serde::Deserialize;

/// Body for creating or updating a respuesta.
#[derive(Debug, Deserialize)]
pub struct RespuestaPayload {
    pub id_pregunta: i64,
    pub respuesta: String,
    pub es_correcta: bool,
}
