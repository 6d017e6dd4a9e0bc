use serde::Deserialize;

/// Body for creating or renaming a tema.
#[derive(Debug, Deserialize)]
pub struct TemaPayload {
    pub tema: String,
}
