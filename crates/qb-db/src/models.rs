use serde::{Deserialize, Serialize};

/// Topic row - questions are classified under exactly one tema
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tema {
    /// Unique topic identifier
    pub id_tema: i64,
    /// Topic name, unique across the table (3-20 letters or digits)
    pub tema: String,
}

/// Question row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pregunta {
    /// Unique question identifier
    pub id_pregunta: i64,
    /// Topic this question belongs to (indexed together with dificultad)
    pub id_tema: i64,
    /// The prompt shown to the quiz taker
    pub pregunta: String,
    /// Difficulty label, compared verbatim when assembling an exam
    pub dificultad: String,
}

/// Answer row - one candidate response to a question
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Respuesta {
    /// Unique answer identifier
    pub id_respuesta: i64,
    /// Question this answer belongs to (indexed)
    pub id_pregunta: i64,
    /// Answer text
    pub respuesta: String,
    /// Whether this is the correct answer
    pub es_correcta: bool,
}
