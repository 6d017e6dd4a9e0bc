/// Database schema for the three content tables.
///
/// Foreign keys deliberately have no `ON DELETE CASCADE`: removing a
/// question's answers is orchestrated by the application, answers first.

/// SQL schema for the temas table
pub const TEMAS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS temas (
    id_tema BIGSERIAL PRIMARY KEY,
    tema VARCHAR(20) NOT NULL,
    CONSTRAINT uq_temas_tema UNIQUE (tema)
);
"#;

/// SQL schema for the preguntas table
pub const PREGUNTAS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS preguntas (
    id_pregunta BIGSERIAL PRIMARY KEY,
    id_tema BIGINT NOT NULL,
    pregunta TEXT NOT NULL,
    dificultad VARCHAR(20) NOT NULL,
    CONSTRAINT fk_preguntas_tema FOREIGN KEY (id_tema) REFERENCES temas(id_tema)
);

-- Composite index for the exam query: questions by topic and difficulty
CREATE INDEX IF NOT EXISTS idx_preguntas_tema_dificultad ON preguntas(id_tema, dificultad);
"#;

/// SQL schema for the respuestas table
pub const RESPUESTAS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS respuestas (
    id_respuesta BIGSERIAL PRIMARY KEY,
    id_pregunta BIGINT NOT NULL,
    respuesta TEXT NOT NULL,
    es_correcta BOOLEAN NOT NULL DEFAULT FALSE,
    CONSTRAINT fk_respuestas_pregunta FOREIGN KEY (id_pregunta) REFERENCES preguntas(id_pregunta)
);

CREATE INDEX IF NOT EXISTS idx_respuestas_pregunta ON respuestas(id_pregunta);
"#;

/// All statements in dependency order.
pub const ALL: &[&str] = &[TEMAS_SCHEMA, PREGUNTAS_SCHEMA, RESPUESTAS_SCHEMA];
