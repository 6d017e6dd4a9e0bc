use sqlx::{Executor, Postgres};

use crate::models::Pregunta;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Pregunta>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_pregunta, id_tema, pregunta, dificultad
            FROM preguntas
            ORDER BY id_pregunta
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(
    executor: E,
    id_pregunta: i64,
) -> Result<Option<Pregunta>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_pregunta, id_tema, pregunta, dificultad
            FROM preguntas
            WHERE id_pregunta = $1
        "#,
    )
    .bind(id_pregunta)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    id_tema: i64,
    pregunta: &str,
    dificultad: &str,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO preguntas (id_tema, pregunta, dificultad)
            VALUES ($1, $2, $3)
            RETURNING id_pregunta
        "#,
    )
    .bind(id_tema)
    .bind(pregunta)
    .bind(dificultad)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(
    executor: E,
    id_pregunta: i64,
    id_tema: i64,
    pregunta: &str,
    dificultad: &str,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE preguntas
            SET id_tema = $1, pregunta = $2, dificultad = $3
            WHERE id_pregunta = $4
        "#,
    )
    .bind(id_tema)
    .bind(pregunta)
    .bind(dificultad)
    .bind(id_pregunta)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E>(executor: E, id_pregunta: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM preguntas WHERE id_pregunta = $1
        "#,
    )
    .bind(id_pregunta)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Candidate questions for an exam: every question under one of the given
/// topics with exactly the given difficulty, in primary-key order. The
/// caller shuffles and caps the result.
pub async fn list_by_temas_and_dificultad<'e, E>(
    executor: E,
    tema_ids: &[i64],
    dificultad: &str,
) -> Result<Vec<Pregunta>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_pregunta, id_tema, pregunta, dificultad
            FROM preguntas
            WHERE id_tema = ANY($1) AND dificultad = $2
            ORDER BY id_pregunta
        "#,
    )
    .bind(tema_ids)
    .bind(dificultad)
    .fetch_all(executor)
    .await
}
