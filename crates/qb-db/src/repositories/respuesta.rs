use sqlx::{Executor, Postgres};

use crate::models::Respuesta;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Respuesta>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_respuesta, id_pregunta, respuesta, es_correcta
            FROM respuestas
            ORDER BY id_respuesta
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(
    executor: E,
    id_respuesta: i64,
) -> Result<Option<Respuesta>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_respuesta, id_pregunta, respuesta, es_correcta
            FROM respuestas
            WHERE id_respuesta = $1
        "#,
    )
    .bind(id_respuesta)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    id_pregunta: i64,
    respuesta: &str,
    es_correcta: bool,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO respuestas (id_pregunta, respuesta, es_correcta)
            VALUES ($1, $2, $3)
            RETURNING id_respuesta
        "#,
    )
    .bind(id_pregunta)
    .bind(respuesta)
    .bind(es_correcta)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(
    executor: E,
    id_respuesta: i64,
    id_pregunta: i64,
    respuesta: &str,
    es_correcta: bool,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE respuestas
            SET id_pregunta = $1, respuesta = $2, es_correcta = $3
            WHERE id_respuesta = $4
        "#,
    )
    .bind(id_pregunta)
    .bind(respuesta)
    .bind(es_correcta)
    .bind(id_respuesta)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E>(executor: E, id_respuesta: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM respuestas WHERE id_respuesta = $1
        "#,
    )
    .bind(id_respuesta)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Remove every answer hanging off a question. Runs before the question row
/// itself is deleted.
pub async fn delete_by_pregunta<'e, E>(executor: E, id_pregunta: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM respuestas WHERE id_pregunta = $1
        "#,
    )
    .bind(id_pregunta)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// All answers for the given questions, in primary-key order. The caller
/// shuffles and groups the result.
pub async fn list_by_pregunta_ids<'e, E>(
    executor: E,
    pregunta_ids: &[i64],
) -> Result<Vec<Respuesta>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_respuesta, id_pregunta, respuesta, es_correcta
            FROM respuestas
            WHERE id_pregunta = ANY($1)
            ORDER BY id_respuesta
        "#,
    )
    .bind(pregunta_ids)
    .fetch_all(executor)
    .await
}
