//! Direct database helpers for seeding and cleaning up test data.
//!
//! Tests use unique entity names and clean up the rows they created, so
//! suites can run against a shared database.

use sqlx::PgPool;

use qb_db::{models::Tema, repositories};

pub async fn create_tema(pool: &PgPool, nombre: &str) -> anyhow::Result<i64> {
    Ok(repositories::tema::insert(pool, nombre).await?)
}

pub async fn create_pregunta(
    pool: &PgPool,
    id_tema: i64,
    texto: &str,
    dificultad: &str,
) -> anyhow::Result<i64> {
    Ok(repositories::pregunta::insert(pool, id_tema, texto, dificultad).await?)
}

pub async fn create_respuesta(
    pool: &PgPool,
    id_pregunta: i64,
    texto: &str,
    es_correcta: bool,
) -> anyhow::Result<i64> {
    Ok(repositories::respuesta::insert(pool, id_pregunta, texto, es_correcta).await?)
}

pub async fn find_tema(pool: &PgPool, id_tema: i64) -> anyhow::Result<Option<Tema>> {
    Ok(repositories::tema::find_by_id(pool, id_tema).await?)
}

pub async fn count_respuestas_de(pool: &PgPool, id_pregunta: i64) -> anyhow::Result<i64> {
    Ok(sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*) FROM respuestas WHERE id_pregunta = $1
        "#,
    )
    .bind(id_pregunta)
    .fetch_one(pool)
    .await?)
}

/// Delete a tema and everything hanging off it, in dependency order.
pub async fn remove_tema(pool: &PgPool, id_tema: i64) -> anyhow::Result<()> {
    sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM respuestas
            WHERE id_pregunta IN (SELECT id_pregunta FROM preguntas WHERE id_tema = $1)
        "#,
    )
    .bind(id_tema)
    .execute(pool)
    .await?;

    sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM preguntas WHERE id_tema = $1
        "#,
    )
    .bind(id_tema)
    .execute(pool)
    .await?;

    sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM temas WHERE id_tema = $1
        "#,
    )
    .bind(id_tema)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a tema by name if present. Lets tests that create through the API
/// start from a clean slate even after an earlier aborted run.
pub async fn remove_tema_by_nombre(pool: &PgPool, nombre: &str) -> anyhow::Result<()> {
    let existing: Option<i64> = sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT id_tema FROM temas WHERE tema = $1
        "#,
    )
    .bind(nombre)
    .fetch_optional(pool)
    .await?;

    if let Some(id_tema) = existing {
        remove_tema(pool, id_tema).await?;
    }

    Ok(())
}
