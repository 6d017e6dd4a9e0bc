use sqlx::{Executor, Postgres};

use crate::models::Tema;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Tema>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_tema, tema
            FROM temas
            ORDER BY id_tema
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id_tema: i64) -> Result<Option<Tema>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id_tema, tema
            FROM temas
            WHERE id_tema = $1
        "#,
    )
    .bind(id_tema)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(executor: E, nombre: &str) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO temas (tema)
            VALUES ($1)
            RETURNING id_tema
        "#,
    )
    .bind(nombre)
    .fetch_one(executor)
    .await
}

pub async fn update_nombre<'e, E>(
    executor: E,
    id_tema: i64,
    nombre: &str,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE temas
            SET tema = $1
            WHERE id_tema = $2
        "#,
    )
    .bind(nombre)
    .bind(id_tema)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E>(executor: E, id_tema: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM temas WHERE id_tema = $1
        "#,
    )
    .bind(id_tema)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Resolve topic names to ids. Names with no matching row are simply absent
/// from the result, so the returned set may be smaller than the input, or
/// empty.
pub async fn find_ids_by_names<'e, E>(
    executor: E,
    nombres: &[String],
) -> Result<Vec<i64>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT id_tema
            FROM temas
            WHERE tema = ANY($1)
        "#,
    )
    .bind(nombres)
    .fetch_all(executor)
    .await
}
