//! Repository for the `templates` table.

use sqlx::PgPool;

use mesajkart_core::types::DbId;

use crate::models::template::{CreateTemplate, Template, TemplateListFilter, UpdateTemplate};

const COLUMNS: &str = "id, title, slug, audience, description, preview_url, \
     bg_audio_url, is_active, created_at, updated_at";

/// Provides CRUD operations for catalog templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    ///
    /// Caller is responsible for having validated title/slug/audience; the
    /// unique index on `slug` is the last line of defense against races.
    pub async fn create(pool: &PgPool, input: &CreateTemplate) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates \
                (title, slug, audience, description, preview_url, bg_audio_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.audience)
            .bind(&input.description)
            .bind(&input.preview_url)
            .bind(&input.bg_audio_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a template by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a template by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE slug = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List templates matching a filter, newest first, with page/limit
    /// pagination. Returns the page of rows and the total match count.
    pub async fn list(
        pool: &PgPool,
        filter: &TemplateListFilter,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Template>, i64), sqlx::Error> {
        let offset = (page - 1) * limit;

        let query = format!(
            "SELECT {COLUMNS} FROM templates \
             WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%') \
               AND ($2::text IS NULL OR audience = $2) \
               AND ($3::boolean IS NULL OR is_active = $3) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, Template>(&query)
            .bind(&filter.search)
            .bind(&filter.audience)
            .bind(filter.is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM templates \
             WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%') \
               AND ($2::text IS NULL OR audience = $2) \
               AND ($3::boolean IS NULL OR is_active = $3)",
        )
        .bind(&filter.search)
        .bind(&filter.audience)
        .bind(filter.is_active)
        .fetch_one(pool)
        .await?;

        Ok((rows, total))
    }

    /// Update a template. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "UPDATE templates SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                audience = COALESCE($4, audience), \
                description = COALESCE($5, description), \
                preview_url = COALESCE($6, preview_url), \
                bg_audio_url = COALESCE($7, bg_audio_url), \
                is_active = COALESCE($8, is_active), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.audience)
            .bind(&input.description)
            .bind(&input.preview_url)
            .bind(&input.bg_audio_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a template by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
