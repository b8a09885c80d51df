//! Repository for the `modules` table.

use sqlx::PgPool;

use cyberguard_core::types::DbId;

use crate::models::module::{CreateModule, Module};

const COLUMNS: &str = "id, title, description, category, difficulty, content, \
                        estimated_minutes, order_index, is_active, created_at";

/// Provides CRUD operations for training modules.
pub struct ModuleRepo;

impl ModuleRepo {
    /// Insert a new module, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateModule) -> Result<Module, sqlx::Error> {
        let query = format!(
            "INSERT INTO modules (title, description, category, difficulty, content,
                                  estimated_minutes, order_index, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.difficulty)
            .bind(&input.content)
            .bind(input.estimated_minutes)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a module by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modules WHERE id = $1");
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active modules ordered by their curriculum position.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modules WHERE is_active = TRUE ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Module>(&query).fetch_all(pool).await
    }

    /// Check whether a module with the given title already exists.
    pub async fn exists_by_title(pool: &PgPool, title: &str) -> Result<bool, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM modules WHERE title = $1)")
                .bind(title)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }
}
