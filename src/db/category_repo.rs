// src/db/category_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::category::{Category, CategoryPayload},
};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, only_active: bool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, icon, display_order, active
            FROM categories
            WHERE ($1 = FALSE OR active = TRUE)
            ORDER BY display_order ASC, name ASC, id
            "#,
        )
            .bind(only_active)
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    #[tracing::instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &CategoryPayload) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, icon, display_order, active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, icon, display_order, active
            "#,
        )
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(&payload.icon)
            .bind(payload.display_order)
            .bind(payload.active)
            .fetch_one(&self.pool)
            .await?;
        Ok(category)
    }

    #[tracing::instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn update(&self, id: Uuid, payload: &CategoryPayload) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, description = $3, icon = $4, display_order = $5, active = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, icon, display_order, active
            "#,
        )
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(&payload.icon)
            .bind(payload.display_order)
            .bind(payload.active)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
