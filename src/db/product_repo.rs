// src/db/product_repo.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        filters::{push_list_predicates, push_page, FilterColumns},
        ListSource,
    },
    models::{
        list::ListQuery,
        product::{Product, ProductPayload, LOW_STOCK_THRESHOLD},
    },
};

// Sempre com o nome da categoria via LEFT JOIN
const PRODUCT_SELECT: &str = r#"
    SELECT p.id, p.name, p.description, p.category_id, c.name AS category_name,
           p.stock, p.price, p.discount, p.images
    FROM products p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

const PRODUCT_FILTERS: FilterColumns = FilterColumns {
    search: &["p.name", "p.description"],
    facet: "p.category_id::text",
};

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!("{PRODUCT_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    /// Produtos abaixo do limite de estoque baixo, os mais críticos primeiro.
    #[tracing::instrument(skip(self))]
    pub async fn low_stock(&self, limit: i64) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "{PRODUCT_SELECT} WHERE p.stock < $1 ORDER BY p.stock ASC, p.name ASC, p.id LIMIT $2"
        ))
            .bind(LOW_STOCK_THRESHOLD)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    #[tracing::instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &ProductPayload) -> Result<Product, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, description, category_id, stock, price, discount, images)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(payload.category_id)
            .bind(payload.stock)
            .bind(payload.price)
            .bind(payload.discount)
            .bind(&payload.images)
            .fetch_one(&self.pool)
            .await?;

        // Relê com o JOIN para devolver o nome da categoria
        self.find_by_id(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Produto {id} sumiu logo após o INSERT").into())
    }

    #[tracing::instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn update(&self, id: Uuid, payload: &ProductPayload) -> Result<Option<Product>, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, category_id = $4, stock = $5,
                price = $6, discount = $7, images = $8, updated_at = NOW()
            WHERE id = $1
            "#,
        )
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(payload.category_id)
            .bind(payload.stock)
            .bind(payload.price)
            .bind(payload.discount)
            .bind(&payload.images)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ListSource for ProductRepository {
    type Record = Product;

    #[tracing::instrument(skip(self))]
    async fn fetch_page(&self, query: &ListQuery) -> Result<Vec<Product>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(PRODUCT_SELECT);
        push_list_predicates(&mut qb, &PRODUCT_FILTERS, query);
        push_page(&mut qb, "p.name ASC", "p.id", query);

        let products = qb.build_query_as::<Product>().fetch_all(&self.pool).await?;
        Ok(products)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self, query: &ListQuery) -> Result<u64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM products p LEFT JOIN categories c ON c.id = p.category_id",
        );
        push_list_predicates(&mut qb, &PRODUCT_FILTERS, query);

        let total: i64 = qb.build_query_scalar::<i64>().fetch_one(&self.pool).await?;
        Ok(total.max(0) as u64)
    }
}
