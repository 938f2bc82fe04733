// src/db/order_repo.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        filters::{push_list_predicates, push_page, FilterColumns},
        ListSource,
    },
    models::{list::ListQuery, order::{Order, OrderStatus}},
};

const ORDER_COLUMNS: &str = "o.id, o.customer_id, o.customer_name, o.order_date, o.total, o.status";

const ORDER_FILTERS: FilterColumns = FilterColumns {
    search: &["o.customer_name", "o.id::text"],
    facet: "o.status",
};

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders o WHERE o.id = $1"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(order)
    }

    // Últimos pedidos para o dashboard
    #[tracing::instrument(skip(self))]
    pub async fn recent(&self, limit: i64) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders o ORDER BY o.order_date DESC, o.id LIMIT $1"
        ))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, id: Uuid, status: &OrderStatus) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "UPDATE orders o SET status = $2 WHERE o.id = $1 RETURNING {ORDER_COLUMNS}"
        ))
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(order)
    }
}

#[async_trait]
impl ListSource for OrderRepository {
    type Record = Order;

    #[tracing::instrument(skip(self))]
    async fn fetch_page(&self, query: &ListQuery) -> Result<Vec<Order>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {ORDER_COLUMNS} FROM orders o"));
        push_list_predicates(&mut qb, &ORDER_FILTERS, query);
        push_page(&mut qb, "o.order_date DESC", "o.id", query);

        let orders = qb.build_query_as::<Order>().fetch_all(&self.pool).await?;
        Ok(orders)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self, query: &ListQuery) -> Result<u64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM orders o");
        push_list_predicates(&mut qb, &ORDER_FILTERS, query);

        let total: i64 = qb.build_query_scalar::<i64>().fetch_one(&self.pool).await?;
        Ok(total.max(0) as u64)
    }
}
