// src/db/dashboard_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::dashboard::{CategorySales, DateRange, PeriodTotals, SalesPoint, TopProductEntry},
};

// Pedidos cancelados nunca entram nas somas.
const COUNTED_ORDER: &str = "o.status <> 'cancelled'";

// Dia do pedido em UTC, o mesmo calendário de `DateRange`; `::date` puro
// usaria o fuso da sessão.
const ORDER_DAY: &str = "(o.order_date AT TIME ZONE 'UTC')::date";

// Primeiro comando da transação: vendas e visitas leem o mesmo snapshot.
const SNAPSHOT_ISOLATION: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY";

/// Pedidos contados cujo dia cai em `[$1, $2)`.
fn counted_in_range() -> String {
    format!("{COUNTED_ORDER} AND {ORDER_DAY} >= $1 AND {ORDER_DAY} < $2")
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Somas do período (vendas, pedidos, visitas)
    #[tracing::instrument(skip(self))]
    pub async fn period_totals(&self, range: DateRange) -> Result<PeriodTotals, AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(SNAPSHOT_ISOLATION).execute(&mut *tx).await?;

        let in_range = counted_in_range();

        let (total_sales, order_count): (Decimal, i64) = sqlx::query_as(&format!(
            r#"
            SELECT COALESCE(SUM(o.total), 0), COUNT(*)
            FROM orders o
            WHERE {in_range}
            "#
        ))
            .bind(range.start)
            .bind(range.end)
            .fetch_one(&mut *tx)
            .await?;

        let visits: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(visits), 0)::BIGINT
            FROM site_visits
            WHERE day >= $1 AND day < $2
            "#,
        )
            .bind(range.start)
            .bind(range.end)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(PeriodTotals {
            total_sales,
            order_count,
            visits,
        })
    }

    // 2. Série diária (dias sem venda aparecem com zero)
    #[tracing::instrument(skip(self))]
    pub async fn daily_sales(&self, range: DateRange) -> Result<Vec<SalesPoint>, AppError> {
        let points = sqlx::query_as::<_, SalesPoint>(&format!(
            r#"
            SELECT d::date AS day, COALESCE(SUM(o.total), 0) AS total
            FROM generate_series($1::date, $2::date - 1, INTERVAL '1 day') AS d
            LEFT JOIN orders o
              ON {ORDER_DAY} = d::date AND {COUNTED_ORDER}
            GROUP BY 1
            ORDER BY 1 ASC
            "#
        ))
            .bind(range.start)
            .bind(range.end)
            .fetch_all(&self.pool)
            .await?;
        Ok(points)
    }

    // 3. Participação de cada categoria nas vendas
    #[tracing::instrument(skip(self))]
    pub async fn sales_by_category(&self, range: DateRange) -> Result<Vec<CategorySales>, AppError> {
        let in_range = counted_in_range();
        let rows = sqlx::query_as::<_, CategorySales>(&format!(
            r#"
            SELECT COALESCE(c.name, 'Sin categoría') AS category_name,
                   SUM(oi.quantity * oi.unit_price) AS total
            FROM order_items oi
            JOIN orders o ON o.id = oi.order_id
            JOIN products p ON p.id = oi.product_id
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE {in_range}
            GROUP BY 1
            ORDER BY total DESC
            "#
        ))
            .bind(range.start)
            .bind(range.end)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    // 4. Curva ABC (Top produtos mais vendidos em Bs.)
    #[tracing::instrument(skip(self))]
    pub async fn top_products(&self, range: DateRange, limit: i64) -> Result<Vec<TopProductEntry>, AppError> {
        let in_range = counted_in_range();
        let rows = sqlx::query_as::<_, TopProductEntry>(&format!(
            r#"
            SELECT p.name AS product_name,
                   SUM(oi.quantity)::BIGINT AS total_quantity,
                   SUM(oi.quantity * oi.unit_price) AS total_revenue
            FROM order_items oi
            JOIN orders o ON o.id = oi.order_id
            JOIN products p ON p.id = oi.product_id
            WHERE {in_range}
            GROUP BY p.id, p.name
            ORDER BY total_revenue DESC
            LIMIT $3
            "#
        ))
            .bind(range.start)
            .bind(range.end)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
