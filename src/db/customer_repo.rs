// src/db/customer_repo.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        filters::{push_list_predicates, push_page, FilterColumns},
        ListSource,
    },
    models::{customer::Customer, list::ListQuery},
};

const CUSTOMER_COLUMNS: &str =
    "cu.id, cu.name, cu.email, cu.phone, cu.tier, cu.registered_at, cu.order_count, cu.total_spent";

const CUSTOMER_FILTERS: FilterColumns = FilterColumns {
    search: &["cu.name", "cu.email", "cu.phone"],
    facet: "cu.tier",
};

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers cu WHERE cu.id = $1"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ListSource for CustomerRepository {
    type Record = Customer;

    #[tracing::instrument(skip(self))]
    async fn fetch_page(&self, query: &ListQuery) -> Result<Vec<Customer>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers cu"
        ));
        push_list_predicates(&mut qb, &CUSTOMER_FILTERS, query);
        push_page(&mut qb, "cu.registered_at DESC", "cu.id", query);

        let customers = qb.build_query_as::<Customer>().fetch_all(&self.pool).await?;
        Ok(customers)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self, query: &ListQuery) -> Result<u64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM customers cu");
        push_list_predicates(&mut qb, &CUSTOMER_FILTERS, query);

        let total: i64 = qb.build_query_scalar::<i64>().fetch_one(&self.pool).await?;
        Ok(total.max(0) as u64)
    }
}
