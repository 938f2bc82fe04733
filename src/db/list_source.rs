// src/db/list_source.rs

use async_trait::async_trait;

use crate::{common::error::AppError, models::list::ListQuery};

/// Fonte de uma listagem paginada: uma página limitada e a contagem total
/// dos registros que batem com os mesmos filtros.
///
/// As duas chamadas não compartilham snapshot; uma escrita concorrente entre
/// elas pode deixar página e total momentaneamente inconsistentes.
#[async_trait]
pub trait ListSource: Send + Sync {
    type Record: Send;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Vec<Self::Record>, AppError>;

    async fn count(&self, query: &ListQuery) -> Result<u64, AppError>;
}
