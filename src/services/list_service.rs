// src/services/list_service.rs

use crate::{
    common::{error::AppError, pagination::WindowConfig},
    db::ListSource,
    models::list::{ListFilters, ListPage},
};

/// Busca a página e a contagem (em paralelo) com os mesmos filtros.
pub async fn fetch_list<S>(
    source: &S,
    filters: &ListFilters,
    window: WindowConfig,
) -> Result<ListPage<S::Record>, AppError>
where
    S: ListSource + ?Sized,
{
    let query = filters.to_query();
    let (items, total) = tokio::join!(source.fetch_page(&query), source.count(&query));
    Ok(ListPage::new(items?, filters, total?, window))
}

/// Carga de fundo de uma listagem: qualquer falha é logada e vira lista vazia.
/// Não há nova tentativa; o próximo refresh é disparado pelo usuário.
pub async fn load_list<S>(source: &S, filters: &ListFilters, window: WindowConfig) -> ListPage<S::Record>
where
    S: ListSource + ?Sized,
{
    match fetch_list(source, filters, window).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(error = %e, page = filters.page(), "Falha ao carregar listagem; exibindo vazia");
            ListPage::empty(filters)
        }
    }
}

/// Identifica uma requisição emitida por um `ListController`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub generation: u64,
}

/// Sessão de uma view de listagem: filtros, contador de geração e a última
/// página aplicada.
///
/// Cada refresh recebe uma geração nova; uma resposta só é aplicada se a sua
/// geração ainda for a última emitida, então uma busca antiga que resolve
/// depois de uma troca de filtro é descartada.
pub struct ListController<R> {
    filters: ListFilters,
    window: WindowConfig,
    generation: u64,
    current: ListPage<R>,
    loading: bool,
}

impl<R> ListController<R> {
    pub fn new(filters: ListFilters, window: WindowConfig) -> Self {
        let current = ListPage::empty(&filters);
        Self {
            filters,
            window,
            generation: 0,
            current,
            loading: false,
        }
    }

    pub fn filters(&self) -> &ListFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut ListFilters {
        &mut self.filters
    }

    pub fn current(&self) -> &ListPage<R> {
        &self.current
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    pub fn begin_refresh(&mut self) -> (RefreshTicket, ListFilters) {
        self.generation += 1;
        self.loading = true;
        (
            RefreshTicket {
                generation: self.generation,
            },
            self.filters.clone(),
        )
    }

    /// Aplica o resultado se o ticket for o mais recente. Retorna `false`
    /// quando o resultado é obsoleto e foi descartado.
    pub fn apply(&mut self, ticket: RefreshTicket, page: ListPage<R>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                latest = self.generation,
                "Descartando resultado obsoleto"
            );
            return false;
        }
        self.current = page;
        self.loading = false;
        true
    }

    pub async fn refresh<S>(&mut self, source: &S) -> bool
    where
        S: ListSource<Record = R> + ?Sized,
    {
        let (ticket, filters) = self.begin_refresh();
        let page = load_list(source, &filters, self.window).await;
        self.apply(ticket, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::list::ListQuery;
    use async_trait::async_trait;

    struct Numbers(Vec<u32>);

    #[async_trait]
    impl ListSource for Numbers {
        type Record = u32;

        async fn fetch_page(&self, query: &ListQuery) -> Result<Vec<u32>, AppError> {
            Ok(self
                .0
                .iter()
                .copied()
                .skip(query.offset as usize)
                .take(query.limit as usize)
                .collect())
        }

        async fn count(&self, _query: &ListQuery) -> Result<u64, AppError> {
            Ok(self.0.len() as u64)
        }
    }

    struct Broken;

    #[async_trait]
    impl ListSource for Broken {
        type Record = u32;

        async fn fetch_page(&self, _query: &ListQuery) -> Result<Vec<u32>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
        }

        async fn count(&self, _query: &ListQuery) -> Result<u64, AppError> {
            Ok(42)
        }
    }

    #[tokio::test]
    async fn loads_bounded_page_with_total() {
        let source = Numbers((1..=25).collect());
        let mut filters = ListFilters::new(10);
        filters.set_page(3);

        let page = load_list(&source, &filters, WindowConfig::COMPACT).await;
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[tokio::test]
    async fn failure_degrades_to_empty_page() {
        let filters = ListFilters::new(10);
        let page = load_list(&Broken, &filters, WindowConfig::COMPACT).await;
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert!(page.pages.is_empty());
    }

    #[tokio::test]
    async fn fetch_list_propagates_errors() {
        let filters = ListFilters::new(10);
        assert!(fetch_list(&Broken, &filters, WindowConfig::COMPACT).await.is_err());
    }

    #[tokio::test]
    async fn stale_result_is_discarded() {
        let source = Numbers((1..=30).collect());
        let mut controller = ListController::new(ListFilters::new(10), WindowConfig::COMPACT);

        controller.filters_mut().set_page(3);
        let (old_ticket, old_filters) = controller.begin_refresh();

        controller.filters_mut().set_search("x");
        let (new_ticket, new_filters) = controller.begin_refresh();

        let new_page = load_list(&source, &new_filters, WindowConfig::COMPACT).await;
        assert!(controller.apply(new_ticket, new_page));

        // A busca antiga resolve por último e não sobrescreve a nova.
        let old_page = load_list(&source, &old_filters, WindowConfig::COMPACT).await;
        assert!(!controller.apply(old_ticket, old_page));

        assert_eq!(controller.current().pagination.page, 1);
        assert_eq!(controller.current().items.first(), Some(&1));
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn refresh_applies_latest_result() {
        let source = Numbers((1..=12).collect());
        let mut controller = ListController::new(ListFilters::new(5), WindowConfig::COMPACT);
        controller.filters_mut().set_page(3);

        assert!(controller.refresh(&source).await);
        assert_eq!(controller.current().items, vec![11, 12]);
        assert_eq!(controller.latest_generation(), 1);
    }
}
