// src/models/list.rs

use serde::Serialize;
use crate::common::pagination::{offset_for, page_window, PageMarker, Pagination, WindowConfig};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Estado dos filtros de uma listagem (busca, filtro categórico e página).
///
/// Qualquer setter que não seja o de página volta para a página 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilters {
    search: String,
    facet: Option<String>,
    page: u32,
    page_size: u32,
}

impl Default for ListFilters {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListFilters {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            facet: None,
            page: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn facet(&self) -> Option<&str> {
        self.facet.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_facet(&mut self, facet: Option<String>) {
        self.facet = facet;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Monta a consulta limitada. A busca só é aparada aqui, no uso.
    pub fn to_query(&self) -> ListQuery {
        let search = Some(self.search.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let facet = self
            .facet
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty() && *f != "all")
            .map(str::to_string);

        ListQuery {
            search,
            facet,
            limit: i64::from(self.page_size),
            offset: offset_for(self.page, self.page_size) as i64,
        }
    }
}

/// Consulta limitada enviada ao banco: mesmos predicados para página e contagem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub facet: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Uma página de registros + a paginação derivada do total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<R> {
    pub items: Vec<R>,
    pub pagination: Pagination,
    pub pages: Vec<PageMarker>,
}

impl<R> ListPage<R> {
    pub fn new(items: Vec<R>, filters: &ListFilters, total: u64, window: WindowConfig) -> Self {
        let pagination = Pagination::new(filters.page(), filters.page_size(), total);
        let pages = page_window(pagination.page, pagination.total_pages, window);
        Self {
            items,
            pagination,
            pages,
        }
    }

    pub fn empty(filters: &ListFilters) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::new(filters.page(), filters.page_size(), 0),
            pages: Vec::new(),
        }
    }

    pub fn map<T>(self, f: impl FnMut(R) -> T) -> ListPage<T> {
        ListPage {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_page() {
        let mut filters = ListFilters::new(10);
        filters.set_page(4);
        filters.set_search("ana");
        assert_eq!(filters.page(), 1);

        filters.set_page(3);
        filters.set_facet(Some("vip".into()));
        assert_eq!(filters.page(), 1);

        filters.set_page(2);
        assert_eq!(filters.page(), 2);
    }

    #[test]
    fn query_trims_search_and_drops_blank_values() {
        let mut filters = ListFilters::new(20);
        filters.set_search("  zapatos  ");
        filters.set_facet(Some("all".into()));
        filters.set_page(3);

        let query = filters.to_query();
        assert_eq!(query.search.as_deref(), Some("zapatos"));
        assert_eq!(query.facet, None);
        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 40);

        filters.set_search("   ");
        assert_eq!(filters.to_query().search, None);
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(ListFilters::new(0).page_size(), 1);
        assert_eq!(ListFilters::new(10_000).page_size(), MAX_PAGE_SIZE);
    }
}
