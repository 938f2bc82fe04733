pub mod catalog;
pub mod categories;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    models::list::{ListFilters, DEFAULT_PAGE_SIZE},
};

/// Aplica os parâmetros de query na ordem dos setters: filtros primeiro
/// (voltam para a página 1), página por último.
pub(crate) fn list_filters(
    search: Option<String>,
    facet: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> ListFilters {
    let mut filters = ListFilters::new(page_size.unwrap_or(DEFAULT_PAGE_SIZE));
    if let Some(search) = search {
        filters.set_search(search);
    }
    filters.set_facet(facet);
    if let Some(page) = page {
        filters.set_page(page);
    }
    filters
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfirmParams {
    /// Precisa ser `true` para a remoção acontecer
    #[serde(default)]
    pub confirm: bool,
}

impl ConfirmParams {
    pub(crate) fn require(&self, what: &str) -> Result<(), AppError> {
        if self.confirm {
            Ok(())
        } else {
            Err(AppError::ConfirmationRequired(what.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_page_survives_filter_reset() {
        let filters = list_filters(Some(" polera ".into()), Some("shipped".into()), Some(4), Some(20));
        assert_eq!(filters.page(), 4);
        assert_eq!(filters.page_size(), 20);
        assert_eq!(filters.to_query().search.as_deref(), Some("polera"));
        assert_eq!(filters.to_query().offset, 60);
    }

    #[test]
    fn delete_without_confirmation_is_refused() {
        assert!(matches!(
            ConfirmParams::default().require("el producto"),
            Err(AppError::ConfirmationRequired(_))
        ));
        assert!(ConfirmParams { confirm: true }.require("x").is_ok());
    }
}
