// src/db/filters.rs

use sqlx::{Postgres, QueryBuilder};

use crate::models::list::ListQuery;

/// Colunas que uma listagem usa para busca livre e para o filtro categórico.
#[derive(Debug, Clone, Copy)]
pub struct FilterColumns {
    pub search: &'static [&'static str],
    pub facet: &'static str,
}

// Escapa os curingas do LIKE para a busca ser literal.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Acrescenta o WHERE da listagem. Página e contagem chamam esta mesma
/// função, então os predicados são sempre idênticos.
pub fn push_list_predicates(
    qb: &mut QueryBuilder<'_, Postgres>,
    columns: &FilterColumns,
    query: &ListQuery,
) {
    qb.push(" WHERE TRUE");

    if let Some(search) = query.search.as_deref() {
        let pattern = like_pattern(search);
        qb.push(" AND (");
        for (i, column) in columns.search.iter().enumerate() {
            if i > 0 {
                qb.push(" OR ");
            }
            qb.push(*column).push(" ILIKE ").push_bind(pattern.clone());
        }
        qb.push(")");
    }

    if let Some(facet) = query.facet.as_deref() {
        qb.push(" AND ")
            .push(columns.facet)
            .push(" = ")
            .push_bind(facet.to_string());
    }
}

/// `key` precisa ser única (a PK): com empates em `order_by` o OFFSET
/// repetiria ou pularia linhas entre páginas.
pub fn push_page(
    qb: &mut QueryBuilder<'_, Postgres>,
    order_by: &str,
    key: &str,
    query: &ListQuery,
) {
    qb.push(" ORDER BY ")
        .push(order_by)
        .push(", ")
        .push(key)
        .push(" LIMIT ")
        .push_bind(query.limit)
        .push(" OFFSET ")
        .push_bind(query.offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: FilterColumns = FilterColumns {
        search: &["o.customer_name", "o.id::text"],
        facet: "o.status",
    };

    fn where_clause(sql: &str) -> &str {
        let start = sql.find(" WHERE").unwrap();
        let end = sql.find(" ORDER BY").unwrap_or(sql.len());
        &sql[start..end]
    }

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("ana"), "%ana%");
    }

    #[test]
    fn page_and_count_share_predicates() {
        let query = ListQuery {
            search: Some("ana".into()),
            facet: Some("pending".into()),
            limit: 10,
            offset: 20,
        };

        let mut page = QueryBuilder::<Postgres>::new("SELECT * FROM orders o");
        push_list_predicates(&mut page, &COLUMNS, &query);
        push_page(&mut page, "o.order_date DESC", "o.id", &query);

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM orders o");
        push_list_predicates(&mut count, &COLUMNS, &query);

        assert_eq!(where_clause(page.sql()), where_clause(count.sql()));
        assert!(page.sql().contains("o.customer_name ILIKE $1 OR o.id::text ILIKE $2"));
        assert!(page.sql().contains("o.status = $3"));
        assert!(page.sql().ends_with("LIMIT $4 OFFSET $5"));
    }

    #[test]
    fn page_order_ends_with_unique_key() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM products p");
        push_list_predicates(&mut qb, &COLUMNS, &ListQuery::default());
        push_page(&mut qb, "p.name ASC", "p.id", &ListQuery::default());
        assert!(qb.sql().ends_with(" ORDER BY p.name ASC, p.id LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn no_filters_means_no_binds() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM customers cu");
        push_list_predicates(&mut qb, &COLUMNS, &ListQuery::default());
        assert_eq!(qb.sql(), "SELECT COUNT(*) FROM customers cu WHERE TRUE");
    }
}
