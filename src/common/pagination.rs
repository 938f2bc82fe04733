// src/common/pagination.rs

use serde::Serialize;
use utoipa::ToSchema;

/// Aritmética de paginação de uma listagem.
///
/// `page` é 1-based. `start`/`end` são índices (meio-abertos) sobre o total
/// de registros que batem com o filtro, e `end >= start` sempre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub start: u64,
    pub end: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let size = u64::from(page_size);

        let total_pages = total.div_ceil(size) as u32;
        // Página fora do intervalo gera uma janela vazia, nunca end < start.
        let start = (offset_for(page, page_size)).min(total);
        let end = (start + size).min(total);

        Self {
            page,
            page_size,
            total,
            total_pages,
            start,
            end,
        }
    }
}

/// offset = (page - 1) * pageSize
pub fn offset_for(page: u32, page_size: u32) -> u64 {
    u64::from(page.max(1) - 1) * u64::from(page_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageMarker {
    Page { number: u32 },
    Ellipsis,
}

impl PageMarker {
    pub fn page(number: u32) -> Self {
        PageMarker::Page { number }
    }
}

/// Constantes da janela de páginas: quantas páginas fixas no início e no
/// fim, e o raio em volta da página atual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub head: u32,
    pub tail: u32,
    pub radius: u32,
}

impl WindowConfig {
    /// Listagens de clientes e pedidos.
    pub const COMPACT: WindowConfig = WindowConfig {
        head: 1,
        tail: 1,
        radius: 1,
    };

    /// Listagem de produtos.
    pub const WIDE: WindowConfig = WindowConfig {
        head: 3,
        tail: 3,
        radius: 2,
    };

    // Abaixo deste total não existe lacuna que valha uma reticência.
    fn collapse_threshold(&self) -> u32 {
        self.head + self.tail + 2 * self.radius + 3
    }
}

pub fn page_window(current: u32, total_pages: u32, config: WindowConfig) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);

    if total_pages <= config.collapse_threshold() {
        return (1..=total_pages).map(PageMarker::page).collect();
    }

    let mut visible: Vec<u32> = Vec::new();
    visible.extend(1..=config.head.min(total_pages));
    visible.extend(current.saturating_sub(config.radius).max(1)..=(current + config.radius).min(total_pages));
    visible.extend(total_pages.saturating_sub(config.tail) + 1..=total_pages);
    visible.sort_unstable();
    visible.dedup();

    let mut markers = Vec::with_capacity(visible.len() + 2);
    let mut previous: Option<u32> = None;
    for page in visible {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                // Lacuna de uma página só: mostra a página em vez de "…".
                2 => markers.push(PageMarker::page(prev + 1)),
                _ => markers.push(PageMarker::Ellipsis),
            }
        }
        markers.push(PageMarker::page(page));
        previous = Some(page);
    }
    markers
}
