use proptest::prelude::*;

use tienda_admin::common::pagination::{page_window, PageMarker, Pagination, WindowConfig};

fn pages_of(markers: &[PageMarker]) -> Vec<u32> {
    markers
        .iter()
        .filter_map(|m| match m {
            PageMarker::Page { number } => Some(*number),
            PageMarker::Ellipsis => None,
        })
        .collect()
}

fn window_config() -> impl Strategy<Value = WindowConfig> {
    (1u32..4, 1u32..4, 0u32..3).prop_map(|(head, tail, radius)| WindowConfig { head, tail, radius })
}

proptest! {
    #[test]
    fn page_bounds_cover_total(total in 0u64..5_000, page_size in 1u32..100, page in 1u32..200) {
        let p = Pagination::new(page, page_size, total);

        prop_assert!(u64::from(p.total_pages) * u64::from(page_size) >= total);
        if total > 0 {
            prop_assert!(u64::from(p.total_pages - 1) * u64::from(page_size) < total);
        } else {
            prop_assert_eq!(p.total_pages, 0);
        }

        prop_assert!(p.end >= p.start);
        prop_assert!(p.end <= total);
        prop_assert!(p.end - p.start <= u64::from(page_size));
        if page <= p.total_pages {
            prop_assert!(p.end > p.start);
            prop_assert_eq!(p.start, u64::from(page - 1) * u64::from(page_size));
        }
    }

    #[test]
    fn window_is_ascending_and_anchored(
        total_pages in 1u32..300,
        current in 1u32..300,
        config in window_config(),
    ) {
        let markers = page_window(current, total_pages, config);
        let pages = pages_of(&markers);
        let current = current.min(total_pages);

        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total_pages));
        prop_assert!(pages.contains(&current));

        // Reticência nunca nas pontas nem duas seguidas
        prop_assert!(
            matches!(markers.first(), Some(PageMarker::Page { .. })),
            "first marker must be a page"
        );
        prop_assert!(
            matches!(markers.last(), Some(PageMarker::Page { .. })),
            "last marker must be a page"
        );
        prop_assert!(!markers
            .windows(2)
            .any(|w| w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis));

        let limit = config.head + config.tail + 2 * config.radius + 3;
        prop_assert!(markers.len() as u32 <= limit);
    }

    #[test]
    fn small_totals_show_every_page(total_pages in 1u32..=7, current in 1u32..=7) {
        let markers = page_window(current, total_pages, WindowConfig::COMPACT);
        prop_assert_eq!(pages_of(&markers), (1..=total_pages).collect::<Vec<_>>());
        prop_assert!(!markers.contains(&PageMarker::Ellipsis));
    }
}
