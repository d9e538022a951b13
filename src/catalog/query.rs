//! Catalog Query Pipeline
//!
//! Pure transformation from `(full item list, query)` to one page of
//! results. No I/O, no mutation of inputs, safe to re-run; malformed
//! optional fields degrade to "does not match" instead of failing.

use super::models::CatalogItem;
use serde::{Deserialize, Serialize};

/// Page capacity used by the REST catalog view.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Price sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

/// The combined search/filter/sort/page parameters driving a catalog view.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    /// Case-insensitive substring over name and brand. Empty = no filter.
    pub search_text: String,
    /// Brand whitelist. Empty = all brands pass.
    pub brands: Vec<String>,
    /// Storage-variant filter, e.g. "256 GB". `None` = no filter.
    pub memory: Option<String>,
    /// Inclusive price bounds, `min <= max`.
    pub price_range: (f64, f64),
    pub sort: SortOrder,
    /// 1-based page index. Out-of-range values clamp to the last page.
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            brands: Vec::new(),
            memory: None,
            price_range: (0.0, f64::MAX),
            sort: SortOrder::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    /// The page actually served, after clamping.
    pub page: usize,
    /// Ceil of filtered count over page size; 0 when nothing matched.
    pub total_pages: usize,
    pub total_items: usize,
}

/// Normalizes a storage-variant string for exact comparison: internal
/// whitespace removed, lowercased ("256 GB" == "256gb").
fn normalize_memory(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Runs the full pipeline: text, brand, memory and price filters, then a
/// stable price sort, then pagination.
pub fn run_query(items: &[CatalogItem], query: &CatalogQuery) -> CatalogPage {
    let needle = query.search_text.trim().to_lowercase();
    let memory = query.memory.as_deref().map(normalize_memory);
    let (min_price, max_price) = query.price_range;

    let mut filtered: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.brand_or_empty().to_lowercase().contains(&needle)
        })
        .filter(|item| {
            query.brands.is_empty() || query.brands.iter().any(|b| b == item.brand_or_empty())
        })
        .filter(|item| match &memory {
            Some(wanted) => item
                .storage_spec()
                .is_some_and(|s| normalize_memory(s) == *wanted),
            None => true,
        })
        .filter(|item| item.price >= min_price && item.price <= max_price)
        .collect();

    // sort_by is stable: equal prices keep their pre-sort relative order,
    // which keeps pagination deterministic across re-runs.
    match query.sort {
        SortOrder::Asc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Desc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    let total_items = filtered.len();
    let page_size = query.page_size.max(1);
    let total_pages = total_items.div_ceil(page_size);
    let page = query.page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    CatalogPage {
        items,
        page,
        total_pages,
        total_items,
    }
}

/// Min/max price over the full list, used when the UI resets its price
/// filter. An empty list has no bounds; fall back to `(0, 0)`.
pub fn price_bounds(items: &[CatalogItem]) -> (f64, f64) {
    items.iter().fold(None, |acc, item| match acc {
        None => Some((item.price, item.price)),
        Some((lo, hi)) => Some((lo.min(item.price), hi.max(item.price))),
    })
    .unwrap_or((0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::PhoneSpecs;

    fn item(id: &str, brand: &str, price: f64, storage: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: format!("{} {}", brand, id),
            brand: Some(brand.into()),
            price,
            old_price: None,
            currency: None,
            description: None,
            image_url: None,
            installment: None,
            installment_count: None,
            specs: storage.map(|s| PhoneSpecs {
                storage: Some(s.into()),
                ..PhoneSpecs::default()
            }),
        }
    }

    #[test]
    fn text_filter_matches_name_and_brand_case_insensitively() {
        let items = vec![
            item("s23", "Samsung", 800.0, None),
            item("ip15", "Apple", 1000.0, None),
        ];
        let query = CatalogQuery {
            search_text: "SAMS".into(),
            ..CatalogQuery::default()
        };
        let page = run_query(&items, &query);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "s23");
    }

    #[test]
    fn missing_brand_never_matches_nonempty_query() {
        let mut no_brand = item("x", "Samsung", 500.0, None);
        no_brand.brand = None;
        no_brand.name = "Budget Phone".into();
        let query = CatalogQuery {
            search_text: "samsung".into(),
            ..CatalogQuery::default()
        };
        let page = run_query(&[no_brand], &query);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn memory_filter_normalizes_whitespace_and_case() {
        let items = vec![
            item("a", "Samsung", 700.0, Some("256 GB")),
            item("b", "Samsung", 700.0, Some("128 GB")),
            item("c", "Samsung", 700.0, None),
        ];
        let query = CatalogQuery {
            memory: Some("256gb".into()),
            ..CatalogQuery::default()
        };
        let page = run_query(&items, &query);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "a");
    }

    #[test]
    fn price_bounds_are_inclusive_both_ends() {
        let items = vec![
            item("lo", "A", 100.0, None),
            item("mid", "A", 500.0, None),
            item("hi", "A", 900.0, None),
        ];
        let query = CatalogQuery {
            price_range: (100.0, 900.0),
            ..CatalogQuery::default()
        };
        assert_eq!(run_query(&items, &query).items.len(), 3);

        let query = CatalogQuery {
            price_range: (100.01, 899.99),
            ..CatalogQuery::default()
        };
        assert_eq!(run_query(&items, &query).items.len(), 1);
    }

    #[test]
    fn sort_is_stable_for_equal_prices() {
        let items = vec![
            item("first", "A", 500.0, None),
            item("second", "B", 500.0, None),
            item("cheap", "C", 100.0, None),
        ];
        let asc = run_query(
            &items,
            &CatalogQuery {
                sort: SortOrder::Asc,
                ..CatalogQuery::default()
            },
        );
        let ids: Vec<&str> = asc.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["cheap", "first", "second"]);

        let desc = run_query(
            &items,
            &CatalogQuery {
                sort: SortOrder::Desc,
                ..CatalogQuery::default()
            },
        );
        let ids: Vec<&str> = desc.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "cheap"]);
    }

    #[test]
    fn pagination_boundary_thirteen_items_page_size_six() {
        let items: Vec<CatalogItem> = (0..13)
            .map(|n| item(&format!("p{n}"), "A", 100.0 + n as f64, None))
            .collect();
        let query = CatalogQuery {
            page: 3,
            page_size: 6,
            ..CatalogQuery::default()
        };
        let page = run_query(&items, &query);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);

        // Page 4 is out of range and clamps to the last valid page.
        let query = CatalogQuery { page: 4, ..query };
        let page = run_query(&items, &query);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn query_is_idempotent() {
        let items = vec![
            item("a", "Samsung", 800.0, Some("256 GB")),
            item("b", "Apple", 1200.0, Some("128 GB")),
            item("c", "Samsung", 600.0, None),
        ];
        let query = CatalogQuery {
            search_text: "sam".into(),
            price_range: (0.0, 2000.0),
            ..CatalogQuery::default()
        };
        let once = run_query(&items, &query);
        let twice = run_query(&once.items, &query);
        assert_eq!(once.items, twice.items);
    }

    #[test]
    fn empty_list_yields_empty_page_without_error() {
        let page = run_query(&[], &CatalogQuery::default());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert_eq!(price_bounds(&[]), (0.0, 0.0));
    }

    #[test]
    fn samsung_scenario_end_to_end() {
        // 10 items: 4 Apple, 6 Samsung.
        let mut items: Vec<CatalogItem> = (0..4)
            .map(|n| item(&format!("apple{n}"), "Apple", 900.0 + n as f64 * 50.0, None))
            .collect();
        for (n, price) in [1100.0, 700.0, 500.0, 900.0, 300.0, 1500.0].iter().enumerate() {
            items.push(item(&format!("sam{n}"), "Samsung", *price, None));
        }

        let query = CatalogQuery {
            brands: vec!["Samsung".into()],
            price_range: (0.0, 2000.0),
            sort: SortOrder::Asc,
            page: 1,
            page_size: 4,
            ..CatalogQuery::default()
        };
        let page1 = run_query(&items, &query);
        assert_eq!(page1.total_pages, 2);
        assert_eq!(page1.total_items, 6);
        let prices: Vec<f64> = page1.items.iter().map(|i| i.price).collect();
        assert_eq!(prices, [300.0, 500.0, 700.0, 900.0]);

        let page2 = run_query(&items, &CatalogQuery { page: 2, ..query });
        let prices: Vec<f64> = page2.items.iter().map(|i| i.price).collect();
        assert_eq!(prices, [1100.0, 1500.0]);
    }

    #[test]
    fn price_bounds_span_the_full_list() {
        let items = vec![
            item("a", "A", 250.0, None),
            item("b", "B", 1999.0, None),
            item("c", "C", 120.0, None),
        ];
        assert_eq!(price_bounds(&items), (120.0, 1999.0));
    }
}
