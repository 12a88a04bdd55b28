//! Local search over rendered rows.

use labeldesk_flux::StateStore;

use crate::request::SearchReq;
use crate::state::*;

/// Mark each row visible iff its text contains `query`, ignoring case.
/// An empty query shows every row.
pub fn apply(query: &str, rows: &mut [ProductRow]) {
    let needle = query.to_lowercase();
    for row in rows {
        row.visible = needle.is_empty() || row.text.to_lowercase().contains(&needle);
    }
}

/// Handle `catalog/search`. No network access.
pub async fn handle_search(req: &SearchReq, store: &StateStore) {
    store.put(SearchState { query: req.query.clone() });
    if let Some(mut view) = store.read::<CatalogView>() {
        apply(&req.query, &mut view.rows);
        store.put(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::catalog::build_rows;
    use labeldesk_catalog::ProductRecord;

    fn rows() -> Vec<ProductRow> {
        build_rows(vec![ProductRecord::new("A1", "Laptop"), ProductRecord::new("B2", "Monitor")])
    }

    fn visible(rows: &[ProductRow]) -> Vec<&str> {
        rows.iter()
            .filter(|r| r.visible)
            .map(|r| r.record.inventory_number.as_str())
            .collect()
    }

    #[test]
    fn scenario_queries() {
        let mut rows = rows();
        apply("lap", &mut rows);
        assert_eq!(visible(&rows), vec!["A1"]);
        apply("2", &mut rows);
        assert_eq!(visible(&rows), vec!["B2"]);
        apply("", &mut rows);
        assert_eq!(visible(&rows), vec!["A1", "B2"]);
    }

    #[test]
    fn case_insensitive_and_idempotent() {
        let mut rows = rows();
        apply("MONI", &mut rows);
        let once = rows.clone();
        apply("MONI", &mut rows);
        assert_eq!(rows, once);
        assert_eq!(visible(&rows), vec!["B2"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let mut rows = rows();
        apply("printer", &mut rows);
        assert!(visible(&rows).is_empty());
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn search_before_load_only_stores_query() {
        let store = StateStore::new();
        handle_search(&SearchReq { query: "lap".into() }, &store).await;
        assert_eq!(store.read::<SearchState>().unwrap().query, "lap");
        assert!(store.read::<CatalogView>().is_none());
    }
}
