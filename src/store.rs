//! Catalog Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{compose, FilterSpec, InventoryStats, ListPhase, SortKey, SortSpec, Ticket, ViewMode};
use crate::error::AppResult;
use crate::models::Sweet;

/// Catalog list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Last backend-confirmed list
    pub sweets: Vec<Sweet>,
    /// Last unfiltered listing; headline counts come from here
    pub catalog: Vec<Sweet>,
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub phase: ListPhase,
    pub view_mode: ViewMode,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

// ========================
// Store Helper Functions
// ========================

/// Enter `Loading` before a fetch
pub fn store_begin_load(store: &CatalogStore) {
    store.phase().set(ListPhase::Loading);
}

/// Apply a fetch made with `filter`; stale tickets are dropped.
/// An unfiltered result also refreshes the catalog totals.
pub fn store_finish_load(
    store: &CatalogStore,
    current: bool,
    ticket: Ticket,
    filter: &FilterSpec,
    result: AppResult<Vec<Sweet>>,
) {
    if !current {
        log::debug!("[Catalog] discarding stale response {:?}", ticket);
        return;
    }
    // The page may be gone by the time the response lands
    store.phase().try_set(ListPhase::from_result(&result));
    if let Ok(sweets) = result {
        log::debug!("[Catalog] loaded {} sweets", sweets.len());
        if filter.is_empty() {
            store.catalog().try_set(sweets.clone());
        }
        store.sweets().try_set(sweets);
    }
}

/// Replace the catalog totals from a separate unfiltered fetch
pub fn store_set_catalog(store: &CatalogStore, sweets: Vec<Sweet>) {
    store.catalog().try_set(sweets);
}

/// Figures for the whole catalog, independent of the active filter
pub fn store_catalog_stats(store: &CatalogStore) -> InventoryStats {
    store.catalog().with(|sweets| InventoryStats::from_sweets(sweets))
}

/// Flip or switch the sort key
pub fn store_toggle_sort(store: &CatalogStore, key: SortKey) {
    store.sort().update(|sort| *sort = sort.toggle(key));
}

/// Display list derived from the current store contents
pub fn store_display_list(store: &CatalogStore) -> Vec<Sweet> {
    let filter = store.filter().get();
    let sort = store.sort().get();
    store.sweets().with(|sweets| compose(sweets, &filter, &sort))
}
