//! Sweet List Page
//!
//! Catalog view: fetch (list or search), then compose locally with the
//! current filter and sort. Reloads on every `AppContext::reload`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::use_api;
use crate::catalog::{load_sweets, ListPhase, RequestSequencer, SortKey, ViewMode};
use crate::components::{FilterForm, SearchFilter, SweetCard};
use crate::context::use_app_context;
use crate::session::use_session;
use crate::store::{
    store_begin_load, store_catalog_stats, store_display_list, store_finish_load, store_set_catalog,
    store_toggle_sort, CatalogState, CatalogStateStoreFields,
};

#[component]
pub fn SweetList() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let auth = use_session().state();
    let is_admin = Signal::derive(move || auth.get().is_admin);

    let store = Store::new(CatalogState::default());
    let form = FilterForm::new();
    let sequencer = RequestSequencer::new();
    let catalog_sequencer = RequestSequencer::new();

    // Only push real filter changes into the store
    let filter = Memo::new(move |_| form.spec());
    Effect::new(move |_| {
        let next = filter.get();
        if store.filter().with_untracked(|current| *current != next) {
            store.filter().set(next);
        }
    });

    let catalog_api = api.clone();

    // Fetch on mount, on filter change and on reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let filter = store.filter().get();
        log::debug!("[SweetList] loading, trigger={}, filters={}", trigger, filter.active_count());
        store_begin_load(&store);
        let ticket = sequencer.issue();
        let sequencer = sequencer.clone();
        let api = api.clone();
        spawn_local(async move {
            let result = load_sweets(&api, &filter).await;
            let current = sequencer.is_current(ticket);
            if let (true, Err(e)) = (current, &result) {
                ctx.report("Loading sweets", e);
            }
            store_finish_load(&store, current, ticket, &filter, result);
        });
    });

    // A filtered reload leaves the totals stale; refresh them from the full listing
    Effect::new(move |_| {
        ctx.reload_trigger.track();
        if store.filter().with_untracked(|f| f.is_empty()) {
            return;
        }
        let api = catalog_api.clone();
        let request = catalog_sequencer.latest(async move { api.list_sweets().await });
        spawn_local(async move {
            match request.await {
                Some(Ok(sweets)) => store_set_catalog(&store, sweets),
                Some(Err(e)) => log::warn!("[SweetList] catalog totals not refreshed: {}", e),
                None => {}
            }
        });
    });

    let shown = Memo::new(move |_| store_display_list(&store));
    let stats = Memo::new(move |_| store_catalog_stats(&store));
    let filters_active = move || store.filter().with(|f| !f.is_empty());

    let sort_bar = move || {
        SortKey::ALL.into_iter().map(|key| {
            let class = move || {
                if store.sort().get().key == key { "sort-btn active" } else { "sort-btn" }
            };
            view! {
                <button class=class on:click=move |_| store_toggle_sort(&store, key)>
                    {key.label()} " " {move || store.sort().get().indicator(key)}
                </button>
            }
        }).collect_view()
    };

    let view_toggle = move |mode: ViewMode, label: &'static str| {
        view! {
            <button
                class=move || if store.view_mode().get() == mode { "view-btn active" } else { "view-btn" }
                on:click=move |_| store.view_mode().set(mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="sweet-list-page">
            <header class="page-header">
                <h1>"Discover Our Sweet Treasures"</h1>
                <p>{move || format!("Explore {} exquisite sweets crafted to satisfy your cravings.", stats.get().total)}</p>
            </header>

            <div class="controls-bar" class:busy=move || store.phase().with(ListPhase::is_loading)>
                <div class="view-toggle">
                    {view_toggle(ViewMode::Grid, "⬜ Grid")}
                    {view_toggle(ViewMode::List, "📋 List")}
                </div>
                <div class="sort-bar">
                    <span>"Sort by:"</span>
                    {sort_bar}
                </div>
            </div>

            <SearchFilter form=form />

            {move || match store.phase().get() {
                ListPhase::Loading => view! {
                    <div class="loading">"Loading sweets..."</div>
                }.into_any(),
                ListPhase::Error(message) => view! {
                    <div class="load-error">
                        <p>{message}</p>
                        <button on:click=move |_| ctx.reload()>"↻ Try again"</button>
                    </div>
                }.into_any(),
                ListPhase::Ready => view! {
                    <p class="results-count">
                        {move || format!("Showing {} of {} sweets", shown.get().len(), stats.get().total)}
                    </p>
                    <Show when=move || !shown.get().is_empty()>
                        <div class=move || store.view_mode().get().css_class()>
                            <For
                                each=move || shown.get()
                                key=|s| (s.id, s.quantity, s.price.to_bits(), s.name.clone(), s.category)
                                children=move |sweet| view! { <SweetCard sweet=sweet is_admin=is_admin /> }
                            />
                        </div>
                    </Show>
                    <Show when=move || shown.get().is_empty()>
                        <div class="empty-state">
                            <h3>"No sweets found"</h3>
                            {move || if filters_active() {
                                view! {
                                    <p>"Try adjusting your search filters or clear them to see all available sweets."</p>
                                    <button on:click=move |_| form.clear()>"🗑 Clear all filters"</button>
                                }.into_any()
                            } else {
                                view! {
                                    <p>"Our sweet collection is currently empty. Check back soon for new additions!"</p>
                                }.into_any()
                            }}
                        </div>
                    </Show>
                }.into_any(),
            }}

            <footer class="catalog-footer">
                <span>{move || format!("{} in stock", stats.get().in_stock)}</span>
                <span>{move || format!("{} categories", stats.get().category_count)}</span>
            </footer>
        </div>
    }
}
