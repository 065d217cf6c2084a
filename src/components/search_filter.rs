//! Search & Filter Component
//!
//! Raw form fields for the catalog filter; the parent turns them into a
//! `FilterSpec`.

use leptos::prelude::*;

use crate::catalog::FilterSpec;
use crate::models::Category;

/// Raw filter inputs, kept as typed text
#[derive(Clone, Copy)]
pub struct FilterForm {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub min_price: RwSignal<String>,
    pub max_price: RwSignal<String>,
}

impl FilterForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            min_price: RwSignal::new(String::new()),
            max_price: RwSignal::new(String::new()),
        }
    }

    /// Current filter (tracks all four fields)
    pub fn spec(&self) -> FilterSpec {
        FilterSpec::from_form(
            &self.name.get(),
            &self.category.get(),
            &self.min_price.get(),
            &self.max_price.get(),
        )
    }

    pub fn clear(&self) {
        self.name.set(String::new());
        self.category.set(String::new());
        self.min_price.set(String::new());
        self.max_price.set(String::new());
    }
}

#[component]
pub fn SearchFilter(form: FilterForm) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let active = Memo::new(move |_| form.spec().active_count());

    view! {
        <section class="search-filter">
            <div class="search-header">
                <h3>"Search & Filter"</h3>
                <Show when=move || { active.get() > 0 }>
                    <span class="filter-badge">{move || format!("{} active", active.get())}</span>
                </Show>
                <button class="expand-btn" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                    {move || if expanded.get() { "▲" } else { "▼" }}
                </button>
            </div>

            <input
                type="text"
                class="search-input"
                placeholder="Search for sweets by name..."
                prop:value=move || form.name.get()
                on:input=move |ev| form.name.set(event_target_value(&ev))
            />

            <Show when=move || expanded.get()>
                <div class="category-grid">
                    {Category::ALL.into_iter().map(|category| {
                        let value = category.as_str();
                        let is_selected = move || form.category.get() == value;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                                on:click=move |_| {
                                    // Clicking the selected category clears it
                                    let next = if is_selected() { String::new() } else { value.to_string() };
                                    form.category.set(next);
                                }
                            >
                                <span class="category-icon">{category.icon()}</span>
                                {value}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="price-range">
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="Min price"
                        prop:value=move || form.min_price.get()
                        on:input=move |ev| form.min_price.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="Max price"
                        prop:value=move || form.max_price.get()
                        on:input=move |ev| form.max_price.set(event_target_value(&ev))
                    />
                </div>

                <div class="quick-actions">
                    <button type="button" on:click=move |_| form.category.set("Chocolate".to_string())>
                        "🍫 Chocolates"
                    </button>
                    <button type="button" on:click=move |_| {
                        form.min_price.set(String::new());
                        form.max_price.set("5".to_string());
                    }>
                        "💰 Under $5"
                    </button>
                    <button type="button" on:click=move |_| {
                        form.clear();
                        set_expanded.set(false);
                    }>
                        "🗑 Clear"
                    </button>
                </div>
            </Show>
        </section>
    }
}
