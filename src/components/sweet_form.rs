//! Sweet Form Component
//!
//! Shared add/edit form. Validates input into a `SweetDraft` before handing
//! it to the page.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Category, SweetDraft};

/// Raw field values as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweetFields {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl From<&SweetDraft> for SweetFields {
    fn from(draft: &SweetDraft) -> Self {
        Self {
            name: draft.name.clone(),
            category: draft.category.as_str().to_string(),
            price: draft.price.to_string(),
            quantity: draft.quantity.to_string(),
        }
    }
}

impl SweetFields {
    pub fn to_draft(&self) -> crate::error::AppResult<SweetDraft> {
        SweetDraft::from_form(&self.name, &self.category, &self.price, &self.quantity)
    }
}

#[component]
pub fn SweetForm(
    /// Starting values (empty for a new sweet)
    initial: SweetFields,
    #[prop(into)] submit_label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_submit: Callback<SweetDraft>,
) -> impl IntoView {
    let ctx = use_app_context();
    let fields = RwSignal::new(initial.clone());
    let changed = Memo::new(move |_| fields.with(|f| *f != initial));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match fields.with_untracked(SweetFields::to_draft) {
            Ok(draft) => on_submit.run(draft),
            Err(e) => ctx.report("Save", &e),
        }
    };

    view! {
        <form class="sweet-form" on:submit=submit>
            <label>
                "Sweet Name"
                <input
                    type="text"
                    required
                    placeholder="Enter a delicious name for your sweet..."
                    prop:value=move || fields.with(|f| f.name.clone())
                    on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                />
            </label>

            <fieldset class="category-picker">
                <legend>"Category"</legend>
                {Category::ALL.into_iter().map(|category| {
                    let value = category.as_str();
                    view! {
                        <label class="category-option">
                            <input
                                type="radio"
                                name="category"
                                value=value
                                prop:checked=move || fields.with(|f| f.category == value)
                                on:change=move |_| fields.update(|f| f.category = value.to_string())
                            />
                            <span>{category.icon()} " " {value}</span>
                        </label>
                    }
                }).collect_view()}
            </fieldset>

            <label>
                "Price ($)"
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    required
                    prop:value=move || fields.with(|f| f.price.clone())
                    on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
                />
            </label>

            <label>
                "Quantity"
                <input
                    type="number"
                    min="0"
                    required
                    prop:value=move || fields.with(|f| f.quantity.clone())
                    on:input=move |ev| fields.update(|f| f.quantity = event_target_value(&ev))
                />
            </label>

            <div class="form-actions">
                <Show when=move || changed.get()>
                    <span class="unsaved-hint">"Unsaved changes"</span>
                </Show>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving...".to_string() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_round_trip_through_draft() {
        let draft = SweetDraft {
            name: "Eclair".to_string(),
            category: Category::Pastry,
            price: 2.25,
            quantity: 8,
        };
        let fields = SweetFields::from(&draft);
        assert_eq!(fields.category, "Pastry");
        assert_eq!(fields.to_draft().unwrap(), draft);
    }

    #[test]
    fn test_blank_fields_do_not_validate() {
        assert!(SweetFields::default().to_draft().is_err());
    }
}
