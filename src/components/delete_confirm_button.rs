//! Delete Confirm Button Component
//!
//! Inline delete confirmation: a delete button that turns into confirm/cancel.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `item_name` - Shown in the confirmation prompt
/// * `busy` - Disables the confirm button while the request is in flight
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] item_name: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "🗑 Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {format!("Delete \"{}\"? This cannot be undone.", item_name)}
                </span>
                <button
                    class="confirm-btn"
                    disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
