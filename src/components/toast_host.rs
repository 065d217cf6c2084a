//! Toast Host Component
//!
//! Renders the transient notifications held in `AppContext`.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
