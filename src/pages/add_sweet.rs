//! Add Sweet Page (admin only)

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::components::{AdminOnly, SweetFields, SweetForm};
use crate::context::use_app_context;
use crate::models::SweetDraft;

#[component]
pub fn AddSweet() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let navigate = use_navigate();
    let (busy, set_busy) = signal(false);
    let (created, set_created) = signal(None::<u64>);

    Effect::new(move |_| {
        if let Some(id) = created.get() {
            navigate(&format!("/private/sweet/{}", id), Default::default());
        }
    });

    let on_submit = Callback::new(move |draft: SweetDraft| {
        let api = api.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api.add_sweet(&draft).await {
                Ok(sweet) => {
                    log::info!("[AddSweet] created #{} {}", sweet.id, sweet.name);
                    ctx.success(format!("🎉 {} added to the collection!", sweet.name));
                    ctx.reload();
                    set_created.try_set(Some(sweet.id));
                }
                Err(e) => ctx.report("Add sweet", &e),
            }
            set_busy.try_set(false);
        });
    });

    view! {
        <AdminOnly>
            <div class="sweet-form-page">
                <header class="page-header">
                    <h1>"Add New Sweet"</h1>
                    <p>"Create a delicious new addition to the collection"</p>
                </header>
                <SweetForm
                    initial=SweetFields::default()
                    submit_label="➕ Add Sweet"
                    busy=busy
                    on_submit=on_submit
                />
            </div>
        </AdminOnly>
    }
}
