//! Update Sweet Page (admin only)
//!
//! Loads the sweet, then reuses `SweetForm` prefilled with its values.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::use_api;
use crate::catalog::{ListPhase, RequestSequencer};
use crate::components::{AdminOnly, SweetFields, SweetForm};
use crate::context::use_app_context;
use crate::error::AppError;
use crate::models::{Sweet, SweetDraft};
use super::sweet_details::parse_sweet_id;

#[component]
pub fn UpdateSweet() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();

    let sweet_id = Memo::new(move |_| parse_sweet_id(params.with(|p| p.get("id"))));
    let loaded = RwSignal::new(None::<Sweet>);
    let phase = RwSignal::new(ListPhase::Loading);
    let (busy, set_busy) = signal(false);
    let (saved, set_saved) = signal(None::<u64>);
    let sequencer = RequestSequencer::new();

    let load_api = api.clone();
    Effect::new(move |_| {
        let Some(id) = sweet_id.get() else {
            // Supersede anything still in flight for the previous id
            sequencer.issue();
            phase.set(ListPhase::from_result::<()>(&Err(AppError::NotFound)));
            return;
        };
        let api = load_api.clone();
        phase.set(ListPhase::Loading);
        let request = sequencer.latest(async move { api.get_sweet(id).await });
        spawn_local(async move {
            let Some(result) = request.await else { return };
            phase.try_set(ListPhase::from_result(&result));
            match result {
                Ok(sweet) => {
                    loaded.try_set(Some(sweet));
                }
                Err(e) => ctx.report("Loading sweet", &e),
            }
        });
    });

    Effect::new(move |_| {
        if let Some(id) = saved.get() {
            navigate(&format!("/private/sweet/{}", id), Default::default());
        }
    });

    let on_submit = Callback::new(move |draft: SweetDraft| {
        let Some(id) = sweet_id.get_untracked() else { return };
        let api = api.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api.update_sweet(id, &draft).await {
                Ok(sweet) => {
                    ctx.success(format!("✅ {} updated successfully!", sweet.name));
                    ctx.reload();
                    set_saved.try_set(Some(id));
                }
                Err(e) => ctx.report("Update sweet", &e),
            }
            set_busy.try_set(false);
        });
    });

    view! {
        <AdminOnly>
            <div class="sweet-form-page">
                <header class="page-header">
                    <h1>"Update Sweet"</h1>
                    <p>"Refine the details of this treat"</p>
                </header>
                {move || match (phase.get(), loaded.get()) {
                    (ListPhase::Ready, Some(sweet)) => view! {
                        <SweetForm
                            initial=SweetFields::from(&SweetDraft::from(&sweet))
                            submit_label="💾 Save Changes"
                            busy=busy
                            on_submit=on_submit
                        />
                    }.into_any(),
                    (ListPhase::Error(message), _) => view! {
                        <div class="load-error"><p>{message}</p></div>
                    }.into_any(),
                    _ => view! { <div class="loading">"Loading sweet..."</div> }.into_any(),
                }}
            </div>
        </AdminOnly>
    }
}
