//! Sweet Details Page
//!
//! Single sweet with purchase, and restock/edit/delete for admins. Each
//! mutation re-fetches the sweet.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::use_api;
use crate::catalog::{self, ListPhase, RequestSequencer, StockLevel};
use crate::components::{parse_qty, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::error::AppError;
use crate::models::Sweet;
use crate::session::use_session;

/// Parse the `:id` route segment
pub fn parse_sweet_id(raw: Option<String>) -> Option<u64> {
    raw?.trim().parse().ok()
}

#[component]
pub fn SweetDetails() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let auth = use_session().state();
    let params = use_params_map();
    let navigate = use_navigate();

    let sweet_id = Memo::new(move |_| parse_sweet_id(params.with(|p| p.get("id"))));
    let sweet = RwSignal::new(None::<Sweet>);
    let phase = RwSignal::new(ListPhase::Loading);
    let (reload, set_reload) = signal(0u32);
    let (purchase_qty, set_purchase_qty) = signal(1u32);
    let (restock_qty, set_restock_qty) = signal(10u32);
    let (busy, set_busy) = signal(false);
    let sequencer = RequestSequencer::new();

    let load_api = api.clone();
    Effect::new(move |_| {
        reload.track();
        let Some(id) = sweet_id.get() else {
            // Supersede anything still in flight for the previous id
            sequencer.issue();
            phase.set(ListPhase::from_result::<()>(&Err(AppError::NotFound)));
            return;
        };
        phase.set(ListPhase::Loading);
        let api = load_api.clone();
        let request = sequencer.latest(async move { api.get_sweet(id).await });
        spawn_local(async move {
            let Some(result) = request.await else { return };
            phase.try_set(ListPhase::from_result(&result));
            match result {
                Ok(loaded) => {
                    sweet.try_set(Some(loaded));
                }
                Err(e) => ctx.report("Loading sweet", &e),
            }
        });
    });

    let purchase_api = api.clone();
    let on_purchase = move |_: web_sys::MouseEvent| {
        let Some(item) = sweet.get_untracked() else { return };
        let qty = purchase_qty.get_untracked();
        let api = purchase_api.clone();
        set_busy.set(true);
        spawn_local(async move {
            match catalog::purchase(&api, &item, qty).await {
                Ok(_) => {
                    ctx.success("🎉 Purchase successful! Enjoy your sweet treat!");
                    set_reload.try_update(|n| *n += 1);
                }
                Err(e) => ctx.report("Purchase", &e),
            }
            set_busy.try_set(false);
        });
    };

    let restock_api = api.clone();
    let on_restock = move |_: web_sys::MouseEvent| {
        let Some(id) = sweet_id.get_untracked() else { return };
        let qty = restock_qty.get_untracked();
        let api = restock_api.clone();
        set_busy.set(true);
        spawn_local(async move {
            match catalog::restock(&api, id, qty).await {
                Ok(_) => {
                    ctx.success("🔄 Restocked successfully! Inventory updated.");
                    set_reload.try_update(|n| *n += 1);
                }
                Err(e) => ctx.report("Restock", &e),
            }
            set_busy.try_set(false);
        });
    };

    let (deleted, set_deleted) = signal(false);
    Effect::new(move |_| {
        if deleted.get() {
            navigate("/private/sweets", Default::default());
        }
    });

    let on_delete = Callback::new(move |_: ()| {
        let Some(id) = sweet_id.get_untracked() else { return };
        let api = api.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api.delete_sweet(id).await {
                Ok(()) => {
                    ctx.success("🗑 Sweet deleted successfully!");
                    set_deleted.try_set(true);
                }
                Err(e) => ctx.report("Delete", &e),
            }
            set_busy.try_set(false);
        });
    });

    let details = move |item: Sweet| {
        let stock = StockLevel::of(item.quantity);
        let available = item.quantity;
        let id = item.id;
        let name = item.name.clone();
        let on_purchase = on_purchase.clone();
        let on_restock = on_restock.clone();
        view! {
            <article class="sweet-details">
                <header>
                    <span class="category-icon big">{item.category.icon()}</span>
                    <h1>{item.name.clone()}</h1>
                    <span class="category-label">{item.category.as_str()}</span>
                </header>
                <dl>
                    <dt>"Price"</dt>
                    <dd>{format!("${:.2}", item.price)}</dd>
                    <dt>"Stock"</dt>
                    <dd class=stock.css_class()>{format!("{} ({} units)", stock.label(), available)}</dd>
                </dl>

                <div class="purchase-row">
                    <input
                        type="number"
                        min="1"
                        max=available.to_string()
                        prop:value=move || purchase_qty.get().to_string()
                        on:input=move |ev| set_purchase_qty.set(parse_qty(&event_target_value(&ev)))
                    />
                    <button
                        class="buy-btn"
                        disabled=move || { available == 0 || purchase_qty.get() > available || busy.get() }
                        on:click=on_purchase
                    >
                        {move || if busy.get() { "Purchasing..." } else if available == 0 { "Sold Out" } else { "Purchase" }}
                    </button>
                </div>

                <Show when=move || auth.get().is_admin>
                    <section class="admin-panel">
                        <h3>"Admin actions"</h3>
                        <div class="admin-row">
                            <input
                                type="number"
                                min="1"
                                prop:value=move || restock_qty.get().to_string()
                                on:input=move |ev| set_restock_qty.set(parse_qty(&event_target_value(&ev)))
                            />
                            <button class="restock-btn" disabled=move || busy.get() on:click=on_restock.clone()>
                                "Restock"
                            </button>
                            <A href=format!("/private/update-sweet/{}", id) attr:class="edit-btn">"✏ Edit"</A>
                            <DeleteConfirmButton item_name=name.clone() busy=busy on_confirm=on_delete />
                        </div>
                    </section>
                </Show>
            </article>
        }
    };

    view! {
        <div class="sweet-details-page">
            <A href="/private/sweets" attr:class="back-link">"← Back to sweets"</A>
            {move || match (phase.get(), sweet.get()) {
                (ListPhase::Ready, Some(item)) => details(item).into_any(),
                (ListPhase::Error(message), _) => view! {
                    <div class="load-error">
                        <p>{message}</p>
                        <button on:click=move |_| set_reload.update(|n| *n += 1)>"↻ Try again"</button>
                    </div>
                }.into_any(),
                _ => view! { <div class="loading">"Loading sweet..."</div> }.into_any(),
            }}
        </div>
    }
}
