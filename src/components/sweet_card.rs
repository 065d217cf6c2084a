//! Sweet Card Component
//!
//! One catalog entry with purchase controls, plus restock/delete for admins.
//! Every successful action triggers a full catalog reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::use_api;
use crate::catalog::{self, StockLevel};
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Sweet;

/// Default restock amount offered to admins
const DEFAULT_RESTOCK: u32 = 10;

/// Parse a quantity input, clamping to at least one
pub fn parse_qty(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

#[component]
pub fn SweetCard(sweet: Sweet, #[prop(into)] is_admin: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();

    let (purchase_qty, set_purchase_qty) = signal(1u32);
    let (restock_qty, set_restock_qty) = signal(DEFAULT_RESTOCK);
    let (busy, set_busy) = signal(false);

    let stock = StockLevel::of(sweet.quantity);
    let available = sweet.quantity;
    let over_limit = move || purchase_qty.get() > available;
    let sweet = StoredValue::new(sweet);

    let on_purchase = {
        let api = api.clone();
        move |_: web_sys::MouseEvent| {
            let api = api.clone();
            let qty = purchase_qty.get_untracked();
            let item = sweet.get_value();
            set_busy.set(true);
            spawn_local(async move {
                match catalog::purchase(&api, &item, qty).await {
                    Ok(_) => {
                        ctx.success(format!("🎉 Purchased {} × {}. Enjoy!", qty, item.name));
                        ctx.reload();
                    }
                    Err(e) => ctx.report("Purchase", &e),
                }
                set_busy.try_set(false);
            });
        }
    };

    let on_restock = {
        let api = api.clone();
        move |_: web_sys::MouseEvent| {
            let api = api.clone();
            let qty = restock_qty.get_untracked();
            let id = sweet.with_value(|s| s.id);
            set_busy.set(true);
            spawn_local(async move {
                match catalog::restock(&api, id, qty).await {
                    Ok(_) => {
                        ctx.success("🔄 Restocked. Inventory updated.");
                        ctx.reload();
                    }
                    Err(e) => ctx.report("Restock", &e),
                }
                set_busy.try_set(false);
            });
        }
    };

    let on_delete = Callback::new(move |_: ()| {
        let api = api.clone();
        let id = sweet.with_value(|s| s.id);
        set_busy.set(true);
        spawn_local(async move {
            match api.delete_sweet(id).await {
                Ok(()) => {
                    ctx.success("🗑 Sweet deleted.");
                    ctx.reload();
                }
                Err(e) => ctx.report("Delete", &e),
            }
            set_busy.try_set(false);
        });
    });

    let (id, name, category, price) = sweet.with_value(|s| (s.id, s.name.clone(), s.category, s.price));
    let link_label = name.clone();

    view! {
        <article class="sweet-card">
            <header class="sweet-card-header">
                <span class="category-icon">{category.icon()}</span>
                <div>
                    <A href=format!("/private/sweet/{}", id) attr:class="sweet-name">{link_label}</A>
                    <span class="category-label">{category.as_str()}</span>
                </div>
                <span class="price">{format!("${:.2}", price)}</span>
            </header>

            <div class=stock.css_class()>
                <span>{stock.label()}</span>
                <span class="stock-count">{format!("{} units", available)}</span>
            </div>

            <div class="purchase-row">
                <input
                    type="number"
                    min="1"
                    max=available.to_string()
                    prop:value=move || purchase_qty.get().to_string()
                    disabled=available == 0
                    on:input=move |ev| set_purchase_qty.set(parse_qty(&event_target_value(&ev)))
                />
                <button
                    class="buy-btn"
                    disabled=move || available == 0 || over_limit() || busy.get()
                    on:click=on_purchase
                >
                    {if available == 0 { "Sold Out" } else { "Add to Cart" }}
                </button>
            </div>
            <Show when=move || { available > 0 && over_limit() }>
                <p class="hint">{format!("Only {} units available", available)}</p>
            </Show>

            <Show when=move || is_admin.get()>
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
            </Show>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qty_clamps() {
        assert_eq!(parse_qty("3"), 3);
        assert_eq!(parse_qty("0"), 1);
        assert_eq!(parse_qty(""), 1);
        assert_eq!(parse_qty("-2"), 1);
    }
}
