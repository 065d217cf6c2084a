//! Dashboard Page
//!
//! Inventory overview and quick actions for the signed-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::use_api;
use crate::catalog::{InventoryStats, ListPhase, RequestSequencer};
use crate::context::use_app_context;
use crate::session::use_session;

struct QuickAction {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    path: &'static str,
    admin_only: bool,
}

static QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Browse Sweets",
        description: "Explore our complete collection",
        icon: "📦",
        path: "/private/sweets",
        admin_only: false,
    },
    QuickAction {
        title: "Add New Sweet",
        description: "Create a new sweet entry",
        icon: "➕",
        path: "/private/add-sweet",
        admin_only: true,
    },
    QuickAction {
        title: "View Profile",
        description: "Manage your account settings",
        icon: "👤",
        path: "/private/profile",
        admin_only: false,
    },
];

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let auth = use_session().state();

    let stats = RwSignal::new(InventoryStats::default());
    let phase = RwSignal::new(ListPhase::Loading);
    let sequencer = RequestSequencer::new();

    Effect::new(move |_| {
        ctx.reload_trigger.track();
        let api = api.clone();
        phase.set(ListPhase::Loading);
        let request = sequencer.latest(async move { api.list_sweets().await });
        spawn_local(async move {
            let Some(result) = request.await else { return };
            phase.try_set(ListPhase::from_result(&result));
            match result {
                Ok(sweets) => {
                    stats.try_set(InventoryStats::from_sweets(&sweets));
                }
                Err(e) => ctx.report("Loading dashboard", &e),
            }
        });
    });

    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    let stat_card = move |icon: &'static str, label: &'static str, value: Signal<String>| {
        view! {
            <div class="stat-card">
                <span class="stat-icon">{icon}</span>
                <span class="stat-value">{move || value.get()}</span>
                <span class="stat-label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Welcome Back, " {user_name} "! 👋"</h1>
                <p>
                    {move || if auth.get().is_admin {
                        "Manage your sweet empire with powerful insights and controls"
                    } else {
                        "Discover amazing sweets and treats"
                    }}
                </p>
            </header>

            {move || match phase.get() {
                ListPhase::Loading => view! { <div class="loading">"Loading your dashboard..."</div> }.into_any(),
                ListPhase::Error(message) => view! {
                    <div class="load-error">
                        <p>{message}</p>
                        <button on:click=move |_| ctx.reload()>"↻ Try again"</button>
                    </div>
                }.into_any(),
                ListPhase::Ready => view! {
                    <section class="stats-grid">
                        {stat_card("🍬", "Total Sweets", Signal::derive(move || stats.get().total.to_string()))}
                        {stat_card("⚠", "Low Stock", Signal::derive(move || stats.get().low_stock.to_string()))}
                        {stat_card("🚫", "Out of Stock", Signal::derive(move || stats.get().out_of_stock.to_string()))}
                        {stat_card("💰", "Inventory Value", Signal::derive(move || format!("${:.2}", stats.get().total_value)))}
                        {stat_card("🏆", "Popular Category", Signal::derive(move || {
                            stats.get().popular_category.map(|c| c.as_str()).unwrap_or("None").to_string()
                        }))}
                    </section>
                }.into_any(),
            }}

            <section class="quick-actions">
                <h2>"Quick Actions"</h2>
                <div class="action-grid">
                    {QUICK_ACTIONS.iter().map(|action| {
                        let admin_only = action.admin_only;
                        view! {
                            <Show when=move || !admin_only || auth.get().is_admin>
                                <A href=action.path attr:class="action-card">
                                    <span class="action-icon">{action.icon}</span>
                                    <h3>{action.title}</h3>
                                    <p>{action.description}</p>
                                </A>
                            </Show>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
