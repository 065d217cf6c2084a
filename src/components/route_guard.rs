//! Route Guard Components
//!
//! `RequireSession` wraps the protected route tree; `AdminOnly` narrows a page
//! to admins once the session is known.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::catalog::RequestSequencer;
use crate::context::{use_app_context, ToastKind};
use crate::guard::{check_access, Access, GuardPhase};
use crate::session::use_session;

/// Parent route view for `/private/*`
#[component]
pub fn RequireSession() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let (phase, set_phase) = signal(GuardPhase::Checking);
    let sequencer = RequestSequencer::new();

    // Every navigation into the protected tree restarts at Checking
    Effect::new(move |_| {
        location.pathname.track();
        set_phase.set(GuardPhase::Checking);
        let ticket = sequencer.issue();
        let sequencer = sequencer.clone();
        let session = session.clone();
        spawn_local(async move {
            let resolved = check_access(session.store(), Access::Session, ctx.guard_min_loading).await;
            if sequencer.is_current(ticket) {
                // Storage is the source of truth; pull memory back in line with it
                session.hydrate();
                set_phase.try_set(resolved);
            }
        });
    });

    Effect::new(move |_| {
        if let GuardPhase::Denied { redirect } = phase.get() {
            navigate(redirect, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || match phase.get() {
        GuardPhase::Checking => view! {
            <div class="guard-screen guard-checking">
                <div class="guard-icon">"🔒"</div>
                <h2>"Securing your access"</h2>
                <p>"Verifying authentication..."</p>
            </div>
        }.into_any(),
        GuardPhase::Denied { .. } => view! {
            <div class="guard-screen guard-denied">
                <div class="guard-icon">"🚫"</div>
                <h2>"Access denied"</h2>
                <p>"Redirecting to login page..."</p>
            </div>
        }.into_any(),
        GuardPhase::Authorized => view! {
            <div class="secure-route">
                <span class="secure-badge">"SECURE SESSION"</span>
                <Outlet/>
            </div>
        }.into_any(),
    }
}

/// Renders children only for admins; others are sent back to the catalog
#[component]
pub fn AdminOnly(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let navigate = use_navigate();
    let phase = GuardPhase::resolve(session.store().try_read(), Access::Admin);

    Effect::new(move |_| {
        if let GuardPhase::Denied { redirect } = phase {
            ctx.notify(ToastKind::Error, "Only administrators can manage the inventory.");
            navigate(redirect, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || (phase == GuardPhase::Authorized).then(|| children())
}
