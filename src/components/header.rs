//! Header Component
//!
//! Top navigation; links and account controls follow the session state.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::use_app_context;
use crate::session::use_session;

const PUBLIC_LINKS: &[(&str, &str)] = &[("/", "Home"), ("/about", "About")];
const PRIVATE_LINKS: &[(&str, &str)] = &[("/private/sweets", "Sweets"), ("/private/dashboard", "Dashboard")];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let auth = session.state();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);

    let on_logout = move |_: web_sys::MouseEvent| {
        set_menu_open.set(false);
        match session.logout() {
            Ok(()) => {
                ctx.success("Signed out. See you soon!");
                navigate("/", Default::default());
            }
            Err(e) => ctx.report("Sign out", &e),
        }
    };

    let nav_link = move |path: &'static str, label: &'static str| {
        let class = move || {
            if pathname.get() == path { "nav-link active" } else { "nav-link" }
        };
        view! {
            <A href=path attr:class=class on:click=move |_| set_menu_open.set(false)>
                {label}
            </A>
        }
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="brand">"🍭 SweetVerse"</A>

            <button class="menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <nav class=move || if menu_open.get() { "site-nav open" } else { "site-nav" }>
                {PUBLIC_LINKS.iter().map(|&(path, label)| nav_link(path, label)).collect_view()}
                {move || auth.get().is_authenticated.then(|| {
                    PRIVATE_LINKS.iter().map(|&(path, label)| nav_link(path, label)).collect_view()
                })}
            </nav>

            <div class="account">
                {move || {
                    let state = auth.get();
                    let is_admin = state.is_admin;
                    match state.user {
                        Some(user) => {
                            let initial = user.initial().to_string();
                            let display_name = user.name;
                            view! {
                                <Show when=move || is_admin>
                                    <span class="admin-badge">"👑 Admin"</span>
                                    <A href="/private/add-sweet" attr:class="nav-link">"➕ Add Sweet"</A>
                                </Show>
                                <A href="/private/profile" attr:class="avatar">{initial}</A>
                                <span class="user-name">{display_name}</span>
                                <button class="logout-btn" on:click=on_logout.clone()>"Sign Out"</button>
                            }.into_any()
                        }
                        None => view! {
                            <A href="/login" attr:class="nav-link">"Sign In"</A>
                            <A href="/register" attr:class="cta-btn">"Get Started"</A>
                        }.into_any(),
                    }
                }}
            </div>
        </header>
    }
}
