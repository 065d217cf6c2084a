//! SweetVerse Frontend App
//!
//! Provides the shared services via context and lays out the routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{Header, RequireSession, SiteFooter, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    About, AddSweet, Dashboard, Home, Login, NotFound, Profile, Register, SweetDetails, SweetList,
    UpdateSweet,
};
use crate::session::{SessionService, SessionStorage, SessionStore};

#[component]
pub fn App(config: AppConfig, storage: Arc<dyn SessionStorage>) -> impl IntoView {
    let store = SessionStore::new(storage);

    // Provide context to all children
    provide_context(AppContext::new(config.guard_min_loading));
    provide_context(SessionService::new(store.clone()));
    provide_context(ApiClient::new(config.api_base, store));

    view! {
        <Router>
            <div class="app-layout">
                <Header />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/about") view=About />
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/register") view=Register />

                        // Everything under /private passes the session check first
                        <ParentRoute path=path!("/private") view=RequireSession>
                            <Route path=path!("") view=|| view! { <Redirect path="/private/dashboard" /> } />
                            <Route path=path!("/dashboard") view=Dashboard />
                            <Route path=path!("/profile") view=Profile />
                            <Route path=path!("/sweets") view=SweetList />
                            <Route path=path!("/sweet/:id") view=SweetDetails />
                            <Route path=path!("/add-sweet") view=AddSweet />
                            <Route path=path!("/update-sweet/:id") view=UpdateSweet />
                        </ParentRoute>
                    </Routes>
                </main>
                <SiteFooter />
                <ToastHost />
            </div>
        </Router>
    }
}
