//! About Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About SweetVerse"</h1>
            <p>
                "SweetVerse is a sweet shop inventory manager. Browse the catalog, "
                "buy your favourites and, as an administrator, keep the shelves stocked."
            </p>
            <ul class="feature-list">
                <li>"🔍 Search by name, category and price range"</li>
                <li>"🛒 Purchase straight from the catalog"</li>
                <li>"📊 Live inventory statistics on the dashboard"</li>
                <li>"👑 Admin tools for adding, editing, restocking and removing sweets"</li>
            </ul>
            <A href="/register" attr:class="primary-btn">"Join now"</A>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page melted away."</p>
            <A href="/">"← Back home"</A>
        </div>
    }
}
