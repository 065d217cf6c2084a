//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Category;
use crate::session::use_session;

/// Categories featured on the landing page
const FEATURED: [Category; 6] = [
    Category::Chocolate,
    Category::Candy,
    Category::Cake,
    Category::Donut,
    Category::IceCream,
    Category::Cupcake,
];

#[component]
pub fn Home() -> impl IntoView {
    let auth = use_session().state();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Welcome to SweetVerse"</h1>
                <p>"Discover, manage and enjoy a world of handcrafted treats."</p>
                {move || if auth.get().is_authenticated {
                    view! {
                        <A href="/private/sweets" attr:class="primary-btn">"🍬 Browse Sweets"</A>
                    }.into_any()
                } else {
                    view! {
                        <div class="hero-actions">
                            <A href="/register" attr:class="primary-btn">"Get Started"</A>
                            <A href="/login" attr:class="secondary-btn">"Sign In"</A>
                        </div>
                    }.into_any()
                }}
            </section>

            <section class="featured-categories">
                <h2>"Something for every craving"</h2>
                <div class="category-strip">
                    {FEATURED.into_iter().map(|c| view! {
                        <div class="category-chip">
                            <span>{c.icon()}</span>
                            <span>{c.as_str()}</span>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
