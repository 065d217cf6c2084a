//! Site Footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::use_session;

struct FooterLink {
    path: &'static str,
    label: &'static str,
    emoji: &'static str,
    private: bool,
}

static FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { path: "/", label: "Home", emoji: "🏠", private: false },
    FooterLink { path: "/about", label: "About", emoji: "🌟", private: false },
    FooterLink { path: "/private/sweets", label: "Sweets Catalog", emoji: "🍬", private: true },
];

/// Links a visitor may follow; guests only see public pages
fn visible_links(authenticated: bool) -> impl Iterator<Item = &'static FooterLink> {
    FOOTER_LINKS.iter().filter(move |link| authenticated || !link.private)
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let auth = use_session().state();

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="footer-logo">"🍭 SweetVerse"</span>
                <p>"Where innovation meets confectionery"</p>
            </div>
            <nav class="footer-links">
                {move || {
                    visible_links(auth.get().is_authenticated)
                        .map(|link| view! {
                            <A href=link.path>{link.emoji} " " {link.label}</A>
                        })
                        .collect_view()
                }}
            </nav>
            <p class="footer-note">"Made with 💖 for sweet lovers everywhere"</p>
        </footer>
    }
}
