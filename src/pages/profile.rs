//! Profile Page

use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn Profile() -> impl IntoView {
    let auth = use_session().state();

    move || {
        let state = auth.get();
        let is_admin = state.is_admin;
        let Some(user) = state.user else {
            return view! { <div class="loading">"Loading profile..."</div> }.into_any();
        };
        view! {
            <div class="profile-page">
                <header class="profile-header">
                    <div class="avatar large">{user.initial().to_string()}</div>
                    <div>
                        <h1>{user.name.clone()}</h1>
                        <span class="role-tag">
                            {if is_admin { "Platform Administrator" } else { "Sweet Enthusiast" }}
                        </span>
                        {is_admin.then(|| view! { <span class="admin-badge">"⭐ ADMIN"</span> })}
                    </div>
                </header>

                <dl class="profile-details">
                    <dt>"Username"</dt>
                    <dd>{user.name.clone()}</dd>
                    <dt>"Role"</dt>
                    <dd>{user.role.as_str()}</dd>
                    {user.email.clone().map(|email| view! {
                        <dt>"Email"</dt>
                        <dd>{email}</dd>
                    })}
                </dl>

                {is_admin.then(|| view! {
                    <section class="admin-features">
                        <h2>"Admin Features"</h2>
                        <ul>
                            <li>"📊 Inventory Management: full control over sweet inventory"</li>
                            <li>"🔄 Restocking: top up any sweet from the catalog"</li>
                        </ul>
                    </section>
                })}
            </div>
        }
        .into_any()
    }
}
