//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::context::use_app_context;
use crate::models::LoginRequest;
use crate::session::use_session;

/// Landing page after a successful login
pub const AFTER_LOGIN_PATH: &str = "/private/dashboard";

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let session = use_session();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (loading, set_loading) = signal(false);
    let (signed_in, set_signed_in) = signal(false);

    Effect::new(move |_| {
        if signed_in.get() {
            navigate(AFTER_LOGIN_PATH, Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = LoginRequest {
            name: name.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let api = api.clone();
        let session = session.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result = match api.login(&req).await {
                Ok(resp) => session.login(resp.into()),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    ctx.success("🎉 Welcome back! Login successful!");
                    set_signed_in.try_set(true);
                }
                Err(e) => ctx.report("Login", &e),
            }
            set_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Welcome Back"</h1>
                <p class="subtitle">"Sign in to continue your sweet journey"</p>

                <label>
                    <span>"👤 Username"</span>
                    <input
                        type="text"
                        required
                        placeholder="Enter your username"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    <span>"🔒 Password"</span>
                    <div class="password-field">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            required
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button type="button" on:click=move |_| set_show_password.update(|v| *v = !*v)>
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                </label>

                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <p class="auth-switch">
                    "New here? " <A href="/register">"Create an account"</A>
                </p>
            </form>
        </div>
    }
}
