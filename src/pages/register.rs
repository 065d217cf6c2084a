//! Register Page
//!
//! Account creation with a live password strength meter. New accounts go to
//! the login page; no session is created here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::context::use_app_context;
use crate::models::{RegisterRequest, Role};

/// Score out of 100, 25 points per satisfied rule
pub fn password_strength(password: &str) -> u8 {
    let rules = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    rules.iter().filter(|ok| **ok).count() as u8 * 25
}

pub fn strength_label(strength: u8) -> &'static str {
    match strength {
        0..=24 => "Very Weak",
        25..=49 => "Weak",
        50..=74 => "Good",
        _ => "Strong",
    }
}

fn strength_class(strength: u8) -> &'static str {
    match strength {
        0..=24 => "strength very-weak",
        25..=49 => "strength weak",
        50..=74 => "strength good",
        _ => "strength strong",
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::default());
    let (show_password, set_show_password) = signal(false);
    let (loading, set_loading) = signal(false);
    let (registered, set_registered) = signal(false);
    let strength = Memo::new(move |_| password.with(|p| password_strength(p)));

    Effect::new(move |_| {
        if registered.get() {
            navigate("/login", Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = RegisterRequest {
            name: name.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.register(&req).await {
                Ok(()) => {
                    log::info!("[Register] created account {} ({})", req.name, req.role.as_str());
                    ctx.success("🎉 Registration successful! Please login to continue your sweet journey.");
                    set_registered.try_set(true);
                }
                Err(e) => ctx.report("Registration", &e),
            }
            set_loading.try_set(false);
        });
    };

    let role_option = move |value: Role, icon: &'static str, label: &'static str, description: &'static str| {
        view! {
            <label class=move || if role.get() == value { "role-option selected" } else { "role-option" }>
                <input
                    type="radio"
                    name="role"
                    value=value.as_str()
                    prop:checked=move || role.get() == value
                    on:change=move |_| set_role.set(value)
                />
                <span class="role-icon">{icon}</span>
                <span class="role-label">{label}</span>
                <span class="role-description">{description}</span>
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Join SweetVerse"</h1>
                <p class="subtitle">"Create your account and start exploring"</p>

                <label>
                    <span>"👤 Username"</span>
                    <input
                        type="text"
                        required
                        placeholder="Choose your username"
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
                            placeholder="Create a strong password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button type="button" on:click=move |_| set_show_password.update(|v| *v = !*v)>
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                </label>

                <Show when=move || password.with(|p| !p.is_empty())>
                    <div class=move || strength_class(strength.get())>
                        <span>"Password strength: " {move || strength_label(strength.get())}</span>
                        <div class="strength-bar">
                            <div class="strength-fill" style:width=move || format!("{}%", strength.get())></div>
                        </div>
                    </div>
                </Show>

                <fieldset class="role-picker">
                    <legend>"🎯 Account Type"</legend>
                    {role_option(Role::User, "👤", "User", "Browse sweets")}
                    {role_option(Role::Admin, "👑", "Admin", "Manage inventory")}
                </fieldset>

                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? " <A href="/login">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_rules() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abcdefgh"), 25);
        assert_eq!(password_strength("Abcdefgh"), 50);
        assert_eq!(password_strength("Abcdefg1"), 75);
        assert_eq!(password_strength("Abcdef1!"), 100);
        // Short passwords can still score on the other rules
        assert_eq!(password_strength("A1!"), 75);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(strength_label(0), "Very Weak");
        assert_eq!(strength_label(25), "Weak");
        assert_eq!(strength_label(50), "Good");
        assert_eq!(strength_label(75), "Strong");
        assert_eq!(strength_label(100), "Strong");
    }
}
