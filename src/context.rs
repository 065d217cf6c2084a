//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::error::AppError;

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the catalog from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the catalog from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Visible notifications - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible notifications - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
    /// Minimum loading duration for protected navigations
    pub guard_min_loading: Duration,
}

impl AppContext {
    pub fn new(guard_min_loading: Duration) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            reload_trigger,
            set_reload_trigger,
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
            guard_min_loading,
        }
    }

    /// Trigger a reload of the catalog
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a transient notification
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|list| list.push(Toast { id, kind, message: message.into() }));

        let set_toasts = self.set_toasts;
        Timeout::new(TOAST_MILLIS, move || {
            set_toasts.try_update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    /// Log the error and show it to the user
    pub fn report(&self, action: &str, error: &AppError) {
        log::error!("[{}] {}", action, error);
        self.notify(ToastKind::Error, format!("{} failed. {}", action, error.user_message()));
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
