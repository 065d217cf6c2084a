//! UI Components
//!
//! Reusable Leptos components.

mod footer;
mod header;
mod toast_host;
mod route_guard;
mod search_filter;
mod sweet_card;
mod sweet_form;
mod delete_confirm_button;

pub use footer::SiteFooter;
pub use header::Header;
pub use toast_host::ToastHost;
pub use route_guard::{AdminOnly, RequireSession};
pub use search_filter::{FilterForm, SearchFilter};
pub use sweet_card::{parse_qty, SweetCard};
pub use sweet_form::{SweetFields, SweetForm};
pub use delete_confirm_button::DeleteConfirmButton;
