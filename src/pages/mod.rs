//! Routed Pages

mod about;
mod add_sweet;
mod dashboard;
mod home;
mod login;
mod profile;
mod register;
mod sweet_details;
mod sweet_list;
mod update_sweet;

pub use about::{About, NotFound};
pub use add_sweet::AddSweet;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;
pub use sweet_details::SweetDetails;
pub use sweet_list::SweetList;
pub use update_sweet::UpdateSweet;
