//! Layout components.

pub mod auth;
pub mod header;
pub mod main;
pub mod sidebar;

pub use auth::LoginLayout;
pub use header::CustomHeader;
pub use main::MainLayout;
pub use sidebar::SideBar;
