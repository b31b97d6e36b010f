//! Pages: the root view and what it switches between.

pub mod login;
pub mod root;
pub mod timeline;

pub use login::LoginForm;
pub use root::RootView;
pub use timeline::Timeline;
