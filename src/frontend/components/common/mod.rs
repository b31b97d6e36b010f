//! Common reusable components.

pub mod user_badge;

pub use user_badge::UserBadge;
