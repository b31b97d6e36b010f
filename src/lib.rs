//! Hackathon social app shell: a login-gated desktop UI with a fixed sidebar
//! and header navigation, driven by an authentication provider.

pub mod backend;
pub mod frontend;
pub mod utils;
