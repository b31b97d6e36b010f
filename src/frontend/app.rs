//! Application root and routing.

use crate::backend::auth::LocalAuthProvider;
use crate::backend::utils::config::AppConfig;
use crate::frontend::pages::{RootView, Timeline};
use crate::frontend::services::context::AuthHandle;
use dioxus::prelude::*;

/// Routes shown inside the signed-in layout.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Timeline placeholder.
    #[route("/")]
    Timeline {},
}

/// Builds the auth handle for `config`. Falls back to a provider without
/// accounts when the configured ones are rejected.
pub fn build_auth(config: &AppConfig) -> AuthHandle {
    match LocalAuthProvider::from_config(&config.auth) {
        Ok(provider) => AuthHandle::new(provider),
        Err(e) => {
            log::error!("Failed to load demo accounts: {e}");
            AuthHandle::new(LocalAuthProvider::new())
        }
    }
}

/// Top-level component. Expects an [`AppConfig`] in context; uses defaults
/// otherwise.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    use_context_provider(|| build_auth(&config));

    rsx! {
        RootView {
            Router::<Route> {}
        }
    }
}
