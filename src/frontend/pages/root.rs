//! Root view with authentication gate.

use crate::frontend::components::layout::{LoginLayout, MainLayout};
use crate::frontend::pages::LoginForm;
use crate::frontend::services::context::use_auth_user;
use crate::frontend::services::states::Session;
use dioxus::prelude::*;

/// Shows `children` inside the navigation layout while someone is signed in,
/// and the login form otherwise. Never both.
#[component]
pub fn RootView(children: Element) -> Element {
    let user = use_auth_user();

    match Session::from(user()) {
        Session::Authenticated(user) => rsx! {
            MainLayout { user, {children} }
        },
        Session::Unauthenticated => rsx! {
            LoginLayout {
                LoginForm {}
            }
        },
    }
}
