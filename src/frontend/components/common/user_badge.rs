use crate::backend::auth::AuthUser;
use crate::frontend::services::context::AuthHandle;
use dioxus::prelude::*;

/// Shows who is signed in, with a sign-out button.
#[component]
pub fn UserBadge(user: AuthUser) -> Element {
    let auth = use_context::<AuthHandle>();
    let name = user.label().to_string();

    rsx! {
        div { class: "user-badge",
            span { class: "user-name", "{name}" }
            button {
                class: "sign-out-button",
                onclick: move |_| auth.sign_out(),
                "ログアウト"
            }
        }
    }
}
