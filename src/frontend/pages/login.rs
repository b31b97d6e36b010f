//! Sign-in form.

use crate::backend::auth::validate_credentials;
use crate::frontend::services::context::AuthHandle;
use dioxus::prelude::*;

#[component]
pub fn LoginForm() -> Element {
    let auth = use_context::<AuthHandle>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        if let Err(err) = validate_credentials(&email_value, &password_value) {
            error.set(Some(err.to_string()));
            return;
        }

        error.set(None);
        if let Err(err) = auth.sign_in(&email_value, &password_value) {
            log::warn!("Sign-in failed for {email_value}: {err}");
            error.set(Some(err.to_string()));
        }
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: on_submit,

            h1 { class: "login-title", "ログイン" }

            label { r#for: "login-email", "メールアドレス" }
            input {
                id: "login-email",
                class: "login-input",
                r#type: "email",
                value: "{email}",
                placeholder: "you@example.com",
                autofocus: true,
                oninput: move |e| {
                    email.set(e.value());
                    error.set(None);
                },
            }

            label { r#for: "login-password", "パスワード" }
            input {
                id: "login-password",
                class: "login-input",
                r#type: "password",
                value: "{password}",
                oninput: move |e| {
                    password.set(e.value());
                    error.set(None);
                },
            }

            button { class: "login-button", r#type: "submit", "ログイン" }

            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
        }
    }
}
