//! Authentication context and state management.

use crate::backend::auth::{AuthListener, AuthProvider, AuthUser};
use dioxus::prelude::*;
use std::ops::Deref;
use std::rc::Rc;

/// Shared handle to the auth provider, passed down through context.
#[derive(Clone)]
pub struct AuthHandle(Rc<dyn AuthProvider>);

impl AuthHandle {
    pub fn new(provider: impl AuthProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

impl Deref for AuthHandle {
    type Target = dyn AuthProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Mirrors the provider's auth snapshot into a signal.
///
/// Subscribes once when the calling component mounts; the subscription is
/// released when the component is dropped.
pub fn use_auth_user() -> Signal<Option<AuthUser>> {
    let auth = use_context::<AuthHandle>();
    let user = use_signal(|| auth.current_user());

    use_hook(move || {
        let listener: AuthListener = Rc::new(move |next: Option<AuthUser>| {
            let mut user = user;
            // The provider replays the current snapshot on subscribe; skip
            // the write when nothing changed.
            if *user.peek() != next {
                user.set(next);
            }
        });
        Rc::new(auth.on_auth_state_changed(listener))
    });

    user
}
