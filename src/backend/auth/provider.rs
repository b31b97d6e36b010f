//! The boundary between the UI and whatever issues identities.

use crate::backend::auth::{AuthError, AuthUser};
use std::fmt;
use std::rc::Rc;

/// Callback receiving every auth snapshot, in emission order.
pub type AuthListener = Rc<dyn Fn(Option<AuthUser>)>;

/// Source of the auth snapshot.
///
/// Implementations invoke a new listener immediately with the current
/// snapshot and then once per change. Listeners must treat every value as
/// replacing the previous one.
pub trait AuthProvider {
    /// Current snapshot; `None` when nobody is signed in.
    fn current_user(&self) -> Option<AuthUser>;

    /// Registers `listener` until the returned [`Subscription`] is released.
    fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription;

    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    fn sign_out(&self);
}

/// Keeps a listener registered. Released exactly once, either through
/// [`Subscription::unsubscribe`] or on drop.
#[must_use = "dropping a Subscription unsubscribes its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn explicit_unsubscribe_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));

        assert!(subscription.is_active());
        subscription.unsubscribe();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_releases_once() {
        let released = Rc::new(Cell::new(0));
        {
            let counter = released.clone();
            let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }
}
