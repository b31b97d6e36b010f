//! In-memory auth provider seeded with demo accounts.

use crate::backend::auth::{
    AuthError, AuthListener, AuthProvider, AuthUser, Subscription, validate_credentials,
};
use crate::backend::utils::config::AuthConfig;
use crate::utils::{Error, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Account {
    user: AuthUser,
    password: String,
}

#[derive(Default)]
struct Inner {
    accounts: Vec<Account>,
    current: Option<AuthUser>,
    listeners: Vec<(u64, AuthListener)>,
    next_listener_id: u64,
}

/// Auth provider that keeps accounts and the session in memory.
///
/// Nothing is persisted: every launch starts signed out.
#[derive(Clone, Default)]
pub struct LocalAuthProvider {
    inner: Rc<RefCell<Inner>>,
}

impl LocalAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a provider holding every configured demo account.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let provider = Self::new();
        for account in &config.accounts {
            provider
                .register(
                    &account.email,
                    &account.password,
                    account.display_name.clone(),
                )
                .map_err(|e| match e {
                    AuthError::EmailAlreadyInUse(email) => Error::DuplicateAccount(email),
                    other => Error::Auth(other),
                })?;
        }
        log::debug!("Loaded {} demo account(s)", config.accounts.len());
        Ok(provider)
    }

    /// Adds an account. Uids are assigned in registration order: `u1`, `u2`, ...
    pub fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> std::result::Result<AuthUser, AuthError> {
        validate_credentials(email, password)?;
        let email = normalize_email(email);

        let mut inner = self.inner.borrow_mut();
        if inner.accounts.iter().any(|a| a.user.email == email) {
            return Err(AuthError::EmailAlreadyInUse(email));
        }

        let mut user = AuthUser::new(format!("u{}", inner.accounts.len() + 1), email);
        if let Some(name) = display_name {
            user = user.with_display_name(name);
        }
        inner.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        Ok(user)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn set_current(&self, next: Option<AuthUser>) {
        self.inner.borrow_mut().current = next;
        self.emit();
    }

    // Listeners run without a borrow held so they can call back into the provider.
    fn emit(&self) {
        let (snapshot, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<AuthListener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.current.clone(), listeners)
        };

        for listener in listeners {
            listener(snapshot.clone());
        }
    }
}

impl AuthProvider for LocalAuthProvider {
    fn current_user(&self) -> Option<AuthUser> {
        self.inner.borrow().current.clone()
    }

    fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription {
        let (id, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::clone(&listener)));
            (id, inner.current.clone())
        };
        log::debug!("Auth listener {id} subscribed");

        listener(snapshot);

        let inner: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
                log::debug!("Auth listener {id} unsubscribed");
            }
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> std::result::Result<AuthUser, AuthError> {
        validate_credentials(email, password)?;
        let email = normalize_email(email);

        let user = {
            let inner = self.inner.borrow();
            let account = inner
                .accounts
                .iter()
                .find(|a| a.user.email == email)
                .ok_or(AuthError::UserNotFound)?;
            if account.password != password {
                return Err(AuthError::WrongPassword);
            }
            account.user.clone()
        };

        log::info!("Signed in as {}", user.uid);
        self.set_current(Some(user.clone()));
        Ok(user)
    }

    fn sign_out(&self) {
        let Some(user) = self.current_user() else {
            return;
        };
        log::info!("Signed out {}", user.uid);
        self.set_current(None);
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
