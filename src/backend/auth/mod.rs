//! Authentication provider boundary and its in-memory implementation.

pub mod error;
pub mod local;
pub mod provider;
pub mod user;

pub use error::AuthError;
pub use local::LocalAuthProvider;
pub use provider::{AuthListener, AuthProvider, Subscription};
pub use user::{AuthUser, validate_credentials};
