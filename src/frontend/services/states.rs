//! Session state.

use crate::backend::auth::AuthUser;

/// Which layout the root view shows.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(AuthUser),
}

impl From<Option<AuthUser>> for Session {
    fn from(snapshot: Option<AuthUser>) -> Self {
        snapshot.map_or(Self::Unauthenticated, Self::Authenticated)
    }
}
