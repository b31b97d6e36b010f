//! Backend of the application: the auth provider, configuration and
//! embedded resources.

pub mod auth;
pub mod utils;
