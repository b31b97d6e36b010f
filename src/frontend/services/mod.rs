//! Frontend services: auth context and session state.

pub mod context;
pub mod states;
