//! UI components and layouts.

pub mod buttons;
pub mod common;
pub mod layout;
