//! Frontend of the application: root view, layouts and navigation.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
