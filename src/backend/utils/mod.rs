//! Utility modules for the application backend.
//!
//! Configuration loading, path management and stylesheet caching.

/// Application configuration.
pub mod config;
/// CSS loading and caching utilities.
pub mod css_loader;
/// Path utilities for the application directory.
pub mod paths;
