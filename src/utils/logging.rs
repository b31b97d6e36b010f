//! Logging setup.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes `env_logger`, preferring `RUST_LOG` over `default_filter`.
pub fn init_from_env(default_filter: &str) {
    let env = Env::default().default_filter_or(default_filter);
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
    {
        eprintln!("Logger already initialized: {e}");
    }
}
