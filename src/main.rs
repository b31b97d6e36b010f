#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use hackathon_app::backend::utils::config::AppConfig;
use hackathon_app::backend::utils::css_loader::ensure_css_loaded;
use hackathon_app::frontend::app::App;
use hackathon_app::utils::logging;

fn main() -> anyhow::Result<()> {
    // Logging setup
    logging::init_from_env(logging::DEFAULT_FILTER);

    ensure_css_loaded();

    let app_config = AppConfig::load();
    app_config
        .validate()
        .context("Invalid demo accounts in configuration")?;

    let size = LogicalSize::new(app_config.window.width, app_config.window.height);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.window.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(app_config.window.resizable),
        )
        .with_menu(None);

    log::info!("Starting {} v{}", app_config.window.title, env!("CARGO_PKG_VERSION"));

    LaunchBuilder::new()
        .with_cfg(config)
        .with_context(app_config)
        .launch(App);

    Ok(())
}
