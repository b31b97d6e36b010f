use std::collections::HashMap;
use std::sync::OnceLock;

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub struct CssLoader;

impl CssLoader {
    fn cache() -> &'static HashMap<&'static str, &'static str> {
        CSS_CACHE.get_or_init(|| {
            let styles: [(&'static str, &'static str); 2] = [
                (
                    "main",
                    include_str!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/styles/main.css"
                    )),
                ),
                (
                    "auth",
                    include_str!(concat!(
                        env!("CARGO_MANIFEST_DIR"),
                        "/assets/styles/auth.css"
                    )),
                ),
            ];
            styles.into_iter().collect()
        })
    }

    #[inline(always)]
    pub fn get(style_name: &str) -> Option<&'static str> {
        Self::cache().get(style_name).copied()
    }

    #[inline(always)]
    pub fn get_main() -> &'static str {
        Self::get("main").unwrap_or("")
    }

    #[inline(always)]
    pub fn get_auth() -> &'static str {
        Self::get("auth").unwrap_or("")
    }
}

pub fn ensure_css_loaded() {
    let loaded = CssLoader::cache().len();
    log::debug!("{loaded} stylesheet(s) embedded");
}
