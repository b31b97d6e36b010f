use crate::backend::auth::user::is_valid_email;
use crate::backend::auth::AuthError;
use crate::backend::utils::paths::get_config_path;
use crate::utils::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub accounts: Vec<DemoAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl DemoAccount {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: Option<&str>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.map(str::to_string),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hackathon".to_string(),
            width: 1280.0,
            height: 832.0,
            resizable: true,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            accounts: vec![DemoAccount::new(
                "demo@example.com",
                "hackathon",
                Some("デモユーザー"),
            )],
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the config at `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map(Some)
    }

    /// Loads the user's config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = match get_config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Using default configuration: {e}");
                return Self::default();
            }
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Ok(None) => {
                log::debug!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::error!("Failed to read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Rejects demo accounts the auth provider would refuse.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for account in &self.auth.accounts {
            if !is_valid_email(&account.email) {
                return Err(Error::Auth(AuthError::InvalidEmail));
            }
            if account.password.is_empty() {
                return Err(Error::Auth(AuthError::MissingPassword));
            }
            let email = account.email.trim().to_lowercase();
            if !seen.insert(email.clone()) {
                return Err(Error::DuplicateAccount(email));
            }
        }
        Ok(())
    }
}
