// settings
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use tracing::info;

use crate::providers::ytmusic::DEFAULT_BASE_URL;

pub static SECRET_MANAGER: Lazy<SecretManager> = Lazy::new(SecretManager::new);

enum Mode {
    Dev,
    Prod,
}

/// Process-wide settings table, built once at startup. Dev mode ships with
/// local defaults; prod mode reads everything from the environment.
pub struct SecretManager {
    secrets: HashMap<String, String>,
}

impl SecretManager {
    fn new() -> Self {
        let mut secrets: HashMap<String, String> = HashMap::new();
        let mode = match env::var("MODE") {
            Ok(mode) if mode.to_lowercase() == "prod" => Mode::Prod,
            _ => Mode::Dev,
        };
        match mode {
            Mode::Dev => {
                secrets.insert("PORT".to_string(), "8000".to_string());
                secrets.insert("FRONTEND_DIR".to_string(), "frontend".to_string());
            }
            Mode::Prod => {
                secrets.insert(
                    "PORT".to_string(),
                    env::var("PORT").unwrap_or_else(|_| "8000".to_string()),
                );
                secrets.insert(
                    "FRONTEND_DIR".to_string(),
                    env::var("FRONTEND_DIR").unwrap_or_default(),
                );
            }
        }

        // Catalog provider endpoint is overridable in both modes
        secrets.insert(
            "YTMUSIC_API_URL".to_string(),
            env::var("YTMUSIC_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        );

        // Log which settings are configured (NOT their values!)
        let configured: Vec<&str> = secrets
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        info!("Settings configured: {:?}", configured);

        SecretManager { secrets }
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }
}
