//! Environment variable layer.

use crate::{ConfigError, CorsConfig};
use serde_json::{Map, Value, json};
use std::net::IpAddr;

const APP_NAME: &str = "APP_NAME";
const APP_DESCRIPTION: &str = "APP_DESCRIPTION";
const APP_VERSION: &str = "APP_VERSION";
const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
const NOTES_ADDRESS: &str = "NOTES_ADDRESS";
const NOTES_PORT: &str = "NOTES_PORT";

/// Translate recognised environment variables into a config overlay.
///
/// Returns `None` when none of the keys are set. Later duplicates win.
pub(super) fn env_layer(vars: &[(String, String)]) -> Result<Option<Value>, ConfigError> {
    let mut app = Map::new();
    let mut cors = Map::new();
    let mut server = Map::new();

    for (key, raw) in vars {
        match key.as_str() {
            APP_NAME => {
                app.insert("name".to_string(), json!(raw));
            }
            APP_DESCRIPTION => {
                app.insert("description".to_string(), json!(raw));
            }
            APP_VERSION => {
                app.insert("version".to_string(), json!(raw));
            }
            CORS_ALLOWED_ORIGINS => {
                let origins = CorsConfig::parse_origin_list(raw);
                if origins.is_empty() {
                    return Err(invalid_env(key, "expected at least one origin"));
                }
                cors.insert("allowed_origins".to_string(), json!(origins));
            }
            NOTES_ADDRESS => {
                let address: IpAddr = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid_env(key, "expected an IP address"))?;
                server.insert("address".to_string(), json!(address));
            }
            NOTES_PORT => {
                let port: u16 = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid_env(key, "expected a port number"))?;
                server.insert("port".to_string(), json!(port));
            }
            _ => {}
        }
    }

    let mut layer = Map::new();
    for (section, values) in [("app", app), ("cors", cors), ("server", server)] {
        if !values.is_empty() {
            layer.insert(section.to_string(), Value::Object(values));
        }
    }
    if layer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Value::Object(layer)))
    }
}

fn invalid_env(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidEnv {
        key: key.to_string(),
        message: message.to_string(),
    }
}
