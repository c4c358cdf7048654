use std::net::SocketAddr;
use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does not touch `.env` files, so tests
/// and callers that manage their own environment can use it directly.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the parsing logic, decoupled from the actual environment so tests
/// can drive it with a plain `HashMap` lookup instead of mutating process
/// env vars.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let raw_addr = or_default("TWEETSTANCE_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = raw_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "TWEETSTANCE_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("TWEETSTANCE_LOG_LEVEL", "info");
    let resources_dir = PathBuf::from(or_default("TWEETSTANCE_RESOURCES_DIR", "./resources"));

    Ok(AppConfig {
        bind_addr,
        log_level,
        resources_dir,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_uses_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.resources_dir, PathBuf::from("./resources"));
    }

    #[test]
    fn build_app_config_honors_overrides() {
        let mut map = HashMap::new();
        map.insert("TWEETSTANCE_BIND_ADDR", "127.0.0.1:9000");
        map.insert("TWEETSTANCE_LOG_LEVEL", "debug");
        map.insert("TWEETSTANCE_RESOURCES_DIR", "/srv/tweetstance/resources");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(
            cfg.resources_dir,
            PathBuf::from("/srv/tweetstance/resources")
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("TWEETSTANCE_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TWEETSTANCE_BIND_ADDR"),
            "expected InvalidEnvVar(TWEETSTANCE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn resources_dir_override_is_respected() {
        let mut map = HashMap::new();
        map.insert("TWEETSTANCE_RESOURCES_DIR", "/data/res");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.resources_dir, PathBuf::from("/data/res"));
    }
}
