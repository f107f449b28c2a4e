//! Load `AppConfig` from environment variables.

use crate::config::types::{AppConfig, PoolSettings};
use crate::error::ConfigError;
use crate::service::MissPolicy;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/inventory";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_APP_NAME: &str = "inventory-api";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;
pub const DEFAULT_LOG_MAX_FILES: usize = 7;

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to honor a `.env` file.
    pub fn from_env(dev: bool) -> Result<Self, ConfigError> {
        Self::from_lookup(dev, |key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys take their defaults; malformed values are errors.
    pub fn from_lookup<F>(dev: bool, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prod_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let database_url = if dev {
            lookup("DATABASE_URL_DEV").unwrap_or(prod_url)
        } else {
            prod_url
        };
        let defaults = PoolSettings::default();
        let pool = PoolSettings {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            max_lifetime: secs_or(&lookup, "DB_MAX_LIFETIME_SECS", defaults.max_lifetime)?,
            idle_timeout: secs_or(&lookup, "DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout)?,
            acquire_timeout: secs_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout)?,
        };
        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::InvalidValue {
                key: "DB_MIN_CONNECTIONS",
                value: pool.min_connections.to_string(),
                reason: format!("exceeds DB_MAX_CONNECTIONS ({})", pool.max_connections),
            });
        }
        let log_max_files = parse_or(&lookup, "LOG_MAX_FILES", DEFAULT_LOG_MAX_FILES)?;
        if log_max_files == 0 {
            return Err(ConfigError::InvalidValue {
                key: "LOG_MAX_FILES",
                value: log_max_files.to_string(),
                reason: "must keep at least one file".into(),
            });
        }
        let miss_policy = if parse_bool_or(&lookup, "INVENTORY_REPORT_MISSING", false)? {
            MissPolicy::Report
        } else {
            MissPolicy::Ignore
        };

        Ok(AppConfig {
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.into()),
            addr: lookup("APP_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into()),
            database_url,
            dev,
            pool,
            shutdown_grace: secs_or(&lookup, "SHUTDOWN_GRACE_SECS", Duration::from_secs(5))?,
            body_limit: parse_or(&lookup, "REQUEST_BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT)?,
            miss_policy,
            log_dir: lookup("LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            log_max_files,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn secs_or<F>(lookup: &F, key: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_or(lookup, key, default.as_secs()).map(Duration::from_secs)
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|s| s.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key,
                value: v,
                reason: "expected a boolean".into(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(dev: bool, vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(dev, |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(false, &[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.pool, PoolSettings::default());
        assert_eq!(config.shutdown_grace, Duration::from_secs(5));
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT);
        assert_eq!(config.miss_policy, MissPolicy::Ignore);
        assert!(config.log_dir.is_none());
        assert_eq!(config.log_max_files, DEFAULT_LOG_MAX_FILES);
    }

    #[test]
    fn dev_mode_prefers_dev_url() {
        let vars = [
            ("DATABASE_URL", "postgres://prod/inventory"),
            ("DATABASE_URL_DEV", "postgres://localhost/inventory_dev"),
        ];
        assert_eq!(
            config_from(true, &vars).unwrap().database_url,
            "postgres://localhost/inventory_dev"
        );
        assert_eq!(
            config_from(false, &vars).unwrap().database_url,
            "postgres://prod/inventory"
        );
        assert_eq!(
            config_from(true, &vars[..1]).unwrap().database_url,
            "postgres://prod/inventory"
        );
    }

    #[test]
    fn pool_and_policy_overrides() {
        let config = config_from(
            false,
            &[
                ("DB_MAX_CONNECTIONS", "10"),
                ("DB_MIN_CONNECTIONS", "2"),
                ("DB_IDLE_TIMEOUT_SECS", "30"),
                ("INVENTORY_REPORT_MISSING", "true"),
                ("LOG_DIR", "/var/log/inventory"),
                ("LOG_MAX_FILES", "14"),
            ],
        )
        .unwrap();
        assert_eq!(config.pool.max_connections, 10);
        assert_eq!(config.pool.min_connections, 2);
        assert_eq!(config.pool.idle_timeout, Duration::from_secs(30));
        assert_eq!(config.miss_policy, MissPolicy::Report);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/inventory")));
        assert_eq!(config.log_max_files, 14);
    }

    #[test]
    fn log_retention_must_keep_a_file() {
        let err = config_from(false, &[("LOG_MAX_FILES", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "LOG_MAX_FILES", .. }));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = config_from(false, &[("DB_MAX_CONNECTIONS", "lots")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. }));

        let err = config_from(false, &[("INVENTORY_REPORT_MISSING", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "INVENTORY_REPORT_MISSING", .. }));
    }

    #[test]
    fn min_connections_cannot_exceed_max() {
        let err = config_from(
            false,
            &[("DB_MAX_CONNECTIONS", "2"), ("DB_MIN_CONNECTIONS", "3")],
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DB_MIN_CONNECTIONS", .. }));
    }
}
