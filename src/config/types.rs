//! Configuration types.

use crate::service::MissPolicy;
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use std::time::Duration;

/// Connection pool limits. Not applied in dev mode, where sqlx defaults are used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    /// Also bounds the startup liveness check.
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings {
            max_connections: 50,
            min_connections: 1,
            max_lifetime: Duration::from_secs(600),
            idle_timeout: Duration::from_secs(60),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolSettings {
    pub fn pool_options(&self, dev: bool) -> PgPoolOptions {
        let options = PgPoolOptions::new().acquire_timeout(self.acquire_timeout);
        if dev {
            return options;
        }
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .max_lifetime(self.max_lifetime)
            .idle_timeout(self.idle_timeout)
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_name: String,
    pub addr: String,
    /// DSN selected for the current mode.
    pub database_url: String,
    pub dev: bool,
    pub pool: PoolSettings,
    pub shutdown_grace: Duration,
    pub body_limit: usize,
    pub miss_policy: MissPolicy,
    /// When set, logs are also written to a daily file in this directory.
    pub log_dir: Option<PathBuf>,
    /// Daily log files kept in `log_dir`; older ones are deleted on rotation.
    pub log_max_files: usize,
}
