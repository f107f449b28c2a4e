//! Inventory API: devices, owners, types, property schemas, property values and device logs
//! over PostgreSQL, each served by the same generic store → service → handler stack.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod id;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, PoolSettings};
pub use db::connect_pool;
pub use error::{AppError, ConfigError};
pub use id::{IdGenerator, NanoId};
pub use models::{ChildRecord, Device, DeviceLog, DeviceProperty, DeviceType, Owner, Record, TypeProperty};
pub use routes::{app_router, common_routes, entity_routes, API_PREFIX};
pub use service::{CrudService, Intent, MissPolicy, UnitOfWork};
pub use state::AppState;
pub use store::RecordStore;
