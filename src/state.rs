//! Shared application state: the pool and one service per record type, built once at startup.

use crate::id::IdGenerator;
use crate::models::{Device, DeviceLog, DeviceProperty, DeviceType, Owner, TypeProperty};
use crate::service::{CrudService, MissPolicy};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub owners: Arc<CrudService<Owner>>,
    pub types: Arc<CrudService<DeviceType>>,
    pub type_properties: Arc<CrudService<TypeProperty>>,
    pub devices: Arc<CrudService<Device>>,
    pub device_properties: Arc<CrudService<DeviceProperty>>,
    pub device_logs: Arc<CrudService<DeviceLog>>,
}

impl AppState {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>, policy: MissPolicy) -> Self {
        AppState {
            owners: Arc::new(CrudService::new(pool.clone(), ids.clone(), policy)),
            types: Arc::new(CrudService::new(pool.clone(), ids.clone(), policy)),
            type_properties: Arc::new(CrudService::new(pool.clone(), ids.clone(), policy)),
            devices: Arc::new(CrudService::new(pool.clone(), ids.clone(), policy)),
            device_properties: Arc::new(CrudService::new(pool.clone(), ids.clone(), policy)),
            device_logs: Arc::new(CrudService::new(pool.clone(), ids, policy)),
            pool,
        }
    }
}
