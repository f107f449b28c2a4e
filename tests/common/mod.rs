//! Shared fixtures: a throwaway Postgres container with the inventory schema, plus record builders.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use inventory_api::{
    Device, DeviceLog, DeviceProperty, DeviceType, MissPolicy, NanoId, Owner, TypeProperty,
};
use inventory_api::{CrudService, IdGenerator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Keep the container alive as long as the pool is in use.
pub struct TestDb {
    pub container: ContainerAsync<Postgres>,
    pub pool: PgPool,
}

pub async fn setup_test_db() -> TestDb {
    let container = Postgres::default().start().await.unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let dsn = format!(
        "postgres://postgres:postgres@{}:{}/postgres?sslmode=disable",
        host, port
    );

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&dsn)
        .await
        .expect("Failed to connect to test database");
    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to apply schema");

    TestDb { container, pool }
}

pub fn ids() -> Arc<dyn IdGenerator> {
    Arc::new(NanoId)
}

pub fn service<R: inventory_api::Record>(pool: &PgPool, policy: MissPolicy) -> CrudService<R> {
    CrudService::new(pool.clone(), ids(), policy)
}

pub fn owner() -> Owner {
    Owner {
        id: String::new(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        campus_id: None,
        email: "john.doe@example.com".to_string(),
    }
}

pub fn device_type() -> DeviceType {
    DeviceType {
        id: String::new(),
        name: "Test Type".to_string(),
        description: Some("Type used by tests".to_string()),
    }
}

pub fn type_property(type_id: &str) -> TypeProperty {
    TypeProperty {
        id: String::new(),
        type_id: type_id.to_string(),
        name: "is_active".to_string(),
        data_type: "bool".to_string(),
        required: true,
    }
}

pub fn device(type_id: &str, owner_id: &str) -> Device {
    Device {
        id: String::new(),
        serial_number: "SN123456".to_string(),
        name: "Test Device".to_string(),
        type_id: type_id.to_string(),
        owner_id: owner_id.to_string(),
        purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        status: "active".to_string(),
    }
}

pub fn device_property(device_id: &str, type_property_id: &str, value: &str) -> DeviceProperty {
    DeviceProperty {
        id: String::new(),
        device_id: device_id.to_string(),
        type_property_id: type_property_id.to_string(),
        value: value.to_string(),
    }
}

pub fn device_log(device_id: &str, note: &str) -> DeviceLog {
    DeviceLog {
        id: String::new(),
        device_id: device_id.to_string(),
        log_type: "maintenance".to_string(),
        note: note.to_string(),
        created_at: now_micros(),
        created_by: "tester".to_string(),
    }
}

/// Current time at the microsecond precision Postgres stores, so reads compare equal.
pub fn now_micros() -> DateTime<Utc> {
    DateTime::from_timestamp_micros(Utc::now().timestamp_micros()).unwrap()
}

/// Owner, type and device rows, created through services. Returns the device.
pub async fn seed_device(pool: &PgPool) -> Device {
    let mut owner = owner();
    service::<Owner>(pool, MissPolicy::Ignore)
        .create(&mut owner)
        .await
        .unwrap();
    let mut device_type = device_type();
    service::<DeviceType>(pool, MissPolicy::Ignore)
        .create(&mut device_type)
        .await
        .unwrap();
    let mut device = device(&device_type.id, &owner.id);
    service::<Device>(pool, MissPolicy::Ignore)
        .create(&mut device)
        .await
        .unwrap();
    device
}
