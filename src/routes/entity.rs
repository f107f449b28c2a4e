//! Record CRUD routes, one sub-router per record type with that type's service as state.

use crate::handlers::entity::{create, delete as delete_handler, list, list_by_parent, read, update};
use crate::handlers::owner::{read_by_campus_id, read_by_email};
use crate::models::{Device, DeviceLog, DeviceProperty, DeviceType, Owner, TypeProperty};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn entity_routes(state: AppState) -> Router {
    let owners = Router::new()
        .route("/owners", get(list::<Owner>).post(create::<Owner>))
        .route(
            "/owners/:id",
            get(read::<Owner>).put(update::<Owner>).delete(delete_handler::<Owner>),
        )
        .route("/owners/campus/:campus_id", get(read_by_campus_id))
        .route("/owners/email/:email", get(read_by_email))
        .with_state(state.owners);

    let types = Router::new()
        .route("/types", get(list::<DeviceType>).post(create::<DeviceType>))
        .route(
            "/types/:id",
            get(read::<DeviceType>)
                .put(update::<DeviceType>)
                .delete(delete_handler::<DeviceType>),
        )
        .with_state(state.types);

    let type_properties = Router::new()
        .route("/types/:id/properties", get(list_by_parent::<TypeProperty>))
        .route("/type-properties", post(create::<TypeProperty>))
        .route(
            "/type-properties/:id",
            get(read::<TypeProperty>)
                .put(update::<TypeProperty>)
                .delete(delete_handler::<TypeProperty>),
        )
        .with_state(state.type_properties);

    let devices = Router::new()
        .route("/devices", get(list::<Device>).post(create::<Device>))
        .route(
            "/devices/:id",
            get(read::<Device>).put(update::<Device>).delete(delete_handler::<Device>),
        )
        .with_state(state.devices);

    let device_properties = Router::new()
        .route("/devices/:id/properties", get(list_by_parent::<DeviceProperty>))
        .route("/device-properties", post(create::<DeviceProperty>))
        .route(
            "/device-properties/:id",
            get(read::<DeviceProperty>)
                .put(update::<DeviceProperty>)
                .delete(delete_handler::<DeviceProperty>),
        )
        .with_state(state.device_properties);

    // Logs are append-only through the API: no update route.
    let device_logs = Router::new()
        .route("/devices/:id/logs", get(list_by_parent::<DeviceLog>))
        .route("/device-logs", post(create::<DeviceLog>))
        .route(
            "/device-logs/:id",
            get(read::<DeviceLog>).delete(delete_handler::<DeviceLog>),
        )
        .with_state(state.device_logs);

    Router::new()
        .merge(owners)
        .merge(types)
        .merge(type_properties)
        .merge(devices)
        .merge(device_properties)
        .merge(device_logs)
}
