use super::{ChildRecord, PgQuery, Record};
use crate::sql::Table;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Value of one type property on one device. Always stored as text, never coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DeviceProperty {
    #[serde(default)]
    pub id: String,
    pub device_id: String,
    pub type_property_id: String,
    pub value: String,
}

impl Record for DeviceProperty {
    const ENTITY: &'static str = "device property";
    const TABLE: Table = Table {
        name: "device_properties",
        columns: &["id", "device_id", "type_property_id", "value"],
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.device_id)
            .bind(&self.type_property_id)
            .bind(&self.value)
    }
}

impl ChildRecord for DeviceProperty {
    const PARENT_COLUMN: &'static str = "device_id";
}
