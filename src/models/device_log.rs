use super::{ChildRecord, PgQuery, Record};
use crate::sql::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Append-mostly history entry for a device. Deletable, never updated through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DeviceLog {
    #[serde(default)]
    pub id: String,
    pub device_id: String,
    pub log_type: String,
    pub note: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl Record for DeviceLog {
    const ENTITY: &'static str = "device log";
    const TABLE: Table = Table {
        name: "device_logs",
        columns: &["id", "device_id", "log_type", "note", "created_at", "created_by"],
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
            .bind(&self.log_type)
            .bind(&self.note)
            .bind(self.created_at)
            .bind(&self.created_by)
    }
}

impl ChildRecord for DeviceLog {
    const PARENT_COLUMN: &'static str = "device_id";
}
