use super::{PgQuery, Record};
use crate::sql::Table;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A tracked piece of equipment. `type_id` and `owner_id` are not checked at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Device {
    #[serde(default)]
    pub id: String,
    pub serial_number: String,
    pub name: String,
    pub type_id: String,
    pub owner_id: String,
    pub purchase_date: NaiveDate,
    /// Free-form, e.g. "active".
    pub status: String,
}

impl Record for Device {
    const ENTITY: &'static str = "device";
    const TABLE: Table = Table {
        name: "devices",
        columns: &[
            "id",
            "serial_number",
            "name",
            "type_id",
            "owner_id",
            "purchase_date",
            "status",
        ],
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.serial_number)
            .bind(&self.name)
            .bind(&self.type_id)
            .bind(&self.owner_id)
            .bind(self.purchase_date)
            .bind(&self.status)
    }
}
