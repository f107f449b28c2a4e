use super::{ChildRecord, PgQuery, Record};
use crate::sql::Table;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One entry in the property schema of a device type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TypeProperty {
    #[serde(default)]
    pub id: String,
    pub type_id: String,
    pub name: String,
    /// Free-form tag such as "string", "float" or "bool". Not validated.
    pub data_type: String,
    #[serde(default)]
    pub required: bool,
}

impl Record for TypeProperty {
    const ENTITY: &'static str = "type property";
    const TABLE: Table = Table {
        name: "type_properties",
        columns: &["id", "type_id", "name", "data_type", "required"],
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.type_id)
            .bind(&self.name)
            .bind(&self.data_type)
            .bind(self.required)
    }
}

impl ChildRecord for TypeProperty {
    const PARENT_COLUMN: &'static str = "type_id";
}
