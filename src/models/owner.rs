use super::{PgQuery, Record};
use crate::sql::Table;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Person a device is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Owner {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub campus_id: Option<String>,
    /// Unique in practice; not enforced here.
    pub email: String,
}

impl Owner {
    pub const CAMPUS_ID: &'static str = "campus_id";
    pub const EMAIL: &'static str = "email";
}

impl Record for Owner {
    const ENTITY: &'static str = "owner";
    const TABLE: Table = Table {
        name: "owners",
        columns: &["id", "first_name", "last_name", "campus_id", "email"],
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.campus_id)
            .bind(&self.email)
    }
}
