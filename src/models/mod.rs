//! Inventory records and the `Record` trait that lets one generic store serve all of them.

mod device;
mod device_log;
mod device_property;
mod device_type;
mod owner;
mod type_property;

pub use device::Device;
pub use device_log::DeviceLog;
pub use device_property::DeviceProperty;
pub use device_type::DeviceType;
pub use owner::Owner;
pub use type_property::TypeProperty;

use crate::sql::Table;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, Postgres};

/// Query with positional arguments, as produced by `sqlx::query`.
pub type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// A row of one table, addressed by an opaque text id.
pub trait Record:
    for<'r> FromRow<'r, PgRow> + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    /// Name used in logs and not-found messages.
    const ENTITY: &'static str;
    const TABLE: Table;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Binds every non-key column, in `TABLE.fields()` order.
    fn bind_fields<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

/// A record listed through its parent, e.g. the logs of one device.
pub trait ChildRecord: Record {
    const PARENT_COLUMN: &'static str;
}
