//! Generic record store: one table, parameterized statements, caller-owned unit of work.
//!
//! Every operation takes an open connection (normally `&mut *tx` of a transaction the
//! service opened). The store never begins, commits or rolls back.

use crate::error::AppError;
use crate::id::IdGenerator;
use crate::models::Record;
use crate::sql::{delete, insert, select_by, select_list, update};
use sqlx::PgConnection;
use std::marker::PhantomData;
use std::sync::Arc;

pub struct RecordStore<R> {
    ids: Arc<dyn IdGenerator>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordStore<R> {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        RecordStore {
            ids,
            _record: PhantomData,
        }
    }

    /// Fetch one row by primary key. `NotFound` when no row matches.
    pub async fn get_one(&self, conn: &mut PgConnection, id: &str) -> Result<R, AppError> {
        self.get_one_by(conn, R::TABLE.pk(), id).await
    }

    /// Fetch one row by an alternate key column. When the key is duplicated the lowest id wins.
    pub async fn get_one_by(
        &self,
        conn: &mut PgConnection,
        column: &'static str,
        value: &str,
    ) -> Result<R, AppError> {
        debug_assert!(R::TABLE.has_column(column), "{} has no column {}", R::ENTITY, column);
        let sql = select_by(&R::TABLE, column);
        tracing::debug!(sql = %sql, value, "query");
        sqlx::query_as::<_, R>(&sql)
            .bind(value)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} with {} '{}'", R::ENTITY, column, value)))
    }

    /// All rows, or rows whose `filter` column equals the value. Empty when nothing matches.
    pub async fn get_many(
        &self,
        conn: &mut PgConnection,
        filter: Option<(&'static str, &str)>,
    ) -> Result<Vec<R>, AppError> {
        let sql = select_list(&R::TABLE, filter.map(|(column, _)| column));
        tracing::debug!(sql = %sql, filter = ?filter, "query");
        let mut query = sqlx::query_as::<_, R>(&sql);
        if let Some((_, value)) = filter {
            query = query.bind(value);
        }
        Ok(query.fetch_all(&mut *conn).await?)
    }

    /// Insert the record. An empty id is replaced by a generated one, visible to the caller afterwards.
    pub async fn create(&self, conn: &mut PgConnection, record: &mut R) -> Result<(), AppError> {
        if record.id().is_empty() {
            let id = self.ids.generate()?;
            record.set_id(id);
        }
        let record: &R = record;
        let sql = insert(&R::TABLE);
        tracing::debug!(sql = %sql, id = record.id(), "query");
        record
            .bind_fields(sqlx::query(&sql).bind(record.id()))
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Overwrite every non-key column by id. Returns rows affected; zero is not an error here.
    pub async fn update(&self, conn: &mut PgConnection, record: &R) -> Result<u64, AppError> {
        let sql = update(&R::TABLE);
        tracing::debug!(sql = %sql, id = record.id(), "query");
        let result = record
            .bind_fields(sqlx::query(&sql).bind(record.id()))
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns rows affected; zero is not an error here.
    pub async fn delete(&self, conn: &mut PgConnection, id: &str) -> Result<u64, AppError> {
        let sql = delete(&R::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}
