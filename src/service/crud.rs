//! Generic CRUD service: open unit of work, one store call, commit.

use super::unit_of_work::{Intent, UnitOfWork};
use crate::error::AppError;
use crate::id::IdGenerator;
use crate::models::Record;
use crate::store::RecordStore;
use sqlx::PgPool;
use std::sync::Arc;

/// What update and delete do when no row has the given id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissPolicy {
    /// Succeed without effect.
    #[default]
    Ignore,
    /// Fail with `NotFound`.
    Report,
}

pub struct CrudService<R> {
    pool: PgPool,
    store: RecordStore<R>,
    policy: MissPolicy,
}

fn log_failure(entity: &str, op: &str, err: &AppError) {
    if err.is_not_found() {
        tracing::debug!(entity, op, error = %err, "record not found");
    } else {
        tracing::error!(entity, op, error = %err, "operation failed");
    }
}

impl<R: Record> CrudService<R> {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>, policy: MissPolicy) -> Self {
        CrudService {
            pool,
            store: RecordStore::new(ids),
            policy,
        }
    }

    pub async fn get_one(&self, id: &str) -> Result<R, AppError> {
        let mut work = UnitOfWork::begin(&self.pool, Intent::ReadOnly).await?;
        let record = self
            .store
            .get_one(work.conn(), id)
            .await
            .inspect_err(|e| log_failure(R::ENTITY, "get", e))?;
        work.commit().await?;
        Ok(record)
    }

    /// Lookup by an alternate unique column, e.g. an owner's email.
    pub async fn get_one_by(&self, column: &'static str, value: &str) -> Result<R, AppError> {
        let mut work = UnitOfWork::begin(&self.pool, Intent::ReadOnly).await?;
        let record = self
            .store
            .get_one_by(work.conn(), column, value)
            .await
            .inspect_err(|e| log_failure(R::ENTITY, "get_by", e))?;
        work.commit().await?;
        Ok(record)
    }

    /// All rows, or those whose `filter` column equals the value.
    pub async fn get_many(&self, filter: Option<(&'static str, &str)>) -> Result<Vec<R>, AppError> {
        let mut work = UnitOfWork::begin(&self.pool, Intent::ReadOnly).await?;
        let records = self
            .store
            .get_many(work.conn(), filter)
            .await
            .inspect_err(|e| log_failure(R::ENTITY, "list", e))?;
        work.commit().await?;
        Ok(records)
    }

    /// Insert; on return `record.id` holds the stored id (generated when it was empty).
    pub async fn create(&self, record: &mut R) -> Result<(), AppError> {
        let mut work = UnitOfWork::begin(&self.pool, Intent::ReadWrite).await?;
        self.store
            .create(work.conn(), record)
            .await
            .inspect_err(|e| log_failure(R::ENTITY, "create", e))?;
        work.commit().await?;
        tracing::info!(entity = R::ENTITY, id = record.id(), "created");
        Ok(())
    }

    pub async fn update(&self, record: &R) -> Result<(), AppError> {
        let mut work = UnitOfWork::begin(&self.pool, Intent::ReadWrite).await?;
        let affected = self
            .store
            .update(work.conn(), record)
            .await
            .inspect_err(|e| log_failure(R::ENTITY, "update", e))?;
        self.check_affected(affected, record.id())?;
        work.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut work = UnitOfWork::begin(&self.pool, Intent::ReadWrite).await?;
        let affected = self
            .store
            .delete(work.conn(), id)
            .await
            .inspect_err(|e| log_failure(R::ENTITY, "delete", e))?;
        self.check_affected(affected, id)?;
        work.commit().await?;
        Ok(())
    }

    fn check_affected(&self, affected: u64, id: &str) -> Result<(), AppError> {
        if affected == 0 {
            match self.policy {
                MissPolicy::Ignore => {
                    tracing::debug!(entity = R::ENTITY, id, "no row matched, ignoring");
                }
                MissPolicy::Report => {
                    return Err(AppError::NotFound(format!("{} '{}'", R::ENTITY, id)));
                }
            }
        }
        Ok(())
    }
}
