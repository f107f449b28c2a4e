//! Unit of work: a transaction opened with a declared intent.

use crate::error::AppError;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

/// Declared access mode of a unit of work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    ReadOnly,
    ReadWrite,
}

/// An open transaction. Dropping it without `commit` rolls back, so every early return
/// (including `?`) releases the connection cleanly.
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    pub async fn begin(pool: &PgPool, intent: Intent) -> Result<Self, AppError> {
        let mut tx = pool.begin().await?;
        if intent == Intent::ReadOnly {
            sqlx::query("SET TRANSACTION READ ONLY")
                .execute(&mut *tx)
                .await?;
        }
        tracing::trace!(?intent, "unit of work opened");
        Ok(UnitOfWork { tx })
    }

    /// Connection handle for store calls inside this unit of work.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(|err| {
            tracing::error!(error = %err, "commit failed");
            AppError::Commit(err)
        })
    }

    /// Explicit rollback. Equivalent to dropping, but reports the outcome.
    pub async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await.map_err(AppError::from)
    }
}
