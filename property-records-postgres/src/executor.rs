use sqlx::postgres::PgArguments;
use sqlx::query::QueryScalar;
use sqlx::{PgPool, Postgres, Transaction};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle on one database transaction.
///
/// Repositories built from the same executor run every statement on the same
/// transaction. The transaction is taken out of the handle by `commit` or
/// `rollback`; statements issued afterwards fail with "Transaction has been
/// consumed". Dropping the last handle without committing rolls back.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        Ok(Self::new(pool.begin().await?))
    }

    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.rollback().await?;
        Ok(())
    }

    /// Runs an `INSERT ... RETURNING id` inside its own savepoint.
    ///
    /// A rejected insert is rolled back to the savepoint, so the transaction
    /// stays usable and later statements report their own outcome instead of
    /// "current transaction is aborted".
    pub async fn insert_in_savepoint<'q>(
        &self,
        query: QueryScalar<'q, Postgres, i64, PgArguments>,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let mut tx = self.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        sqlx::query("SAVEPOINT row_insert")
            .execute(&mut **transaction)
            .await?;
        match query.fetch_one(&mut **transaction).await {
            Ok(id) => {
                sqlx::query("RELEASE SAVEPOINT row_insert")
                    .execute(&mut **transaction)
                    .await?;
                Ok(id)
            }
            Err(e) => {
                sqlx::query("ROLLBACK TO SAVEPOINT row_insert")
                    .execute(&mut **transaction)
                    .await?;
                Err(e.into())
            }
        }
    }

    pub async fn is_active(&self) -> bool {
        self.tx.lock().await.is_some()
    }
}
