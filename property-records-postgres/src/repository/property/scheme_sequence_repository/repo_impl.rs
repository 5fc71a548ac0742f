use sqlx::PgPool;
use std::sync::Arc;

/// Per-scheme counters in the `scheme_sequence` table.
///
/// Runs on the pool rather than on a write transaction: a counter value is
/// committed as soon as it is handed out, so concurrent submissions never
/// wait on each other's writes. Values consumed by a rolled back write are
/// not reused.
pub struct SchemeSequenceRepositoryImpl {
    pool: Arc<PgPool>,
}

impl SchemeSequenceRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub(super) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
