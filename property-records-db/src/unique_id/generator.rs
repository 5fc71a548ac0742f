use async_trait::async_trait;
use parking_lot::Mutex;
use property_records_api::{RecordError, RecordResult};
use std::collections::HashMap;

use super::rule::{format_unique_id, parse_unique_id, scheme_prefix};

/// Source of `property_unique_id` values.
///
/// Implementations must never hand out the same identifier twice for a
/// scheme, including under concurrent calls, and must fail with
/// `GenerationError` before touching any table when the scheme is absent or
/// malformed.
#[async_trait]
pub trait UniqueIdGenerator: Send + Sync {
    async fn generate(&self, scheme_name: Option<&str>) -> RecordResult<String>;
}

/// Generator keeping one counter per scheme prefix behind a mutex.
#[derive(Default)]
pub struct InMemoryUniqueIdGenerator {
    counters: Mutex<HashMap<String, u64>>,
}

impl InMemoryUniqueIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the counters from identifiers that are already assigned.
    pub fn with_existing<S: AsRef<str>>(existing: &[S]) -> Self {
        let mut counters: HashMap<String, u64> = HashMap::new();
        for (prefix, counter) in existing.iter().filter_map(|id| parse_unique_id(id.as_ref())) {
            let entry = counters.entry(prefix.to_string()).or_insert(0);
            *entry = (*entry).max(counter);
        }
        Self {
            counters: Mutex::new(counters),
        }
    }
}

#[async_trait]
impl UniqueIdGenerator for InMemoryUniqueIdGenerator {
    async fn generate(&self, scheme_name: Option<&str>) -> RecordResult<String> {
        let prefix = scheme_prefix(scheme_name)?;
        let mut counters = self.counters.lock();
        let counter = counters.entry(prefix.clone()).or_insert(0);
        *counter = counter.checked_add(1).ok_or_else(|| {
            RecordError::GenerationError(format!("counter for scheme '{prefix}' is exhausted"))
        })?;
        Ok(format_unique_id(&prefix, *counter))
    }
}
