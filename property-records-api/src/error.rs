use std::fmt;
use thiserror::Error;

/// Boxed error as returned by the repository layer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Stage of an aggregate write at which a storage statement failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    /// The parent `property` insert. No child insert was attempted.
    Property,
    /// The `installments` / `service_charge` fan-out, or the commit that follows it.
    Children,
}

impl WriteStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteStage::Property => "property",
            WriteStage::Children => "children",
        }
    }
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row rejected because its value is already taken under a unique constraint.
///
/// Raised by backends that enforce the constraint themselves rather than
/// through a database driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate key value violates unique constraint \"{constraint}\": {value}")]
pub struct UniqueViolation {
    pub constraint: String,
    pub value: String,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence error at stage '{stage}': {cause}")]
    PersistenceError {
        stage: WriteStage,
        #[source]
        cause: BoxError,
    },

    #[error("Query error: {0}")]
    QueryError(#[source] BoxError),
}

impl RecordError {
    pub fn persistence(stage: WriteStage, cause: impl Into<BoxError>) -> Self {
        RecordError::PersistenceError {
            stage,
            cause: cause.into(),
        }
    }

    pub fn query(cause: impl Into<BoxError>) -> Self {
        RecordError::QueryError(cause.into())
    }

    /// Stage of a failed write, if this is a persistence failure.
    pub fn stage(&self) -> Option<WriteStage> {
        match self {
            RecordError::PersistenceError { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// A parent insert rejected for a duplicate `property_unique_id` lost a race
    /// against another writer of the same scheme and can be resubmitted.
    pub fn is_retryable(&self) -> bool {
        match self {
            RecordError::PersistenceError {
                stage: WriteStage::Property,
                cause,
            } => is_unique_violation(cause.as_ref()),
            _ => false,
        }
    }
}

fn is_unique_violation(cause: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    if cause.is::<UniqueViolation>() {
        return true;
    }
    is_sqlx_unique_violation(cause)
}

#[cfg(feature = "sqlx")]
fn is_sqlx_unique_violation(cause: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    match cause.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
        _ => false,
    }
}

#[cfg(not(feature = "sqlx"))]
fn is_sqlx_unique_violation(_cause: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    false
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RecordError {
    fn from(err: sqlx::Error) -> Self {
        RecordError::QueryError(Box::new(err))
    }
}

pub type RecordResult<T> = Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_error_reports_stage() {
        let err = RecordError::persistence(WriteStage::Children, "check constraint violated");
        assert_eq!(err.stage(), Some(WriteStage::Children));
        assert_eq!(
            err.to_string(),
            "Persistence error at stage 'children': check constraint violated"
        );
    }

    #[test]
    fn test_only_property_stage_unique_violation_is_retryable() {
        let violation = UniqueViolation {
            constraint: "property_property_unique_id_key".to_string(),
            value: "GREEN_VALLEY-00001".to_string(),
        };
        let duplicate = RecordError::persistence(WriteStage::Property, violation.clone());
        assert!(duplicate.is_retryable());

        let child = RecordError::persistence(WriteStage::Children, violation);
        assert!(!child.is_retryable());

        let generation = RecordError::GenerationError("scheme name is missing".to_string());
        assert!(!generation.is_retryable());
        assert_eq!(generation.stage(), None);
    }

    #[test]
    fn test_message_mentioning_unique_is_not_retryable() {
        let err = RecordError::persistence(
            WriteStage::Property,
            "value for unique_code failed a check constraint",
        );
        assert!(!err.is_retryable());
    }
}
