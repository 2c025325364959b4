use thiserror::Error;

use crate::client::ApiError;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Reset left [{remaining}] records in the collection")]
    ResetIncomplete {
        remaining: usize
    },
    #[error("Listing contains duplicate emails: [{unique}] unique out of [{total}]")]
    DuplicateEmails {
        unique: usize,
        total: usize
    },
    #[error("Field [{field}] read back as [{actual}], expected [{expected}]")]
    FieldMismatch {
        field: &'static str,
        expected: String,
        actual: String
    },
    #[error("Balance read back as [{actual}], expected [{expected}]")]
    BalanceMismatch {
        expected: f64,
        actual: f64
    }
}
