use std::collections::HashSet;

use crate::models::TransactionRecord;
use crate::workflow::VerificationError;

/// Absolute tolerance for floating-point balance comparisons.
pub const BALANCE_TOLERANCE: f64 = 0.001;

/// Fails when the listing's email multiset contains any duplicate.
pub fn check_unique_emails(records: &[TransactionRecord]) -> Result<(), VerificationError> {
    let unique: HashSet<&str> = records.iter().map(|record| record.email.as_str()).collect();

    if unique.len() != records.len() {
        return Err(VerificationError::DuplicateEmails {
            unique: unique.len(),
            total: records.len()
        });
    }

    Ok(())
}

/// Compares a read-back balance against the value just written, within
/// [`BALANCE_TOLERANCE`].
pub fn check_balance(expected: f64, actual: f64) -> Result<(), VerificationError> {
    if (expected - actual).abs() > BALANCE_TOLERANCE {
        return Err(VerificationError::BalanceMismatch { expected, actual });
    }

    Ok(())
}

/// Compares a read-back string field for exact equality.
pub fn check_field(field: &'static str, expected: &str, actual: &str) -> Result<(), VerificationError> {
    if expected != actual {
        return Err(VerificationError::FieldMismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string()
        });
    }

    Ok(())
}
