use serde::{Deserialize, Serialize};

/// A single bank transaction record as the remote collaborator stores it.
///
/// Field names follow the collaborator's wire contract (`nombre`, `saldo`,
/// `numeroCuenta`). The `id` is assigned by the collaborator on creation and
/// is treated as opaque; it is absent on records that have not been submitted
/// yet and is therefore skipped when serializing a creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Collaborator-assigned identifier, the sole handle for read/update/delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display label, no uniqueness constraint.
    #[serde(rename = "nombre")]
    pub name: String,
    /// De-duplication key; pairwise distinct within any submitted batch.
    pub email: String,
    /// Monetary amount; the collaborator accepts any value, including negative.
    #[serde(rename = "saldo")]
    pub balance: f64,
    /// 10-digit zero-padded decimal string, leading zeros significant.
    #[serde(rename = "numeroCuenta")]
    pub account_number: String,
}

/// Partial-update body for PUT requests.
///
/// Only the fields that are set are serialized, so the request body carries
/// exactly the fields under change and the collaborator merges them into the
/// stored record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordPatch {
    #[serde(rename = "saldo", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(rename = "numeroCuenta", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

impl RecordPatch {
    pub fn balance(balance: f64) -> Self {
        Self {
            balance: Some(balance),
            ..Self::default()
        }
    }

    pub fn account_number(account_number: impl Into<String>) -> Self {
        Self {
            account_number: Some(account_number.into()),
            ..Self::default()
        }
    }
}
