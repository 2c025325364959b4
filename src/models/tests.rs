use super::{RecordPatch, TransactionRecord};

use anyhow::Result;
use serde_json::json;

#[test]
fn test_record_serializes_with_wire_field_names() -> Result<()> {
    let record = TransactionRecord {
        id: None,
        name: "Juan Garcia".to_string(),
        email: "ab12cd34@example.com".to_string(),
        balance: 0.0,
        account_number: "0000001234".to_string(),
    };

    let value = serde_json::to_value(&record)?;

    assert_eq!(value, json!({
        "nombre": "Juan Garcia",
        "email": "ab12cd34@example.com",
        "saldo": 0.0,
        "numeroCuenta": "0000001234"
    }));

    Ok(())
}

#[test]
fn test_record_deserializes_collaborator_response() -> Result<()> {
    let body = json!({
        "id": "17",
        "nombre": "Maria Lopez",
        "email": "deadbeef@example.com",
        "saldo": 250.5,
        "numeroCuenta": "9000000001"
    });

    let record: TransactionRecord = serde_json::from_value(body)?;

    assert_eq!(record.id.as_deref(), Some("17"));
    assert_eq!(record.name, "Maria Lopez");
    assert_eq!(record.email, "deadbeef@example.com");
    assert_eq!(record.balance, 250.5);
    assert_eq!(record.account_number, "9000000001");

    Ok(())
}

#[test]
fn test_patch_serializes_only_the_changed_field() -> Result<()> {
    let balance_patch = serde_json::to_value(RecordPatch::balance(1000.0))?;
    let account_patch = serde_json::to_value(RecordPatch::account_number("0000000042"))?;

    assert_eq!(balance_patch, json!({ "saldo": 1000.0 }));
    assert_eq!(account_patch, json!({ "numeroCuenta": "0000000042" }));

    Ok(())
}
