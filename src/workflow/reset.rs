use tracing::debug;

use crate::client::ApiClient;
use crate::workflow::VerificationError;

/// Empties the collaborator's collection before a scenario runs.
///
/// Lists every stored record, deletes each by id, then lists again and fails
/// with [`VerificationError::ResetIncomplete`] unless the collection is empty.
/// Invoked synchronously at the start of every scenario; safe to invoke on an
/// already-empty collection.
pub async fn reset(client: &ApiClient) -> Result<(), VerificationError> {
    let existing = client.list().await?;

    debug!("Reset is removing [{}] records", existing.len());

    for record in existing {
        if let Some(id) = record.id {
            client.delete(&id).await?;
        }
    }

    let remaining = client.list().await?;

    if !remaining.is_empty() {
        return Err(VerificationError::ResetIncomplete {
            remaining: remaining.len()
        });
    }

    Ok(())
}
