use tracing::debug;

use crate::client::{ApiClient, ApiError};
use crate::fixtures::FixtureGenerator;
use crate::models::RecordPatch;
use crate::workflow::checks::{check_balance, check_field, check_unique_emails};
use crate::workflow::reset::reset;
use crate::workflow::VerificationError;

const BATCH_SIZE: usize = 10;
const DEPOSIT_AMOUNT: f64 = 1_000.0;
const WITHDRAWAL_AMOUNT: f64 = 500.0;
const OVERDRAW_STARTING_BALANCE: f64 = 100.0;
const OVERDRAW_WITHDRAWAL: f64 = 200.0;

/// The CRUD-verification scenario catalog.
///
/// Each scenario is independent, begins by [`reset`]ting the collaborator's
/// collection, and aborts on the first violated assertion. Scenarios never run
/// concurrently; the collaborator's stored records are the only state shared
/// between the steps of a single scenario.
pub struct Scenarios {
    client: ApiClient
}

impl Scenarios {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Batch-creates 10 records with pairwise-unique emails; the collaborator
    /// must answer the collection POST with a creation-success status.
    pub async fn batch_create_unique_emails(&self) -> Result<(), VerificationError> {
        reset(&self.client).await?;

        let mut generator = FixtureGenerator::new();
        let batch = generator.unique_batch(BATCH_SIZE);

        self.client.create_batch(&batch).await?;

        Ok(())
    }

    /// Seeds the collection with a generated batch, fetches the full listing
    /// and verifies the stored emails are still pairwise distinct.
    pub async fn listing_contains_no_duplicate_emails(&self) -> Result<(), VerificationError> {
        reset(&self.client).await?;

        let mut generator = FixtureGenerator::new();
        self.client.create_batch(&generator.unique_batch(BATCH_SIZE)).await?;

        let listed = self.client.list().await?;

        debug!("Listing returned [{}] records", listed.len());

        check_unique_emails(&listed)
    }

    /// Creates one record, rewrites its account number and reads it back,
    /// expecting exact string equality with the value just written.
    pub async fn account_number_update_round_trip(&self) -> Result<(), VerificationError> {
        reset(&self.client).await?;

        let mut generator = FixtureGenerator::new();
        let created = self.client.create(&generator.record()).await?;
        let id = created.id.ok_or(ApiError::MissingId)?;

        let new_account_number = generator.account_number();
        self.client.update(&id, &RecordPatch::account_number(new_account_number.clone())).await?;

        let fetched = self.client.fetch(&id).await?;

        check_field("numeroCuenta", &new_account_number, &fetched.account_number)
    }

    /// Creates a record with a zero balance, deposits, then withdraws, reading
    /// the balance back after each write and comparing within tolerance.
    pub async fn deposit_then_withdrawal_adjusts_balance(&self) -> Result<(), VerificationError> {
        reset(&self.client).await?;

        let mut generator = FixtureGenerator::new();
        let created = self.client.create(&generator.record_with_balance(0.0)).await?;
        let id = created.id.ok_or(ApiError::MissingId)?;

        self.client.update(&id, &RecordPatch::balance(DEPOSIT_AMOUNT)).await?;
        let after_deposit = self.client.fetch(&id).await?;
        check_balance(DEPOSIT_AMOUNT, after_deposit.balance)?;

        self.client.update(&id, &RecordPatch::balance(after_deposit.balance - WITHDRAWAL_AMOUNT)).await?;
        let after_withdrawal = self.client.fetch(&id).await?;
        check_balance(DEPOSIT_AMOUNT - WITHDRAWAL_AMOUNT, after_withdrawal.balance)?;

        Ok(())
    }

    /// Withdraws more than the starting balance. The collaborator enforces no
    /// overdraft rule: the write must succeed and the read-back must show the
    /// negative balance stored as-is.
    pub async fn overdraw_write_is_accepted(&self) -> Result<(), VerificationError> {
        reset(&self.client).await?;

        let mut generator = FixtureGenerator::new();
        let created = self.client.create(&generator.record_with_balance(OVERDRAW_STARTING_BALANCE)).await?;
        let id = created.id.ok_or(ApiError::MissingId)?;

        let overdrawn = OVERDRAW_STARTING_BALANCE - OVERDRAW_WITHDRAWAL;
        self.client.update(&id, &RecordPatch::balance(overdrawn)).await?;

        let after = self.client.fetch(&id).await?;

        check_balance(overdrawn, after.balance)
    }
}
