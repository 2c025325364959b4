use std::collections::HashSet;

use rand::RngExt;
use rand::rngs::ThreadRng;
use uuid::Uuid;

use crate::models::TransactionRecord;

const FIRST_NAMES: [&str; 8] = ["Juan", "Maria", "Carlos", "Ana", "Pedro", "Laura", "Miguel", "Sofia"];
const LAST_NAMES: [&str; 8] = ["Garcia", "Rodriguez", "Martinez", "Lopez", "Gonzalez", "Perez", "Sanchez", "Ramirez"];

const EMAIL_DOMAIN: &str = "@example.com";
const EMAIL_TOKEN_LENGTH: usize = 8;
const ACCOUNT_NUMBER_DIGITS: usize = 10;
const MAX_STARTING_BALANCE: f64 = 10_000.0;

/// Produces randomized transaction fixtures for submission to the collaborator.
///
/// All output is syntactically valid; the only cross-record guarantee is the
/// pairwise email uniqueness of [`unique_batch`](Self::unique_batch). Pure data
/// production, no side effects.
pub struct FixtureGenerator {
    rng: ThreadRng,
}

impl FixtureGenerator {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }

    /// A "first last" display name, both halves drawn uniformly and
    /// independently from fixed pools. Collisions across calls are acceptable.
    pub fn name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())];
        format!("{first} {last}")
    }

    /// A random email built from the first 8 hex characters of a v4 UUID, so
    /// collisions are rare enough that retry loops terminate in practice.
    pub fn email(&mut self) -> String {
        let token = Uuid::new_v4().simple().to_string();
        format!("{}{}", &token[..EMAIL_TOKEN_LENGTH], EMAIL_DOMAIN)
    }

    /// A 10-digit zero-padded decimal account number in [0, 10^10).
    pub fn account_number(&mut self) -> String {
        let number = self.rng.random_range(0..10u64.pow(ACCOUNT_NUMBER_DIGITS as u32));
        format!("{number:0width$}", width = ACCOUNT_NUMBER_DIGITS)
    }

    /// A full record with a random starting balance in [0, 10000).
    pub fn record(&mut self) -> TransactionRecord {
        let balance = self.rng.random_range(0.0..MAX_STARTING_BALANCE);
        self.record_with_balance(balance)
    }

    /// A full record with a fixed starting balance.
    pub fn record_with_balance(&mut self, balance: f64) -> TransactionRecord {
        TransactionRecord {
            id: None,
            name: self.name(),
            email: self.email(),
            balance,
            account_number: self.account_number(),
        }
    }

    /// Generates `count` records whose emails are pairwise distinct, retrying
    /// email generation on collision.
    pub fn unique_batch(&mut self, count: usize) -> Vec<TransactionRecord> {
        let mut emails = HashSet::with_capacity(count);
        let mut records = Vec::with_capacity(count);

        while records.len() < count {
            let mut record = self.record();

            while !emails.insert(record.email.clone()) {
                record.email = self.email();
            }

            records.push(record);
        }

        records
    }
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new()
    }
}
