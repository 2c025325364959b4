use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::client::ApiError;
use crate::models::{RecordPatch, TransactionRecord};

/// Typed client for the collaborator's transaction collection.
///
/// One method per documented operation, each validating the operation's single
/// success status before decoding the body. Calls are plain sequential awaits;
/// there is no retry policy and no timeout tuning.
pub struct ApiClient {
    http: Client,
    base_url: String
}

impl ApiClient {
    /// Creates a client rooted at the collection URL (trailing slashes ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: Client::new(),
            base_url
        }
    }

    /// GET `/`, returning the full collection.
    pub async fn list(&self) -> Result<Vec<TransactionRecord>, ApiError> {
        let response = self.http.get(&self.base_url).send().await?;
        let response = expect_status(response, "GET /", StatusCode::OK)?;

        Ok(response.json().await?)
    }

    /// POST `/` with a single record; the collaborator assigns the id.
    pub async fn create(&self, record: &TransactionRecord) -> Result<TransactionRecord, ApiError> {
        debug!("Creating record for [{}]", record.email);

        let response = self.http.post(&self.base_url).json(record).send().await?;
        let response = expect_status(response, "POST /", StatusCode::CREATED)?;

        Ok(response.json().await?)
    }

    /// POST `/` with an array of records in one call.
    pub async fn create_batch(&self, records: &[TransactionRecord]) -> Result<Vec<TransactionRecord>, ApiError> {
        debug!("Creating batch of [{}] records", records.len());

        let response = self.http.post(&self.base_url).json(records).send().await?;
        let response = expect_status(response, "POST / (batch)", StatusCode::CREATED)?;

        Ok(response.json().await?)
    }

    /// GET `/{id}`, returning a single record.
    pub async fn fetch(&self, id: &str) -> Result<TransactionRecord, ApiError> {
        let response = self.http.get(self.record_url(id)).send().await?;
        let response = expect_status(response, "GET /{id}", StatusCode::OK)?;

        Ok(response.json().await?)
    }

    /// PUT `/{id}` with a partial body; the collaborator merges the fields.
    pub async fn update(&self, id: &str, patch: &RecordPatch) -> Result<TransactionRecord, ApiError> {
        debug!("Updating record [{id}]");

        let response = self.http.put(self.record_url(id)).json(patch).send().await?;
        let response = expect_status(response, "PUT /{id}", StatusCode::OK)?;

        Ok(response.json().await?)
    }

    /// DELETE `/{id}`; the response body is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!("Deleting record [{id}]");

        let response = self.http.delete(self.record_url(id)).send().await?;
        expect_status(response, "DELETE /{id}", StatusCode::OK)?;

        Ok(())
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

fn expect_status(response: Response, operation: &'static str, expected: StatusCode) -> Result<Response, ApiError> {
    let status = response.status();

    if status != expected {
        return Err(ApiError::UnexpectedStatus { operation, expected, status });
    }

    Ok(response)
}
