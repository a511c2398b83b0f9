use tracing::{info, warn};
use crate::errors::LoaderError;
use crate::models::transaction::TransactionRecord;

pub const LAST20_PATH: &str = "/api/transactions/last20";

/// HTTP client for the transaction backend.
#[derive(Clone)]
pub struct TransactionRepository {
    client: reqwest::Client,
    api_url: String,
}

impl TransactionRepository {
    pub fn new(api_url: String) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn last20_url(&self) -> String {
        format!("{}{}", self.api_url, LAST20_PATH)
    }

    /// `GET /api/transactions/last20`. Non-2xx statuses and bodies that are
    /// not an array of records are failures too.
    pub async fn get_last20(&self) -> Result<Vec<TransactionRecord>, LoaderError> {
        let url = self.last20_url();
        let res = match self.client.get(&url).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("GET {} failed: {}", url, e);
                return Err(e.into());
            }
        };
        let records = res
            .error_for_status()?
            .json::<Vec<TransactionRecord>>()
            .await?;
        info!("Fetched {} transactions from {}", records.len(), url);
        Ok(records)
    }
}
