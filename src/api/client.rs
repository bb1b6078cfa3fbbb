use std::time::Duration;

use alloy::primitives::Address;
use reqwest::{Client, Response};
use tracing::{debug, info};

use super::listing::Listing;
use super::proposal::{Origin, ProposeTransactionBody};
use crate::address::to_checksum;
use crate::error::{ApiErrorBody, Error, Result};
use crate::types::SignedTransaction;

/// Public Safe client gateway
pub const DEFAULT_SAFE_API_URL: &str = "https://safe-client.safe.global";

/// Name carried in the `origin` of every proposal
pub const DEFAULT_ORIGIN_NAME: &str = "SafeProposal Creation";

/// Deadline applied to each gateway request
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(60);

/// Where the gateway lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SafeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SAFE_API_URL.to_string(),
            timeout: DEFAULT_API_TIMEOUT,
        }
    }
}

impl SafeApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the Safe client gateway
#[derive(Debug, Clone)]
pub struct SafeApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl SafeApiClient {
    pub fn new(config: SafeApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn propose_url(&self, chain_id: u64, safe: Address) -> String {
        format!(
            "{}/v1/chains/{chain_id}/transactions/{}/propose",
            self.base_url,
            to_checksum(&safe)
        )
    }

    pub fn multisig_url(&self, chain_id: u64, safe: Address) -> String {
        format!(
            "{}/v1/chains/{chain_id}/safes/{}/multisig-transactions/raw",
            self.base_url,
            to_checksum(&safe)
        )
    }

    pub fn history_url(&self, chain_id: u64, safe: Address) -> String {
        format!(
            "{}/v1/chains/{chain_id}/safes/{}/transactions/history/",
            self.base_url,
            to_checksum(&safe)
        )
    }

    /// Submits a signed transaction as a proposal
    ///
    /// A single attempt is made. Any status other than 200 or 201 comes back
    /// as [`Error::Api`] with the response body attached.
    pub async fn propose(&self, signed: &SignedTransaction, origin: &Origin) -> Result<()> {
        let url = self.propose_url(signed.chain_id(), signed.safe());
        let body = ProposeTransactionBody::new(signed, origin)?;
        debug!(%url, nonce = %body.nonce, "posting proposal");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error("proposal", e))?;
        let status = response.status().as_u16();
        let text = self.read_body("proposal", response).await?;
        check_status(status, &text)?;

        info!(
            safe = %to_checksum(&signed.safe()),
            safe_tx_hash = %signed.safe_tx_hash(),
            status,
            "proposal accepted"
        );
        Ok(())
    }

    /// Lists queued multisig transactions of a Safe
    pub async fn list_multisig(&self, chain_id: u64, safe: Address) -> Result<Listing> {
        self.fetch_listing(&self.multisig_url(chain_id, safe)).await
    }

    /// Lists the executed transaction history of a Safe
    pub async fn history(&self, chain_id: u64, safe: Address) -> Result<Listing> {
        self.fetch_listing(&self.history_url(chain_id, safe)).await
    }

    /// Fetches any listing URL, including a page's `next` link
    pub async fn fetch_listing(&self, url: &str) -> Result<Listing> {
        debug!(%url, "fetching listing");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error("listing", e))?;
        let status = response.status().as_u16();
        let text = self.read_body("listing", response).await?;
        check_status(status, &text)?;
        Listing::from_json(&text)
    }

    async fn read_body(&self, what: &'static str, response: Response) -> Result<String> {
        response
            .text()
            .await
            .map_err(|e| self.transport_error(what, e))
    }

    fn transport_error(&self, what: &'static str, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                what,
                after: self.timeout,
            }
        } else {
            Error::Http(err)
        }
    }
}

/// Maps a gateway response status to success or [`Error::Api`]
pub fn check_status(status: u16, body: &str) -> Result<()> {
    match status {
        200 | 201 => Ok(()),
        _ => Err(Error::Api {
            status,
            body: ApiErrorBody::from_raw(body),
        }),
    }
}
