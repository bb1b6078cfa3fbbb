//! Error types for safe-proposer

use std::fmt;
use std::time::Duration;

use alloy::primitives::U256;
use thiserror::Error;

/// Result type alias for safe-proposer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Body returned by the Safe API alongside a non-success status
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    /// Body parsed as JSON
    Json(serde_json::Value),
    /// Body that was not valid JSON, kept verbatim
    Text(String),
}

impl ApiErrorBody {
    /// Parses a raw response body, keeping it as text when it is not JSON
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => ApiErrorBody::Json(value),
            Err(_) => ApiErrorBody::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorBody::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => write!(f, "error response:\n{pretty}"),
                Err(_) => write!(f, "error response: {value}"),
            },
            ApiErrorBody::Text(text) => write!(f, "failed to parse error body: {text}"),
        }
    }
}

/// Errors that can occur while building, signing and proposing Safe transactions
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed hex address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Malformed hex payload (calldata, salt, key, init code)
    #[error("Invalid hex for {what}: {reason}")]
    InvalidHex { what: &'static str, reason: String },

    /// Unparsable integer (value, nonce)
    #[error("Invalid {what}: {input}")]
    InvalidInteger { what: &'static str, input: String },

    /// Operation code other than 0 (Call) or 1 (DelegateCall)
    #[error("Invalid operation {0}: expected 0 (Call) or 1 (DelegateCall)")]
    InvalidOperation(u8),

    /// Deployment value that CreateCall cannot fund when reached by Call
    #[error("Cannot forward {value} wei to a deployment by Call; use DelegateCall so the Safe funds it")]
    UnfundedDeployment { value: U256 },

    /// Salt longer than 32 bytes or otherwise unusable
    #[error("Invalid salt: {0}")]
    InvalidSalt(String),

    /// The operator declined a generated salt
    #[error("Generated salt {0} was not confirmed")]
    SaltRejected(String),

    /// Undecryptable keystore or malformed private key
    #[error("Key material error: {0}")]
    KeyMaterial(String),

    /// Signature generation failed
    #[error("Failed to sign: {0}")]
    Signing(String),

    /// Non-success status from the Safe API
    #[error("HTTP {status}, {body}")]
    Api { status: u16, body: ApiErrorBody },

    /// Transport failure talking to the Safe API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A network call did not finish before its deadline
    #[error("Timed out after {after:?} waiting for {what}")]
    Timeout { what: &'static str, after: Duration },

    /// Response body did not match the expected schema
    #[error("Failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    /// Failed to connect to the RPC provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Failed to fetch data from the blockchain
    #[error("Failed to fetch {what}: {reason}")]
    Fetch { what: &'static str, reason: String },

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>> for Error {
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<alloy::contract::Error> for Error {
    fn from(err: alloy::contract::Error) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<alloy::signers::Error> for Error {
    fn from(err: alloy::signers::Error) -> Self {
        Error::Signing(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for Error {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        Error::KeyMaterial(err.to_string())
    }
}
