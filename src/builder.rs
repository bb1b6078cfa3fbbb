//! Turning operator input into a complete [`TransactionRecord`]

use std::future::Future;

use alloy::primitives::{Address, Bytes, U256};
use tracing::{debug, warn};

use crate::address::parse_address;
use crate::encoding::{parse_calldata, parse_nonce, parse_operation, parse_value};
use crate::error::Result;
use crate::types::{Operation, TransactionRecord};

/// Source of a Safe's current on-chain nonce
pub trait NonceSource {
    /// Reads the nonce the next executed transaction must carry
    fn safe_nonce(&self) -> impl Future<Output = Result<U256>> + Send;
}

/// Unparsed proposal fields as they arrive from flags or config
#[derive(Debug, Clone, Copy, Default)]
pub struct ProposalInputs<'a> {
    pub to: &'a str,
    pub value: &'a str,
    pub calldata: Option<&'a str>,
    pub operation: u8,
    pub nonce: Option<&'a str>,
}

/// A validated proposal whose nonce may still come from chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRequest {
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub operation: Operation,
    /// Explicit nonce; overrides the on-chain value when set
    pub nonce: Option<U256>,
}

impl ProposalRequest {
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>, operation: Operation) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            nonce: None,
        }
    }

    /// Sets an explicit nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Validates every raw field before any network or signing work happens
    pub fn parse(inputs: &ProposalInputs<'_>) -> Result<Self> {
        let to = parse_address(inputs.to)?;
        let value = parse_value(inputs.value)?;
        let data = parse_calldata(inputs.calldata)?;
        let operation = parse_operation(inputs.operation)?;
        let nonce = inputs.nonce.map(parse_nonce).transpose()?;

        Ok(Self {
            to,
            value,
            data,
            operation,
            nonce,
        })
    }

    /// Fills in the nonce and defaults, producing the record to hash
    ///
    /// `source` is consulted only when no explicit nonce was given.
    pub async fn resolve<N: NonceSource>(self, source: &N) -> Result<TransactionRecord> {
        let nonce = match self.nonce {
            Some(nonce) => {
                warn!(
                    %nonce,
                    "using explicit nonce; collisions with pending proposals are not checked"
                );
                nonce
            }
            None => {
                let nonce = source.safe_nonce().await?;
                debug!(%nonce, "using on-chain nonce");
                nonce
            }
        };

        Ok(TransactionRecord::new(self.to, self.value, self.data, self.operation).with_nonce(nonce))
    }
}
