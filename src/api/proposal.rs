//! Wire body for proposing a transaction to the Safe client gateway

use serde::{Deserialize, Serialize};

use crate::address::to_checksum;
use crate::error::{Error, Result};
use crate::types::SignedTransaction;

/// Free-form tag identifying where a proposal came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub url: String,
    pub name: String,
}

impl Origin {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// Body of `POST /v1/chains/{chainId}/transactions/{safe}/propose`
///
/// Integers are decimal strings and byte fields `0x`-prefixed hex; `origin`
/// is itself a JSON document carried as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeTransactionBody {
    pub to: String,
    pub value: String,
    pub data: String,
    pub operation: u8,
    pub safe_tx_gas: String,
    pub base_gas: String,
    pub gas_price: String,
    pub gas_token: String,
    pub refund_receiver: String,
    pub nonce: String,
    pub safe_tx_hash: String,
    pub sender: String,
    pub signature: String,
    pub origin: String,
}

impl ProposeTransactionBody {
    pub fn new(signed: &SignedTransaction, origin: &Origin) -> Result<Self> {
        let record = signed.record();
        let origin = serde_json::to_string(origin)
            .map_err(|e| Error::Encoding(format!("origin: {e}")))?;

        Ok(Self {
            to: to_checksum(&record.to),
            value: record.value.to_string(),
            data: alloy::hex::encode_prefixed(&record.data),
            operation: record.operation.as_u8(),
            safe_tx_gas: record.safe_tx_gas.to_string(),
            base_gas: record.base_gas.to_string(),
            gas_price: record.gas_price.to_string(),
            gas_token: to_checksum(&record.gas_token),
            refund_receiver: to_checksum(&record.refund_receiver),
            nonce: record.nonce.to_string(),
            safe_tx_hash: alloy::hex::encode_prefixed(signed.safe_tx_hash()),
            sender: to_checksum(&signed.sender()),
            signature: alloy::hex::encode_prefixed(signed.signature()),
            origin,
        })
    }
}
