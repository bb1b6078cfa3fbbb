//! Response shapes returned when listing a Safe's transactions
//!
//! The gateway answers with one of two page layouts. The raw multisig endpoint
//! returns flat transaction records; the history endpoint returns items tagged
//! by `type`, only some of which carry a transaction. [`Listing::from_json`]
//! picks the layout by probing the first result for a `type` key, then decodes
//! that layout strictly.

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::Deserialize;
use serde_json::Value;

use super::serde_helpers::{deserialize_optional_u256, deserialize_u256, deserialize_u64};
use crate::error::{Error, Result};
use crate::types::Operation;

/// Pagination envelope shared by both layouts
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// One page of results
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(flatten)]
    pub info: PageInfo,
    pub results: Vec<T>,
}

/// A decoded listing response
#[derive(Debug, Clone)]
pub enum Listing {
    /// Flat page of multisig transaction records
    Multisig(Page<MultisigTransaction>),
    /// Page of history items, mixing transactions and labels
    History(Page<HistoryItem>),
    /// A page with no results, so no layout to detect
    Empty(PageInfo),
}

impl Listing {
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(|e| Error::Decode {
            what: "listing",
            reason: e.to_string(),
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let decode_err = |what: &'static str| {
            move |e: serde_json::Error| Error::Decode {
                what,
                reason: e.to_string(),
            }
        };

        let tagged = value
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Decode {
                what: "listing",
                reason: "missing results array".to_string(),
            })?
            .first()
            .map(|first| first.get("type").is_some());

        match tagged {
            None => serde_json::from_value(value)
                .map(Listing::Empty)
                .map_err(decode_err("page info")),
            Some(true) => serde_json::from_value(value)
                .map(Listing::History)
                .map_err(decode_err("transaction history")),
            Some(false) => serde_json::from_value(value)
                .map(Listing::Multisig)
                .map_err(decode_err("multisig transactions")),
        }
    }

    pub fn info(&self) -> &PageInfo {
        match self {
            Listing::Multisig(page) => &page.info,
            Listing::History(page) => &page.info,
            Listing::Empty(info) => info,
        }
    }

    /// Number of transaction entries, not counting history labels
    pub fn transaction_count(&self) -> usize {
        match self {
            Listing::Multisig(page) => page.results.len(),
            Listing::History(page) => page.transactions().count(),
            Listing::Empty(_) => 0,
        }
    }
}

impl Page<HistoryItem> {
    /// Transactions on this page, skipping date labels, labels and conflict headers
    pub fn transactions(&self) -> impl Iterator<Item = &HistoryTransaction> {
        self.results.iter().filter_map(HistoryItem::transaction)
    }
}

/// A multisig transaction record from the raw listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigTransaction {
    pub safe: Address,
    pub to: Address,
    #[serde(deserialize_with = "deserialize_u256")]
    pub value: U256,
    #[serde(default)]
    pub data: Option<Bytes>,
    pub operation: Operation,
    #[serde(default, deserialize_with = "deserialize_optional_u256")]
    pub safe_tx_gas: Option<U256>,
    #[serde(default, deserialize_with = "deserialize_optional_u256")]
    pub base_gas: Option<U256>,
    #[serde(default, deserialize_with = "deserialize_optional_u256")]
    pub gas_price: Option<U256>,
    #[serde(default)]
    pub gas_token: Option<Address>,
    #[serde(default)]
    pub refund_receiver: Option<Address>,
    #[serde(deserialize_with = "deserialize_u64")]
    pub nonce: u64,
    pub safe_tx_hash: B256,
    #[serde(default)]
    pub proposer: Option<Address>,
    #[serde(default)]
    pub executor: Option<Address>,
    #[serde(default)]
    pub is_executed: bool,
    #[serde(default)]
    pub is_successful: Option<bool>,
    #[serde(default)]
    pub transaction_hash: Option<B256>,
    #[serde(default)]
    pub submission_date: Option<String>,
    #[serde(default)]
    pub execution_date: Option<String>,
    #[serde(default)]
    pub confirmations_required: Option<u64>,
    #[serde(default)]
    pub confirmations: Vec<Confirmation>,
    #[serde(default)]
    pub origin: Option<String>,
}

/// An owner's confirmation of a multisig transaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub owner: Address,
    #[serde(default)]
    pub submission_date: Option<String>,
    #[serde(default)]
    pub signature: Option<Bytes>,
    #[serde(default)]
    pub signature_type: Option<String>,
}

/// An entry of the transaction history
#[derive(Debug, Clone, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum HistoryItem {
    Transaction {
        transaction: HistoryTransaction,
        #[serde(default)]
        conflict_type: Option<String>,
    },
    DateLabel {
        timestamp: u64,
    },
    Label {
        label: String,
    },
    ConflictHeader {
        nonce: u64,
    },
}

impl HistoryItem {
    pub fn transaction(&self) -> Option<&HistoryTransaction> {
        match self {
            HistoryItem::Transaction { transaction, .. } => Some(transaction),
            _ => None,
        }
    }
}

/// The transaction carried by a `TRANSACTION` history item
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryTransaction {
    pub id: String,
    #[serde(default)]
    pub tx_hash: Option<B256>,
    #[serde(default)]
    pub timestamp: Option<u64>,
    pub tx_status: String,
    pub tx_info: TxInfo,
    #[serde(default)]
    pub execution_info: Option<ExecutionInfo>,
    #[serde(default)]
    pub safe_app_info: Option<SafeAppInfo>,
}

/// Address with optional display metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub value: Address,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo_uri: Option<String>,
}

/// What a history transaction did
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum TxInfo {
    Transfer {
        sender: AddressInfo,
        recipient: AddressInfo,
        direction: String,
        transfer_info: Value,
    },
    Custom {
        to: AddressInfo,
        #[serde(default)]
        data_size: Option<String>,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        method_name: Option<String>,
        #[serde(default)]
        is_cancellation: bool,
    },
    SettingsChange {
        #[serde(default)]
        data_decoded: Option<Value>,
    },
    Creation {
        creator: AddressInfo,
        transaction_hash: B256,
        #[serde(default)]
        implementation: Option<AddressInfo>,
        #[serde(default)]
        factory: Option<AddressInfo>,
    },
    /// Swap orders, bridge transfers and other types shown only by name
    #[serde(other)]
    Other,
}

impl TxInfo {
    pub fn kind(&self) -> &'static str {
        match self {
            TxInfo::Transfer { .. } => "Transfer",
            TxInfo::Custom { .. } => "Custom",
            TxInfo::SettingsChange { .. } => "SettingsChange",
            TxInfo::Creation { .. } => "Creation",
            TxInfo::Other => "Other",
        }
    }
}

/// How a history transaction was executed
#[derive(Debug, Clone, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ExecutionInfo {
    Multisig {
        nonce: u64,
        confirmations_required: u64,
        confirmations_submitted: u64,
        #[serde(default)]
        missing_signers: Option<Vec<AddressInfo>>,
    },
    Module {
        address: AddressInfo,
    },
}

/// Safe App that created a transaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeAppInfo {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub logo_uri: Option<String>,
}
