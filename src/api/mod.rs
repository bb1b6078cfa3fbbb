//! Safe client gateway: proposal submission and transaction listings

mod client;
mod listing;
mod proposal;
pub(crate) mod serde_helpers;

pub use client::{
    check_status, SafeApiClient, SafeApiConfig, DEFAULT_API_TIMEOUT, DEFAULT_ORIGIN_NAME,
    DEFAULT_SAFE_API_URL,
};
pub use listing::{
    AddressInfo, Confirmation, ExecutionInfo, HistoryItem, HistoryTransaction, Listing,
    MultisigTransaction, Page, PageInfo, SafeAppInfo, TxInfo,
};
pub use proposal::{Origin, ProposeTransactionBody};
