//! Encoding utilities for Safe transactions

mod eip712;
mod parse;

pub use eip712::{domain_separator, safe_tx_hash, safe_tx_struct_hash, typed_data_digest};
pub use parse::{decode_hex, parse_calldata, parse_nonce, parse_operation, parse_value};
