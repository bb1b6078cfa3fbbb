//! Parsing of operator-supplied integers and hex payloads
//!
//! Everything here runs before any network or signing work, so a bad flag
//! fails fast with an input error.

use alloy::primitives::{Bytes, U256};

use crate::address::strip_hex_prefix;
use crate::error::{Error, Result};
use crate::types::Operation;

/// Parses a native-token amount given as decimal or `0x`-prefixed hex
pub fn parse_value(input: &str) -> Result<U256> {
    let s = input.trim();
    let invalid = || Error::InvalidInteger {
        what: "value",
        input: input.to_string(),
    };

    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    parse_digits(digits, radix).ok_or_else(invalid)
}

/// Parses a nonce override in any integer base
///
/// `0x` selects hex, `0o` octal, `0b` binary; anything else is decimal.
pub fn parse_nonce(input: &str) -> Result<U256> {
    let s = input.trim();
    let lower = s.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };

    parse_digits(digits, radix).ok_or_else(|| Error::InvalidInteger {
        what: "nonce",
        input: input.to_string(),
    })
}

fn parse_digits(digits: &str, radix: u64) -> Option<U256> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix as u32)) {
        return None;
    }
    U256::from_str_radix(digits, radix).ok()
}

/// Parses optional calldata
///
/// Absent calldata is empty. Supplied calldata must be non-empty hex of even
/// length, with or without a `0x` prefix.
pub fn parse_calldata(input: Option<&str>) -> Result<Bytes> {
    match input {
        None => Ok(Bytes::new()),
        Some(s) => decode_hex("calldata", s),
    }
}

/// Decodes a non-empty hex payload, naming it in any error
pub fn decode_hex(what: &'static str, input: &str) -> Result<Bytes> {
    let digits = strip_hex_prefix(input.trim());
    let invalid = |reason: &str| Error::InvalidHex {
        what,
        reason: reason.to_string(),
    };

    if digits.is_empty() {
        return Err(invalid("empty after 0x prefix"));
    }
    if digits.len() % 2 != 0 {
        return Err(invalid("odd number of hex digits"));
    }
    let bytes = alloy::hex::decode(digits).map_err(|e| invalid(&e.to_string()))?;
    Ok(Bytes::from(bytes))
}

/// Parses an operation code, accepting only 0 (Call) and 1 (DelegateCall)
pub fn parse_operation(code: u8) -> Result<Operation> {
    Operation::try_from(code)
}
