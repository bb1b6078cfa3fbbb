//! Hex address parsing and formatting

use alloy::primitives::Address;

use crate::error::{Error, Result};

/// Sentinel meaning "native token / no refund receiver"
pub const NATIVE_TOKEN_ADDRESS: Address = Address::ZERO;

/// Returns true when `input` is an optional `0x` prefix followed by exactly 40 hex digits.
///
/// Mixed case is accepted and the EIP-55 checksum is not enforced.
pub fn is_hex_address(input: &str) -> bool {
    let digits = strip_hex_prefix(input);
    digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parses a hex address, rejecting anything that is not 20 bytes of hex
pub fn parse_address(input: &str) -> Result<Address> {
    let trimmed = input.trim();
    if !is_hex_address(trimmed) {
        return Err(Error::InvalidAddress(input.to_string()));
    }
    let mut bytes = [0u8; 20];
    alloy::hex::decode_to_slice(strip_hex_prefix(trimmed), &mut bytes)
        .map_err(|_| Error::InvalidAddress(input.to_string()))?;
    Ok(Address::from(bytes))
}

/// Formats an address with its EIP-55 checksum
pub fn to_checksum(address: &Address) -> String {
    address.to_checksum(None)
}

pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}
