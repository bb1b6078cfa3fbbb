//! Deserializers for numbers the Safe services send either quoted or bare

use alloy::primitives::U256;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    String(String),
    Number(u64),
}

fn parse_u256<E: serde::de::Error>(s: &str) -> Result<U256, E> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix as u32)) {
        return Err(E::custom(format!("invalid integer {s:?}")));
    }
    U256::from_str_radix(digits, radix).map_err(|e| E::custom(format!("invalid integer {s:?}: {e}")))
}

/// Deserialize a U256 from a decimal string, a `0x` string, or a JSON number
pub fn deserialize_u256<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => parse_u256(&s),
        StringOrInt::Number(n) => Ok(U256::from(n)),
    }
}

/// Like [`deserialize_u256`] for optional, possibly null fields
pub fn deserialize_optional_u256<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrInt>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrInt::String(s)) => parse_u256(&s).map(Some),
        Some(StringOrInt::Number(n)) => Ok(Some(U256::from(n))),
    }
}

/// Deserialize a u64 from either a string or number
pub fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s.trim().parse::<u64>().map_err(serde::de::Error::custom),
        StringOrInt::Number(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Amounts {
        #[serde(deserialize_with = "deserialize_u256")]
        value: U256,
        #[serde(default, deserialize_with = "deserialize_optional_u256")]
        fee: Option<U256>,
        #[serde(deserialize_with = "deserialize_u64")]
        nonce: u64,
    }

    #[test]
    fn test_quoted_and_bare_numbers() {
        let quoted: Amounts =
            serde_json::from_str(r#"{"value":"1000000000000000000","fee":"0x10","nonce":"7"}"#).unwrap();
        assert_eq!(quoted.value, U256::from(1_000_000_000_000_000_000u64));
        assert_eq!(quoted.fee, Some(U256::from(16)));
        assert_eq!(quoted.nonce, 7);

        let bare: Amounts = serde_json::from_str(r#"{"value":0,"fee":null,"nonce":7}"#).unwrap();
        assert_eq!(bare.value, U256::ZERO);
        assert_eq!(bare.fee, None);
        assert_eq!(bare.nonce, 7);

        let missing_fee: Amounts = serde_json::from_str(r#"{"value":"1","nonce":0}"#).unwrap();
        assert_eq!(missing_fee.fee, None);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<Amounts>(r#"{"value":"lots","nonce":1}"#).is_err());
        assert!(serde_json::from_str::<Amounts>(r#"{"value":"1","nonce":"-1"}"#).is_err());
        for value in ["_", "1_000", "0x_", "0x"] {
            let body = format!(r#"{{"value":"{value}","nonce":1}}"#);
            assert!(serde_json::from_str::<Amounts>(&body).is_err(), "{value}");
        }
    }
}
