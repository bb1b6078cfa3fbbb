//! EIP-712 hashing for the Safe `SafeTx` message type

use alloy::primitives::{keccak256, Address, B256, U256};
use tracing::debug;

use crate::contracts::{DOMAIN_SEPARATOR_TYPEHASH, SAFE_TX_TYPEHASH};
use crate::types::TransactionRecord;

const WORD: usize = 32;

fn address_word(address: Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(address.as_slice());
    word
}

/// Computes the domain separator for a Safe
///
/// domain_separator = keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH, chainId, safeAddress))
///
/// The Safe domain has no name or version fields.
pub fn domain_separator(chain_id: u64, safe_address: Address) -> B256 {
    let mut encoded = Vec::with_capacity(3 * WORD);

    encoded.extend_from_slice(&DOMAIN_SEPARATOR_TYPEHASH);
    encoded.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    encoded.extend_from_slice(&address_word(safe_address));

    assert_eq!(encoded.len(), 3 * WORD, "domain encoding must be three words");
    keccak256(&encoded)
}

/// Computes the struct hash for SafeTx
///
/// structHash = keccak256(abi.encode(
///     SAFE_TX_TYPEHASH,
///     to, value, keccak256(data), operation,
///     safeTxGas, baseGas, gasPrice, gasToken, refundReceiver, nonce
/// ))
pub fn safe_tx_struct_hash(record: &TransactionRecord) -> B256 {
    let mut encoded = Vec::with_capacity(11 * WORD);

    encoded.extend_from_slice(&SAFE_TX_TYPEHASH);
    encoded.extend_from_slice(&address_word(record.to));
    encoded.extend_from_slice(&record.value.to_be_bytes::<32>());

    // dynamic `bytes` are folded into their content hash
    encoded.extend_from_slice(keccak256(&record.data).as_slice());

    let mut op_word = [0u8; WORD];
    op_word[31] = record.operation.as_u8();
    encoded.extend_from_slice(&op_word);

    encoded.extend_from_slice(&record.safe_tx_gas.to_be_bytes::<32>());
    encoded.extend_from_slice(&record.base_gas.to_be_bytes::<32>());
    encoded.extend_from_slice(&record.gas_price.to_be_bytes::<32>());
    encoded.extend_from_slice(&address_word(record.gas_token));
    encoded.extend_from_slice(&address_word(record.refund_receiver));
    encoded.extend_from_slice(&record.nonce.to_be_bytes::<32>());

    assert_eq!(encoded.len(), 11 * WORD, "SafeTx encoding must be eleven words");
    keccak256(&encoded)
}

/// Computes the final EIP-712 digest to sign
///
/// hash = keccak256("\x19\x01" || domainSeparator || structHash)
pub fn typed_data_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut encoded = Vec::with_capacity(2 + 2 * WORD);

    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(domain_separator.as_slice());
    encoded.extend_from_slice(struct_hash.as_slice());

    assert_eq!(encoded.len(), 66);
    keccak256(&encoded)
}

/// Computes the `safeTxHash` a Safe at `safe_address` on `chain_id` will verify
pub fn safe_tx_hash(chain_id: u64, safe_address: Address, record: &TransactionRecord) -> B256 {
    let domain = domain_separator(chain_id, safe_address);
    let struct_hash = safe_tx_struct_hash(record);
    let digest = typed_data_digest(domain, struct_hash);
    debug!(%domain, %struct_hash, %digest, chain_id, safe = %safe_address, "computed safeTxHash");
    digest
}
