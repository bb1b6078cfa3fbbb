//! ECDSA signature generation for Safe transactions

use alloy::primitives::{Address, Bytes, Signature, B256};
use alloy::signers::SignerSync;

use crate::error::{Error, Result};

/// Signs a digest and formats it for Safe
///
/// Safe expects signatures in the format: r (32 bytes) || s (32 bytes) || v (1 byte)
/// where v is the recovery id plus 27. Signing is deterministic (RFC 6979).
pub fn sign_digest<S: SignerSync>(signer: &S, digest: B256) -> Result<Bytes> {
    let signature = signer.sign_hash_sync(&digest)?;

    // y_parity: false -> 27, true -> 28
    let v_byte = 27u8 + u8::from(signature.v());

    let mut sig_bytes = Vec::with_capacity(65);
    sig_bytes.extend_from_slice(&signature.r().to_be_bytes::<32>());
    sig_bytes.extend_from_slice(&signature.s().to_be_bytes::<32>());
    sig_bytes.push(v_byte);

    Ok(Bytes::from(sig_bytes))
}

/// Validates that a signature is 65 bytes with an ECDSA `v` of 27 or 28
pub fn validate_signature(signature: &[u8]) -> Result<()> {
    if signature.len() != 65 {
        return Err(Error::Signing(format!(
            "Invalid signature length: expected 65, got {}",
            signature.len()
        )));
    }

    let v = signature[64];
    if !matches!(v, 27 | 28) {
        return Err(Error::Signing(format!("Invalid signature v value: {}", v)));
    }

    Ok(())
}

/// Recovers the address that produced `signature` over `digest`
pub fn recover_signer(digest: B256, signature: &[u8]) -> Result<Address> {
    validate_signature(signature)?;
    let parsed = Signature::from_raw(signature).map_err(|e| Error::Signing(e.to_string()))?;
    parsed
        .recover_address_from_prehash(&digest)
        .map_err(|e| Error::Signing(e.to_string()))
}
