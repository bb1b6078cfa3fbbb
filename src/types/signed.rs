//! A transaction record bound to its Safe, digest and owner signature

use alloy::primitives::{Address, Bytes, B256};
use alloy::signers::{Signer, SignerSync};

use super::TransactionRecord;
use crate::encoding::safe_tx_hash;
use crate::error::{Error, Result};
use crate::signing::{recover_signer, sign_digest};

/// A signed Safe transaction
///
/// The digest and signature can only be produced by [`SignedTransaction::sign`],
/// so they always match the record, Safe and chain they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    record: TransactionRecord,
    safe: Address,
    chain_id: u64,
    safe_tx_hash: B256,
    signature: Bytes,
    sender: Address,
}

impl SignedTransaction {
    /// Hashes `record` for `safe` on `chain_id` and signs the digest
    pub fn sign<S: Signer + SignerSync>(
        record: TransactionRecord,
        safe: Address,
        chain_id: u64,
        signer: &S,
    ) -> Result<Self> {
        let safe_tx_hash = safe_tx_hash(chain_id, safe, &record);
        let signature = sign_digest(signer, safe_tx_hash)?;
        Ok(Self {
            record,
            safe,
            chain_id,
            safe_tx_hash,
            signature,
            sender: signer.address(),
        })
    }

    pub fn record(&self) -> &TransactionRecord {
        &self.record
    }

    pub fn safe(&self) -> Address {
        self.safe
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn safe_tx_hash(&self) -> B256 {
        self.safe_tx_hash
    }

    pub fn signature(&self) -> &Bytes {
        &self.signature
    }

    /// Address of the owner that signed, submitted as the proposal's sender
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Recomputes the digest and checks the signature recovers to the sender
    pub fn verify(&self) -> Result<()> {
        let recomputed = safe_tx_hash(self.chain_id, self.safe, &self.record);
        if recomputed != self.safe_tx_hash {
            return Err(Error::Signing(format!(
                "safeTxHash mismatch: stored {}, recomputed {recomputed}",
                self.safe_tx_hash
            )));
        }
        let recovered = recover_signer(recomputed, &self.signature)?;
        if recovered != self.sender {
            return Err(Error::Signing(format!(
                "signature recovers to {recovered}, expected sender {}",
                self.sender
            )));
        }
        Ok(())
    }
}
