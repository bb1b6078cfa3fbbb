//! The canonical Safe transaction record

use alloy::primitives::{Address, Bytes, U256};

use super::Operation;
use crate::address::NATIVE_TOKEN_ADDRESS;

/// Fields of a proposed Safe transaction, as hashed by the `SafeTx` EIP-712 type
///
/// Gas fields default to zero and the refund fields to the native-token
/// sentinel: proposals are executed by a relayer or an owner, never metered here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Target address
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
    /// Operation type
    pub operation: Operation,
    /// Gas limit for the Safe transaction
    pub safe_tx_gas: U256,
    /// Base gas (overhead)
    pub base_gas: U256,
    /// Gas price for refund calculation
    pub gas_price: U256,
    /// Token used for gas refund (address(0) for the native token)
    pub gas_token: Address,
    /// Address to receive gas refund
    pub refund_receiver: Address,
    /// Safe nonce
    pub nonce: U256,
}

impl TransactionRecord {
    /// Creates a record with zero gas settings, native-token refunds and nonce 0
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>, operation: Operation) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: NATIVE_TOKEN_ADDRESS,
            refund_receiver: NATIVE_TOKEN_ADDRESS,
            nonce: U256::ZERO,
        }
    }

    /// Sets the safe transaction gas
    pub fn with_safe_tx_gas(mut self, gas: U256) -> Self {
        self.safe_tx_gas = gas;
        self
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }
}
