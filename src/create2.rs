//! CREATE2 address prediction
//!
//! A contract created with CREATE2 lands at
//! `keccak256(0xff ++ deployer ++ salt ++ keccak256(init_code))[12:]`, where the
//! deployer is the account executing the opcode. For a deployment proposed
//! through a Safe that is either the Safe itself (CreateCall reached through
//! DelegateCall) or the CreateCall contract (plain Call), so callers always pass
//! the effective deployer explicitly; [`DeployerRole`] names the cases.

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use alloy::sol_types::SolCall;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::contracts::{ICreateCall, ISafeSetup, SAFE_PROXY_CREATION_CODE};
use crate::error::{Error, Result};
use crate::types::Operation;

/// Computes the CREATE2 address for `init_code` deployed by `deployer` with `salt`
pub fn predict_address(deployer: Address, salt: B256, init_code: &[u8]) -> Address {
    let init_code_hash = keccak256(init_code);

    let mut create2_input = Vec::with_capacity(1 + 20 + 32 + 32);
    create2_input.push(0xff);
    create2_input.extend_from_slice(deployer.as_slice());
    create2_input.extend_from_slice(salt.as_slice());
    create2_input.extend_from_slice(init_code_hash.as_slice());
    assert_eq!(create2_input.len(), 85);

    let hash = keccak256(&create2_input);
    Address::from_slice(&hash[12..])
}

/// Inputs to a CREATE2 prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentAddressQuery {
    pub deployer: Address,
    pub salt: B256,
    pub init_code: Bytes,
}

impl DeploymentAddressQuery {
    pub fn new(deployer: Address, salt: B256, init_code: impl Into<Bytes>) -> Self {
        Self {
            deployer,
            salt,
            init_code: init_code.into(),
        }
    }

    /// Returns the address the contract will be deployed at
    pub fn predict(&self) -> Address {
        let address = predict_address(self.deployer, self.salt, &self.init_code);
        debug!(deployer = %self.deployer, salt = %self.salt, %address, "predicted CREATE2 address");
        address
    }
}

/// Which account executes CREATE2 for a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployerRole {
    /// An account (or factory) that runs CREATE2 itself
    Direct(Address),
    /// A Safe transaction to the CreateCall contract
    CreateCall {
        safe: Address,
        create_call: Address,
        operation: Operation,
    },
}

impl DeployerRole {
    /// Returns the effective deployer address
    ///
    /// Through DelegateCall the CreateCall code runs in the Safe's context, so the
    /// Safe is the deployer; through Call the CreateCall contract is.
    pub fn address(&self) -> Address {
        match *self {
            DeployerRole::Direct(deployer) => deployer,
            DeployerRole::CreateCall {
                safe, operation, ..
            } if operation == Operation::DelegateCall => safe,
            DeployerRole::CreateCall { create_call, .. } => create_call,
        }
    }
}

/// Parses an explicit salt
///
/// A `0x`-prefixed value must be exactly 32 bytes of hex. Anything else is
/// taken as raw bytes copied into the start of the salt, zero-padded on the right.
pub fn parse_salt(input: &str) -> Result<B256> {
    if input.is_empty() {
        return Err(Error::InvalidSalt("salt is empty".to_string()));
    }

    if let Some(digits) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        let bytes = alloy::hex::decode(digits)
            .map_err(|e| Error::InvalidSalt(format!("{input}: {e}")))?;
        if bytes.len() != 32 {
            return Err(Error::InvalidSalt(format!(
                "{input}: expected 32 bytes of hex, got {}",
                bytes.len()
            )));
        }
        return Ok(B256::from_slice(&bytes));
    }

    let raw = input.as_bytes();
    if raw.len() > 32 {
        return Err(Error::InvalidSalt(format!(
            "raw salt is {} bytes, at most 32 allowed",
            raw.len()
        )));
    }
    let mut salt = [0u8; 32];
    salt[..raw.len()].copy_from_slice(raw);
    Ok(B256::from(salt))
}

/// Draws a salt from the operating system's RNG
pub fn random_salt() -> B256 {
    let mut salt = [0u8; 32];
    OsRng.fill_bytes(&mut salt);
    B256::from(salt)
}

/// Uses the explicit salt when given, otherwise generates one and asks `confirm`
///
/// A generated salt that is not confirmed is an error.
pub fn resolve_salt<F>(explicit: Option<&str>, confirm: F) -> Result<B256>
where
    F: FnOnce(&B256) -> bool,
{
    match explicit {
        Some(input) => parse_salt(input),
        None => {
            let salt = random_salt();
            debug!(%salt, "generated random salt");
            if confirm(&salt) {
                Ok(salt)
            } else {
                Err(Error::SaltRejected(salt.to_string()))
            }
        }
    }
}

/// Init code for a SafeProxy pointing at `singleton`
///
/// init_code = creationCode ++ abi.encode(singleton)
pub fn safe_proxy_init_code(singleton: Address) -> Bytes {
    let mut init_code = Vec::with_capacity(SAFE_PROXY_CREATION_CODE.len() + 32);
    init_code.extend_from_slice(SAFE_PROXY_CREATION_CODE);
    let mut singleton_padded = [0u8; 32];
    singleton_padded[12..].copy_from_slice(singleton.as_slice());
    init_code.extend_from_slice(&singleton_padded);
    Bytes::from(init_code)
}

/// Calldata for `CreateCall.performCreate2(value, init_code, salt)`
pub fn perform_create2_calldata(value: U256, init_code: Bytes, salt: B256) -> Bytes {
    let call = ICreateCall::performCreate2Call {
        value,
        deploymentData: init_code,
        salt,
    };
    Bytes::from(call.abi_encode())
}

/// Encodes the Safe.setup() call for proxy initialization
///
/// # Arguments
/// * `owners` - Array of owner addresses for the Safe
/// * `threshold` - Number of required confirmations for transactions
/// * `fallback_handler` - Address of the fallback handler contract
pub fn encode_setup_call(owners: &[Address], threshold: u64, fallback_handler: Address) -> Bytes {
    let setup_call = ISafeSetup::setupCall {
        _owners: owners.to_vec(),
        _threshold: U256::from(threshold),
        to: Address::ZERO,
        data: Bytes::new(),
        fallbackHandler: fallback_handler,
        paymentToken: Address::ZERO,
        payment: U256::ZERO,
        paymentReceiver: Address::ZERO,
    };

    Bytes::from(setup_call.abi_encode())
}

/// Computes the address of a Safe deployed by `SafeProxyFactory.createProxyWithNonce`
///
/// The factory derives its own salt from the initializer:
/// ```text
/// salt = keccak256(keccak256(initializer) ++ saltNonce)
/// init_code = proxyCreationCode ++ singleton_address_padded
/// ```
/// `creation_code` is the factory's `proxyCreationCode()`.
pub fn predict_factory_proxy_address(
    factory: Address,
    singleton: Address,
    initializer: &Bytes,
    salt_nonce: U256,
    creation_code: &Bytes,
) -> Address {
    let initializer_hash = keccak256(initializer);

    let mut salt_input = [0u8; 64];
    salt_input[..32].copy_from_slice(initializer_hash.as_slice());
    salt_input[32..64].copy_from_slice(&salt_nonce.to_be_bytes::<32>());
    let salt = keccak256(salt_input);

    let mut init_code = creation_code.to_vec();
    let mut singleton_padded = [0u8; 32];
    singleton_padded[12..].copy_from_slice(singleton.as_slice());
    init_code.extend_from_slice(&singleton_padded);

    predict_address(factory, salt, &init_code)
}
