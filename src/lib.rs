//! # safe-proposer
//!
//! Build, sign and propose Safe multisig transactions, and predict CREATE2
//! deployment addresses before proposing them.
//!
//! ## Features
//!
//! - Bit-exact EIP-712 `SafeTx` hashing
//! - Deterministic secp256k1 owner signatures (`v` in {27, 28})
//! - Proposal submission and listing through the Safe client gateway
//! - CREATE2 prediction for deployments made through the CreateCall library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safe_proposer::{ProposalInputs, ProposalRequest, Proposer, ProposerConfig, SafeContract};
//! use alloy::providers::ProviderBuilder;
//! use alloy::network::AnyNetwork;
//!
//! let request = ProposalRequest::parse(&ProposalInputs {
//!     to: "0xaAaAaAaaAaAaAaaAaAAAAAAAAaaaAaAaAaaAaaAa",
//!     value: "0",
//!     ..Default::default()
//! })?;
//!
//! let provider = ProviderBuilder::new().network::<AnyNetwork>().connect_http(rpc_url);
//! let safe = SafeContract::new(provider, safe_address);
//! let chain_id = safe.chain_id().await?;
//!
//! let proposer = Proposer::new(ProposerConfig::default())?;
//! let signed = proposer.propose(request, &safe, &signer, safe_address, chain_id).await?;
//! println!("proposed {}", signed.safe_tx_hash());
//! ```
//!
//! ## Predicting a deployment
//!
//! ```rust,ignore
//! use safe_proposer::{create2, ChainAddresses, DeploymentProposal};
//!
//! let addresses = ChainAddresses::v1_4_1();
//! let init_code = create2::safe_proxy_init_code(addresses.safe_l2_singleton);
//! let deployment = DeploymentProposal::new(addresses.create_call, init_code, create2::random_salt());
//!
//! // DelegateCall (the default) deploys from the Safe itself
//! let predicted = deployment.predict(safe_address);
//! ```

pub mod address;
pub mod api;
pub mod builder;
pub mod chain;
pub mod contracts;
pub mod create2;
pub mod encoding;
pub mod error;
pub mod proposer;
pub mod safe;
pub mod signing;
pub mod types;

// Re-export main types at crate root
pub use address::{is_hex_address, parse_address, to_checksum, NATIVE_TOKEN_ADDRESS};
pub use api::{Listing, Origin, ProposeTransactionBody, SafeApiClient, SafeApiConfig};
pub use builder::{NonceSource, ProposalInputs, ProposalRequest};
pub use chain::ChainAddresses;
pub use create2::{predict_address, DeployerRole, DeploymentAddressQuery};
pub use encoding::safe_tx_hash;
pub use error::{Error, Result};
pub use proposer::{DeploymentProposal, Proposer, ProposerConfig};
pub use safe::{SafeContract, SafeFactory};
pub use types::{Operation, SignedTransaction, TransactionRecord};

// Re-export alloy types that are commonly used
pub use alloy::network::AnyNetwork;
pub use alloy::primitives::{Address, Bytes, B256, U256};
