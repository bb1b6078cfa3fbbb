//! Signature generation and key loading for Safe transactions

mod ecdsa;
mod key;

pub use ecdsa::{recover_signer, sign_digest, validate_signature};
pub use key::{load_keystore, parse_private_key};
