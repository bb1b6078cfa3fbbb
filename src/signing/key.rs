//! Loading signing keys from hex or an encrypted keystore

use std::path::Path;

use alloy::signers::local::PrivateKeySigner;
use tracing::debug;

use crate::error::{Error, Result};

/// Parses a hex private key, with or without a `0x` prefix
pub fn parse_private_key(key: &str) -> Result<PrivateKeySigner> {
    let key = key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);

    key.parse::<PrivateKeySigner>()
        .map_err(|e| Error::KeyMaterial(format!("invalid private key: {e}")))
}

/// Decrypts a Web3 secret-storage keystore file
pub fn load_keystore(path: impl AsRef<Path>, password: &str) -> Result<PrivateKeySigner> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::KeyMaterial(format!(
            "keystore not found: {}",
            path.display()
        )));
    }

    let signer = PrivateKeySigner::decrypt_keystore(path, password).map_err(|e| {
        Error::KeyMaterial(format!("failed to decrypt {}: {e}", path.display()))
    })?;
    debug!(address = %signer.address(), keystore = %path.display(), "loaded keystore");
    Ok(signer)
}
