use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::{eyre, Result};
use safe_proposer::signing::{load_keystore, parse_private_key};

use crate::cli::WalletArgs;

pub fn create_signer(args: &WalletArgs) -> Result<PrivateKeySigner> {
    // Priority: interactive > keystore > private_key
    if args.interactive {
        let key = rpassword::prompt_password("Enter private key: ")?;
        Ok(parse_private_key(&key)?)
    } else if let Some(path) = &args.keystore {
        let password = match &args.password {
            Some(password) => password.clone(),
            None => rpassword::prompt_password("Keystore password: ")?,
        };
        Ok(load_keystore(path, &password)?)
    } else if let Some(private_key) = &args.private_key {
        Ok(parse_private_key(private_key)?)
    } else {
        Err(eyre!(
            "No wallet specified. Use --private-key, --keystore or --interactive"
        ))
    }
}
