use alloy::primitives::{keccak256, Address};
use color_eyre::eyre::{eyre, Result};
use safe_proposer::create2::{parse_salt, safe_proxy_init_code};
use safe_proposer::encoding::{decode_hex, parse_nonce};
use safe_proposer::{parse_address, ChainAddresses, DeploymentAddressQuery, SafeFactory};

use super::connect;
use crate::cli::{PredictCommand, PredictContractArgs, PredictSafeArgs};
use crate::output::{PredictOutput, SafePredictOutput};

pub async fn run(command: PredictCommand, json: bool) -> Result<()> {
    match command {
        PredictCommand::Contract(args) => contract(args, json),
        PredictCommand::Safe(args) => safe(args, json).await,
    }
}

fn contract(args: PredictContractArgs, json: bool) -> Result<()> {
    let deployer = parse_address(&args.deployer)?;
    let salt = parse_salt(&args.salt)?;
    let init_code = match (&args.init_code, &args.singleton) {
        (Some(code), _) => decode_hex("init code", code)?,
        (None, Some(singleton)) => safe_proxy_init_code(parse_address(singleton)?),
        (None, None) => return Err(eyre!("Either --init-code or --singleton is required")),
    };

    let query = DeploymentAddressQuery::new(deployer, salt, init_code);
    let output = PredictOutput {
        deployer,
        salt,
        init_code_hash: keccak256(&query.init_code),
        address: query.predict(),
    };
    output.print(json);

    Ok(())
}

async fn safe(args: PredictSafeArgs, json: bool) -> Result<()> {
    let addresses = ChainAddresses::for_version(&args.safe_version).ok_or_else(|| {
        eyre!(
            "Unknown Safe version {} (expected 1.3.0 or 1.4.1)",
            args.safe_version
        )
    })?;

    let owners = parse_owners(&args.owners)?;
    if args.threshold == 0 || args.threshold as usize > owners.len() {
        return Err(eyre!(
            "Invalid threshold: {} (must be 1-{})",
            args.threshold,
            owners.len()
        ));
    }

    let fallback_handler = match &args.fallback_handler {
        Some(handler) => parse_address(handler)?,
        None => addresses.fallback_handler,
    };
    let singleton = if args.l2 {
        addresses.safe_l2_singleton
    } else {
        addresses.safe_singleton
    };
    let salt_nonce = parse_nonce(&args.salt_nonce)?;

    let factory = SafeFactory::new(connect(&args.rpc_url)?, addresses.proxy_factory);
    let address = factory
        .predict_safe(singleton, &owners, args.threshold, fallback_handler, salt_nonce)
        .await?;

    let output = SafePredictOutput {
        factory: addresses.proxy_factory,
        singleton,
        owners,
        threshold: args.threshold,
        salt_nonce,
        address,
    };
    output.print(json);

    Ok(())
}

/// Parses owner flags, dropping repeats while keeping order
fn parse_owners(inputs: &[String]) -> Result<Vec<Address>> {
    let mut owners = Vec::with_capacity(inputs.len());
    for input in inputs {
        let owner = parse_address(input)?;
        if !owners.contains(&owner) {
            owners.push(owner);
        }
    }
    Ok(owners)
}
