use std::time::Duration;

use alloy::primitives::keccak256;
use color_eyre::eyre::{eyre, Result};
use safe_proposer::create2::{resolve_salt, safe_proxy_init_code};
use safe_proposer::encoding::{decode_hex, parse_nonce, parse_operation, parse_value};
use safe_proposer::{
    parse_address, ChainAddresses, DeployerRole, DeploymentProposal, Proposer, ProposerConfig,
    SafeContract,
};

use super::{api_config, connect};
use crate::cli::DeployArgs;
use crate::output::{confirm_prompt, DeployOutput, ProposalOutput};
use crate::wallet::create_signer;

pub async fn run(args: DeployArgs, json: bool) -> Result<()> {
    let addresses = ChainAddresses::for_version(&args.safe_version).ok_or_else(|| {
        eyre!(
            "Unknown Safe version {} (expected 1.3.0 or 1.4.1)",
            args.safe_version
        )
    })?;

    let create_call = match &args.create_call {
        Some(addr) => parse_address(addr)?,
        None => addresses.create_call,
    };
    let operation = parse_operation(args.operation)?;
    let value = parse_value(&args.value)?;
    let nonce = args.nonce.as_deref().map(parse_nonce).transpose()?;
    let safe_address = parse_address(&args.safe.safe)?;

    let init_code = match &args.init_code {
        Some(code) => decode_hex("init code", code)?,
        None => {
            let singleton = match &args.singleton {
                Some(addr) => parse_address(addr)?,
                None => addresses.safe_l2_singleton,
            };
            safe_proxy_init_code(singleton)
        }
    };

    let salt = resolve_salt(args.salt.as_deref(), |salt| {
        args.no_confirm || confirm_prompt(&format!("Use generated salt {salt}?"))
    })?;

    let mut deployment = DeploymentProposal::new(create_call, init_code, salt)
        .with_value(value)
        .with_operation(operation);
    if let Some(nonce) = nonce {
        deployment = deployment.with_nonce(nonce);
    }
    let request = deployment.request()?;

    let role = deployment.deployer_role(safe_address);
    let deployer = role.address();
    let predicted_address = deployment.address_query(deployer).predict();

    let mut output = DeployOutput {
        create_call,
        operation: operation.as_u8(),
        deployer,
        deployer_role: role_name(&role),
        salt,
        init_code_hash: keccak256(&deployment.init_code),
        predicted_address,
        proposal: None,
    };

    if args.predict_only {
        output.print(json);
        return Ok(());
    }

    let signer = create_signer(&args.wallet)?;

    let safe = SafeContract::new(connect(&args.safe.rpc_url)?, safe_address)
        .with_timeout(Duration::from_secs(args.safe.rpc_timeout));
    let chain_id = safe.chain_id().await?;

    let proposer = Proposer::new(ProposerConfig {
        api: api_config(&args.api),
        ..Default::default()
    })?;
    let signed = proposer
        .prepare(request, &safe, &signer, safe_address, chain_id)
        .await?;

    if !args.no_confirm && !json {
        println!("Deployer: {deployer} ({})", output.deployer_role);
        println!("Predicted Address: {predicted_address}");
        println!("Safe Tx Hash: {}", signed.safe_tx_hash());
        println!();
        if !confirm_prompt("Submit deployment proposal?") {
            println!("Aborted");
            return Ok(());
        }
    }

    proposer.submit(&signed).await?;

    output.proposal = Some(ProposalOutput::new(&signed, true));
    output.print(json);

    Ok(())
}

fn role_name(role: &DeployerRole) -> &'static str {
    match role {
        DeployerRole::Direct(_) => "direct",
        DeployerRole::CreateCall { safe, .. } if role.address() == *safe => "safe via delegatecall",
        DeployerRole::CreateCall { .. } => "create_call via call",
    }
}
