use std::time::Duration;

use color_eyre::eyre::Result;
use safe_proposer::{
    parse_address, to_checksum, ProposalInputs, ProposalRequest, Proposer, ProposerConfig, SafeContract,
};

use super::{api_config, connect};
use crate::cli::{ProposeArgs, TxArgs};
use crate::output::{confirm_prompt, ProposalOutput};
use crate::wallet::create_signer;

pub fn parse_request(tx: &TxArgs) -> Result<ProposalRequest> {
    Ok(ProposalRequest::parse(&ProposalInputs {
        to: &tx.to,
        value: &tx.value,
        calldata: tx.data.as_deref(),
        operation: tx.operation,
        nonce: tx.nonce.as_deref(),
    })?)
}

pub async fn run(args: ProposeArgs, json: bool) -> Result<()> {
    // Reject bad flags before touching keys or the network
    let request = parse_request(&args.tx)?;
    let safe_address = parse_address(&args.safe.safe)?;

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

    if args.dry_run {
        ProposalOutput::new(&signed, false).print(json);
        return Ok(());
    }

    if !args.no_confirm && !json {
        println!("Safe: {}", to_checksum(&safe_address));
        println!("Safe Tx Hash: {}", signed.safe_tx_hash());
        println!("Nonce: {}", signed.record().nonce);
        println!();
        if !confirm_prompt("Submit proposal?") {
            println!("Aborted");
            return Ok(());
        }
    }

    proposer.submit(&signed).await?;

    ProposalOutput::new(&signed, true).print(json);

    Ok(())
}
