use std::time::Duration;

use alloy::primitives::U256;
use color_eyre::eyre::{eyre, Result};
use safe_proposer::encoding::{domain_separator, safe_tx_hash, safe_tx_struct_hash};
use safe_proposer::{parse_address, Error, NonceSource, SafeContract};

use super::connect;
use super::propose::parse_request;
use crate::cli::HashArgs;
use crate::output::HashOutput;

/// Nonce source for hashing without an RPC endpoint
struct Offline;

impl NonceSource for Offline {
    async fn safe_nonce(&self) -> safe_proposer::Result<U256> {
        Err(Error::Fetch {
            what: "nonce",
            reason: "no RPC endpoint; pass --nonce or --rpc-url".to_string(),
        })
    }
}

pub async fn run(args: HashArgs, json: bool) -> Result<()> {
    let request = parse_request(&args.tx)?;
    let safe_address = parse_address(&args.safe)?;

    let safe = match args.rpc_url.as_deref() {
        Some(url) => Some(
            SafeContract::new(connect(url)?, safe_address)
                .with_timeout(Duration::from_secs(args.rpc_timeout)),
        ),
        None => None,
    };

    let chain_id = match (args.chain_id, &safe) {
        (Some(chain_id), _) => chain_id,
        (None, Some(safe)) => safe.chain_id().await?,
        (None, None) => return Err(eyre!("No chain id. Use --chain-id or --rpc-url")),
    };

    let record = match &safe {
        Some(safe) => request.resolve(safe).await?,
        None => request.resolve(&Offline).await?,
    };

    let hash = safe_tx_hash(chain_id, safe_address, &record);
    let onchain_match = match &safe {
        Some(safe) => Some(safe.transaction_hash(&record).await? == hash),
        None => None,
    };

    let output = HashOutput {
        safe: safe_address,
        chain_id,
        nonce: record.nonce,
        domain_separator: domain_separator(chain_id, safe_address),
        struct_hash: safe_tx_struct_hash(&record),
        safe_tx_hash: hash,
        onchain_match,
    };
    output.print(json);

    Ok(())
}
