pub mod deploy;
pub mod hash;
pub mod list;
pub mod predict;
pub mod propose;

use std::time::Duration;

use alloy::network::AnyNetwork;
use alloy::providers::{Provider, ProviderBuilder};
use color_eyre::eyre::{eyre, Result};
use safe_proposer::SafeApiConfig;

use crate::cli::ApiArgs;

pub fn connect(rpc_url: &str) -> Result<impl Provider<AnyNetwork> + Clone + Send + Sync + 'static> {
    Ok(ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(rpc_url.parse()?))
}

pub fn api_config(args: &ApiArgs) -> SafeApiConfig {
    SafeApiConfig::new(args.api_url.clone()).with_timeout(Duration::from_secs(args.api_timeout))
}

/// Uses the explicit chain id, or asks the RPC endpoint
pub async fn resolve_chain_id(explicit: Option<u64>, rpc_url: Option<&str>) -> Result<u64> {
    match (explicit, rpc_url) {
        (Some(chain_id), _) => Ok(chain_id),
        (None, Some(url)) => Ok(connect(url)?.get_chain_id().await?),
        (None, None) => Err(eyre!("No chain id. Use --chain-id or --rpc-url")),
    }
}
