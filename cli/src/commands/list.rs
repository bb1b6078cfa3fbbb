use color_eyre::eyre::Result;
use safe_proposer::{parse_address, SafeApiClient};

use super::{api_config, resolve_chain_id};
use crate::cli::ListArgs;
use crate::output::ListOutput;

pub async fn run(args: ListArgs, json: bool) -> Result<()> {
    let safe_address = parse_address(&args.safe)?;
    let client = SafeApiClient::new(api_config(&args.api))?;
    let kind = if args.history { "history" } else { "queued" };

    let listing = match &args.page {
        Some(url) => client.fetch_listing(url).await?,
        None => {
            let chain_id = resolve_chain_id(args.chain_id, args.rpc_url.as_deref()).await?;
            if args.history {
                client.history(chain_id, safe_address).await?
            } else {
                client.list_multisig(chain_id, safe_address).await?
            }
        }
    };

    ListOutput::new(kind, &listing).print(json);

    Ok(())
}
