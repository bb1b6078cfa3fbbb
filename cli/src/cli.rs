use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use safe_proposer::api::DEFAULT_SAFE_API_URL;

#[derive(Parser)]
#[command(name = "safe-propose")]
#[command(about = "Propose Safe multisig transactions and predict deployment addresses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign a transaction and propose it to the Safe client gateway
    Propose(ProposeArgs),

    /// Propose a CREATE2 deployment through the CreateCall library
    Deploy(DeployArgs),

    /// Predict deployment addresses offline or from a factory
    #[command(subcommand)]
    Predict(PredictCommand),

    /// Compute the safeTxHash of a transaction without signing
    Hash(HashArgs),

    /// List queued proposals or executed history of a Safe
    List(ListArgs),
}

#[derive(Args, Clone)]
pub struct SafeArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,

    /// RPC deadline in seconds
    #[arg(long, default_value = "60")]
    pub rpc_timeout: u64,
}

#[derive(Args, Clone)]
pub struct ApiArgs {
    /// Safe client gateway base URL
    #[arg(long, env = "SAFE_API_URL", default_value = DEFAULT_SAFE_API_URL)]
    pub api_url: String,

    /// Gateway request deadline in seconds
    #[arg(long, default_value = "60")]
    pub api_timeout: u64,
}

#[derive(Args, Clone)]
pub struct TxArgs {
    /// Target address
    #[arg(value_name = "TO")]
    pub to: String,

    /// Native value to send (in wei, decimal or 0x-hex)
    #[arg(long, default_value = "0")]
    pub value: String,

    /// Calldata as hex
    #[arg(long)]
    pub data: Option<String>,

    /// 0 for Call, 1 for DelegateCall
    #[arg(long, default_value = "0")]
    pub operation: u8,

    /// Explicit Safe nonce (read from chain when omitted)
    #[arg(long)]
    pub nonce: Option<String>,
}

#[derive(Parser, Clone)]
pub struct ProposeArgs {
    #[command(flatten)]
    pub tx: TxArgs,

    #[command(flatten)]
    pub safe: SafeArgs,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Sign and print the proposal without submitting it
    #[arg(long)]
    pub dry_run: bool,

    /// Skip confirmation prompt
    #[arg(long)]
    pub no_confirm: bool,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct DeployArgs {
    /// Safe release whose canonical CreateCall and singleton are used
    #[arg(long, default_value = "1.4.1")]
    pub safe_version: String,

    /// CreateCall address (overrides the release default)
    #[arg(long)]
    pub create_call: Option<String>,

    /// Singleton the deployed SafeProxy points at (defaults to the release's SafeL2)
    #[arg(long, conflicts_with = "init_code")]
    pub singleton: Option<String>,

    /// Deploy arbitrary init code instead of a SafeProxy
    #[arg(long)]
    pub init_code: Option<String>,

    /// 32-byte 0x-hex salt, or up to 32 bytes of text (random when omitted)
    #[arg(long)]
    pub salt: Option<String>,

    /// Native value passed to the deployed contract (in wei)
    #[arg(long, default_value = "0")]
    pub value: String,

    /// 1 (DelegateCall, the Safe deploys) or 0 (Call, CreateCall deploys)
    #[arg(long, default_value = "1")]
    pub operation: u8,

    /// Explicit Safe nonce (read from chain when omitted)
    #[arg(long)]
    pub nonce: Option<String>,

    /// Only print the predicted address
    #[arg(long)]
    pub predict_only: bool,

    /// Skip confirmation prompts, including for a generated salt
    #[arg(long)]
    pub no_confirm: bool,

    #[command(flatten)]
    pub safe: SafeArgs,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Subcommand, Clone)]
pub enum PredictCommand {
    /// CREATE2 address for a deployer, salt and init code
    Contract(PredictContractArgs),

    /// Address of a Safe created through SafeProxyFactory.createProxyWithNonce
    Safe(PredictSafeArgs),
}

#[derive(Parser, Clone)]
pub struct PredictContractArgs {
    /// Account that executes CREATE2
    #[arg(long)]
    pub deployer: String,

    /// 32-byte 0x-hex salt, or up to 32 bytes of text
    #[arg(long)]
    pub salt: String,

    /// Init code as hex
    #[arg(long, required_unless_present = "singleton", conflicts_with = "singleton")]
    pub init_code: Option<String>,

    /// Use SafeProxy init code pointing at this singleton
    #[arg(long)]
    pub singleton: Option<String>,
}

#[derive(Parser, Clone)]
pub struct PredictSafeArgs {
    /// Owner address (repeatable)
    #[arg(long = "owner", value_name = "ADDR", required = true)]
    pub owners: Vec<String>,

    /// Signature threshold
    #[arg(long, default_value = "1")]
    pub threshold: u64,

    /// Salt nonce passed to createProxyWithNonce
    #[arg(long, default_value = "0")]
    pub salt_nonce: String,

    /// Safe release providing the factory and singleton
    #[arg(long, default_value = "1.4.1")]
    pub safe_version: String,

    /// Use the SafeL2 singleton
    #[arg(long)]
    pub l2: bool,

    /// Custom fallback handler address
    #[arg(long)]
    pub fallback_handler: Option<String>,

    /// RPC endpoint URL, used to read the factory's proxy creation code
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Clone)]
pub struct HashArgs {
    #[command(flatten)]
    pub tx: TxArgs,

    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Chain id (read from the RPC endpoint when omitted)
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// RPC endpoint URL; when set, the hash is also checked against the Safe
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// RPC deadline in seconds
    #[arg(long, default_value = "60")]
    pub rpc_timeout: u64,
}

#[derive(Parser, Clone)]
pub struct ListArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Chain id (read from the RPC endpoint when omitted)
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Show executed history instead of queued proposals
    #[arg(long)]
    pub history: bool,

    /// Fetch a page URL returned as `next` by an earlier listing
    #[arg(long)]
    pub page: Option<String>,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args, Clone)]
pub struct WalletArgs {
    /// Raw private key
    #[arg(long, env = "PRIVATE_KEY")]
    pub private_key: Option<String>,

    /// Path to keystore file
    #[arg(long)]
    pub keystore: Option<PathBuf>,

    /// Keystore password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Prompt for private key interactively
    #[arg(short, long)]
    pub interactive: bool,
}
