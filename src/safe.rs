//! Read-only access to a deployed Safe

use std::future::Future;
use std::time::Duration;

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::Provider;
use tracing::debug;

use crate::builder::NonceSource;
use crate::contracts::{ISafe, ISafeProxyFactory};
use crate::create2::{encode_setup_call, predict_factory_proxy_address};
use crate::error::{Error, Result};
use crate::types::TransactionRecord;

/// Default deadline for RPC reads
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(60);

/// A Safe contract reached through an RPC provider
pub struct SafeContract<P> {
    /// The provider for RPC calls
    provider: P,
    /// The Safe contract address
    address: Address,
    /// Deadline for each read
    timeout: Duration,
}

impl<P> SafeContract<P>
where
    P: Provider<AnyNetwork> + Clone + Send + Sync + 'static,
{
    pub fn new(provider: P, address: Address) -> Self {
        Self {
            provider,
            address,
            timeout: DEFAULT_RPC_TIMEOUT,
        }
    }

    /// Overrides the per-call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Gets the chain id reported by the provider
    pub async fn chain_id(&self) -> Result<u64> {
        with_deadline("chain id", self.timeout, async {
            self.provider
                .get_chain_id()
                .await
                .map_err(|e| Error::Fetch {
                    what: "chain id",
                    reason: e.to_string(),
                })
        })
        .await
    }

    /// Gets the current nonce of the Safe
    pub async fn nonce(&self) -> Result<U256> {
        let safe = ISafe::new(self.address, &self.provider);
        with_deadline("nonce", self.timeout, async {
            safe.nonce().call().await.map_err(|e| Error::Fetch {
                what: "nonce",
                reason: e.to_string(),
            })
        })
        .await
    }

    /// Gets the EIP-712 domain separator the Safe computes for itself
    pub async fn domain_separator(&self) -> Result<B256> {
        let safe = ISafe::new(self.address, &self.provider);
        with_deadline("domain separator", self.timeout, async {
            safe.domainSeparator().call().await.map_err(|e| Error::Fetch {
                what: "domain separator",
                reason: e.to_string(),
            })
        })
        .await
    }

    /// Asks the Safe to hash `record`, for checking a locally computed safeTxHash
    pub async fn transaction_hash(&self, record: &TransactionRecord) -> Result<B256> {
        let safe = ISafe::new(self.address, &self.provider);
        let call = safe.getTransactionHash(
            record.to,
            record.value,
            record.data.clone(),
            record.operation.as_u8(),
            record.safe_tx_gas,
            record.base_gas,
            record.gas_price,
            record.gas_token,
            record.refund_receiver,
            record.nonce,
        );
        with_deadline("transaction hash", self.timeout, async {
            call.call().await.map_err(|e| Error::Fetch {
                what: "transaction hash",
                reason: e.to_string(),
            })
        })
        .await
    }
}

impl<P> NonceSource for SafeContract<P>
where
    P: Provider<AnyNetwork> + Clone + Send + Sync + 'static,
{
    async fn safe_nonce(&self) -> Result<U256> {
        self.nonce().await
    }
}

/// A SafeProxyFactory reached through an RPC provider
pub struct SafeFactory<P> {
    provider: P,
    address: Address,
    timeout: Duration,
}

impl<P> SafeFactory<P>
where
    P: Provider<AnyNetwork> + Clone + Send + Sync + 'static,
{
    pub fn new(provider: P, address: Address) -> Self {
        Self {
            provider,
            address,
            timeout: DEFAULT_RPC_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Gets the proxy creation code the factory deploys
    pub async fn creation_code(&self) -> Result<Bytes> {
        let factory = ISafeProxyFactory::new(self.address, &self.provider);
        with_deadline("proxy creation code", self.timeout, async {
            factory
                .proxyCreationCode()
                .call()
                .await
                .map_err(|e| Error::Fetch {
                    what: "proxy creation code",
                    reason: e.to_string(),
                })
        })
        .await
    }

    /// Computes where `createProxyWithNonce` would deploy a Safe with this setup
    pub async fn predict_safe(
        &self,
        singleton: Address,
        owners: &[Address],
        threshold: u64,
        fallback_handler: Address,
        salt_nonce: U256,
    ) -> Result<Address> {
        let initializer = encode_setup_call(owners, threshold, fallback_handler);
        let creation_code = self.creation_code().await?;
        let address = predict_factory_proxy_address(
            self.address,
            singleton,
            &initializer,
            salt_nonce,
            &creation_code,
        );
        debug!(factory = %self.address, %salt_nonce, %address, "predicted Safe address");
        Ok(address)
    }
}

/// Runs `fut`, failing with [`Error::Timeout`] once `after` elapses
///
/// Dropping the inner future cancels the request.
pub(crate) async fn with_deadline<T>(
    what: &'static str,
    after: Duration,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(after, fut).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout { what, after }),
    }
}
