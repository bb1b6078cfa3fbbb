//! End-to-end proposal flow: resolve, hash, sign, submit

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::signers::{Signer, SignerSync};
use tracing::{debug, info};

use crate::api::{Origin, SafeApiClient, SafeApiConfig, DEFAULT_ORIGIN_NAME};
use crate::builder::{NonceSource, ProposalRequest};
use crate::create2::{perform_create2_calldata, DeployerRole, DeploymentAddressQuery};
use crate::error::{Error, Result};
use crate::types::{Operation, SignedTransaction};

/// Settings for a [`Proposer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposerConfig {
    pub api: SafeApiConfig,
    /// Name recorded in each proposal's origin
    pub origin_name: String,
}

impl Default for ProposerConfig {
    fn default() -> Self {
        Self {
            api: SafeApiConfig::default(),
            origin_name: DEFAULT_ORIGIN_NAME.to_string(),
        }
    }
}

/// Builds, signs and submits Safe transaction proposals
#[derive(Debug, Clone)]
pub struct Proposer {
    api: SafeApiClient,
    origin_name: String,
}

impl Proposer {
    pub fn new(config: ProposerConfig) -> Result<Self> {
        Ok(Self {
            api: SafeApiClient::new(config.api)?,
            origin_name: config.origin_name,
        })
    }

    pub fn api(&self) -> &SafeApiClient {
        &self.api
    }

    /// Origin attached to proposals for `safe` on `chain_id`
    pub fn origin(&self, chain_id: u64, safe: Address) -> Origin {
        Origin::new(self.api.propose_url(chain_id, safe), self.origin_name.clone())
    }

    /// Resolves the nonce, computes the safeTxHash and signs it
    ///
    /// Nothing is sent to the gateway.
    pub async fn prepare<N, S>(
        &self,
        request: ProposalRequest,
        nonce_source: &N,
        signer: &S,
        safe: Address,
        chain_id: u64,
    ) -> Result<SignedTransaction>
    where
        N: NonceSource,
        S: Signer + SignerSync,
    {
        let record = request.resolve(nonce_source).await?;
        let signed = SignedTransaction::sign(record, safe, chain_id, signer)?;
        debug!(
            safe_tx_hash = %signed.safe_tx_hash(),
            sender = %signed.sender(),
            nonce = %signed.record().nonce,
            "signed transaction"
        );
        Ok(signed)
    }

    /// Submits an already signed transaction
    pub async fn submit(&self, signed: &SignedTransaction) -> Result<()> {
        let origin = self.origin(signed.chain_id(), signed.safe());
        self.api.propose(signed, &origin).await
    }

    /// Prepares and submits in one step, returning what was proposed
    pub async fn propose<N, S>(
        &self,
        request: ProposalRequest,
        nonce_source: &N,
        signer: &S,
        safe: Address,
        chain_id: u64,
    ) -> Result<SignedTransaction>
    where
        N: NonceSource,
        S: Signer + SignerSync,
    {
        let signed = self
            .prepare(request, nonce_source, signer, safe, chain_id)
            .await?;
        self.submit(&signed).await?;
        info!(safe_tx_hash = %signed.safe_tx_hash(), "proposal submitted");
        Ok(signed)
    }
}

/// A contract deployment proposed as a Safe transaction to CreateCall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentProposal {
    pub create_call: Address,
    /// Native value forwarded to the new contract
    pub value: U256,
    pub init_code: Bytes,
    pub salt: B256,
    pub operation: Operation,
    pub nonce: Option<U256>,
}

impl DeploymentProposal {
    /// Deployment through `create_call` by DelegateCall with no value attached
    pub fn new(create_call: Address, init_code: impl Into<Bytes>, salt: B256) -> Self {
        Self {
            create_call,
            value: U256::ZERO,
            init_code: init_code.into(),
            salt,
            operation: Operation::DelegateCall,
            nonce: None,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// The `performCreate2` call as a proposal request
    ///
    /// The Safe transaction itself carries no value; `value` is an argument to
    /// `performCreate2` and is paid from the executing contract's balance. Under
    /// Call that is CreateCall, which holds nothing, so a non-zero value is rejected.
    pub fn request(&self) -> Result<ProposalRequest> {
        if self.operation == Operation::Call && !self.value.is_zero() {
            return Err(Error::UnfundedDeployment { value: self.value });
        }

        let data = perform_create2_calldata(self.value, self.init_code.clone(), self.salt);
        let request = ProposalRequest::new(self.create_call, U256::ZERO, data, self.operation);
        Ok(match self.nonce {
            Some(nonce) => request.with_nonce(nonce),
            None => request,
        })
    }

    /// Who executes CREATE2 when `safe` runs this proposal
    pub fn deployer_role(&self, safe: Address) -> DeployerRole {
        DeployerRole::CreateCall {
            safe,
            create_call: self.create_call,
            operation: self.operation,
        }
    }

    /// Prediction query for an explicit deployer
    pub fn address_query(&self, deployer: Address) -> DeploymentAddressQuery {
        DeploymentAddressQuery::new(deployer, self.salt, self.init_code.clone())
    }

    /// Address the contract lands at when `safe` executes this proposal
    pub fn predict(&self, safe: Address) -> Address {
        self.address_query(self.deployer_role(safe).address()).predict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainAddresses;
    use crate::contracts::ICreateCall;
    use crate::create2::safe_proxy_init_code;
    use alloy::primitives::{address, b256};
    use alloy::signers::local::PrivateKeySigner;
    use alloy::sol_types::SolCall;

    struct FixedNonce(u64);

    impl NonceSource for FixedNonce {
        async fn safe_nonce(&self) -> Result<U256> {
            Ok(U256::from(self.0))
        }
    }

    struct Unreachable;

    impl NonceSource for Unreachable {
        async fn safe_nonce(&self) -> Result<U256> {
            Err(Error::Fetch {
                what: "nonce",
                reason: "unreachable".to_string(),
            })
        }
    }

    fn anvil_signer() -> PrivateKeySigner {
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            .parse()
            .unwrap()
    }

    fn proposer() -> Proposer {
        Proposer::new(ProposerConfig::default()).unwrap()
    }

    const SAFE: Address = address!("beefbeefbeefbeefbeefbeefbeefbeefbeefbeef");

    #[tokio::test]
    async fn test_prepare_pinned_fixture() {
        let request = ProposalRequest::new(Address::repeat_byte(0xaa), U256::ZERO, Bytes::new(), Operation::Call);
        let signed = proposer()
            .prepare(request, &FixedNonce(5), &anvil_signer(), SAFE, 1)
            .await
            .unwrap();

        assert_eq!(
            signed.safe_tx_hash(),
            b256!("dc9e4287d1f278967823b6db7d4b127174b6d55b655fedae047faac46b21eb18")
        );
        assert_eq!(signed.record().nonce, U256::from(5));
        assert_eq!(signed.sender(), address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        signed.verify().unwrap();
    }

    #[tokio::test]
    async fn test_prepare_propagates_nonce_failure() {
        let request = ProposalRequest::new(Address::repeat_byte(0xaa), U256::ZERO, Bytes::new(), Operation::Call);
        let err = proposer()
            .prepare(request, &Unreachable, &anvil_signer(), SAFE, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch { what: "nonce", .. }));
    }

    #[test]
    fn test_origin_uses_propose_url() {
        let origin = proposer().origin(1, SAFE);
        assert_eq!(
            origin.url,
            "https://safe-client.safe.global/v1/chains/1/transactions/0xBEeFbeefbEefbeEFbeEfbEEfBEeFbeEfBeEfBeef/propose"
        );
        assert_eq!(origin.name, "SafeProposal Creation");
    }

    #[test]
    fn test_deployment_request() {
        let create_call = ChainAddresses::v1_3_0().create_call;
        let init_code = safe_proxy_init_code(ChainAddresses::v1_4_1().safe_l2_singleton);
        let salt = b256!("0000000000000000000000000000000000000000000000000000000000000001");

        let deployment = DeploymentProposal::new(create_call, init_code.clone(), salt)
            .with_value(U256::from(7))
            .with_nonce(U256::from(3));
        let request = deployment.request().unwrap();

        assert_eq!(request.to, create_call);
        assert_eq!(request.value, U256::ZERO);
        assert_eq!(request.operation, Operation::DelegateCall);
        assert_eq!(request.nonce, Some(U256::from(3)));

        let decoded = ICreateCall::performCreate2Call::abi_decode(&request.data).unwrap();
        assert_eq!(decoded.value, U256::from(7));
        assert_eq!(decoded.deploymentData, init_code);
        assert_eq!(decoded.salt, salt);
    }

    #[test]
    fn test_deployment_value_requires_delegatecall() {
        let create_call = ChainAddresses::v1_4_1().create_call;
        let salt = b256!("0000000000000000000000000000000000000000000000000000000000000002");
        let deployment = DeploymentProposal::new(create_call, Bytes::from_static(&[0x60, 0x00]), salt)
            .with_operation(Operation::Call);

        // No value: CreateCall can deploy on its own
        let request = deployment.request().unwrap();
        assert_eq!(request.operation, Operation::Call);

        let err = deployment.with_value(U256::from(1)).request().unwrap_err();
        assert!(matches!(err, Error::UnfundedDeployment { value } if value == U256::from(1)));
    }

    #[test]
    fn test_deployment_prediction_follows_operation() {
        let create_call = address!("7cbb62eaa69f79e6873cd1ecb2392971036cfaa4");
        let init_code = safe_proxy_init_code(address!("29fcb43b46531bca003ddc8fcb67ffe91900c762"));
        let salt = b256!("0000000000000000000000000000000000000000000000000000000000000001");

        // DelegateCall: the Safe runs CREATE2
        let delegated = DeploymentProposal::new(create_call, init_code.clone(), salt);
        assert_eq!(
            delegated.predict(SAFE),
            address!("62682cb6d47dc2ea567ed5ca1d3be234f40ecbf3")
        );

        // Call: the CreateCall contract runs CREATE2
        let called = delegated.with_operation(Operation::Call);
        assert_eq!(
            called.predict(SAFE),
            address!("40c56c27d15106dbf56039dc340da7073a424781")
        );
        assert_eq!(
            called.address_query(create_call).predict(),
            called.predict(SAFE)
        );
    }
}
