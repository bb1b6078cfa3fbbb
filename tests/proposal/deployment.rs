//! Deployment proposals through CreateCall

use alloy::primitives::{address, b256, keccak256, U256};
use alloy::sol_types::SolCall;
use safe_proposer::contracts::ICreateCall;
use safe_proposer::create2::safe_proxy_init_code;
use safe_proposer::{
    ChainAddresses, DeploymentProposal, Operation, Proposer, ProposerConfig, SafeApiConfig,
};
use serde_json::Value;

use crate::common::{anvil_signer, FixedNonce, MockGateway, SAFE};

#[test]
fn test_safe_proxy_init_code_fixture() {
    let init_code = safe_proxy_init_code(ChainAddresses::v1_4_1().safe_l2_singleton);
    assert_eq!(init_code.len(), 502);
    assert_eq!(
        keccak256(&init_code),
        b256!("e1357316912b1087ff1bd41ef3126c8431742ef376cd7328812d879a4d4dd232")
    );
}

#[tokio::test]
async fn test_deployment_proposal_body() {
    let gateway = MockGateway::respond(201, "{}").await;
    let proposer = Proposer::new(ProposerConfig {
        api: SafeApiConfig::new(&gateway.base_url),
        ..Default::default()
    })
    .unwrap();

    let create_call = ChainAddresses::v1_3_0().create_call;
    let init_code = safe_proxy_init_code(ChainAddresses::v1_4_1().safe_l2_singleton);
    let salt = b256!("0000000000000000000000000000000000000000000000000000000000000001");
    let deployment = DeploymentProposal::new(create_call, init_code.clone(), salt);

    assert_eq!(deployment.operation, Operation::DelegateCall);
    assert_eq!(
        deployment.predict(SAFE),
        address!("62682cb6d47dc2ea567ed5ca1d3be234f40ecbf3")
    );

    let signed = proposer
        .propose(deployment.request().unwrap(), &FixedNonce(9), &anvil_signer(), SAFE, 1)
        .await
        .unwrap();
    assert_eq!(signed.record().to, create_call);
    assert_eq!(signed.record().value, U256::ZERO);

    let body: Value = serde_json::from_str(&gateway.request().await.body).unwrap();
    assert_eq!(body["to"], "0x7cbB62EaA69F79e6873cD1ecB2392971036cFAa4");
    assert_eq!(body["operation"], 1);
    assert_eq!(body["value"], "0");
    assert_eq!(body["nonce"], "9");

    let data = alloy::hex::decode(body["data"].as_str().unwrap()).unwrap();
    assert_eq!(&data[..4], &ICreateCall::performCreate2Call::SELECTOR);
    let decoded = ICreateCall::performCreate2Call::abi_decode(&data).unwrap();
    assert_eq!(decoded.deploymentData, init_code);
    assert_eq!(decoded.salt, salt);
}
