//! Full flow from raw inputs to the body the gateway receives

use alloy::primitives::{b256, bytes, U256};
use safe_proposer::api::Origin;
use safe_proposer::{ProposalInputs, ProposalRequest, Proposer, ProposerConfig, SafeApiConfig};
use serde_json::Value;

use crate::common::{anvil_signer, FixedNonce, MockGateway, NoNonce, ANVIL_ADDRESS, SAFE};

const TO: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

fn proposer(base_url: &str) -> Proposer {
    Proposer::new(ProposerConfig {
        api: SafeApiConfig::new(base_url),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_pinned_proposal_reaches_gateway() {
    let gateway = MockGateway::respond(201, r#"{"txId":"multisig_0x"}"#).await;
    let base_url = gateway.base_url.clone();
    let proposer = proposer(&base_url);

    let request = ProposalRequest::parse(&ProposalInputs {
        to: TO,
        value: "0",
        ..Default::default()
    })
    .unwrap();
    let signed = proposer
        .propose(request, &FixedNonce(5), &anvil_signer(), SAFE, 1)
        .await
        .unwrap();

    assert_eq!(
        signed.safe_tx_hash(),
        b256!("dc9e4287d1f278967823b6db7d4b127174b6d55b655fedae047faac46b21eb18")
    );
    assert_eq!(
        signed.signature(),
        &bytes!("1839ddf5a965b5211b0fbc882e99bdc53e87f96ded226fff1f5ffce0b8cf98c2730a01dbbf7f7ba9a6a50e46489aa5fcb6c331469a60fd8af99558ed51ec803e1b")
    );
    assert_eq!(signed.sender(), ANVIL_ADDRESS);

    let captured = gateway.request().await;
    assert_eq!(captured.method, "POST");
    assert_eq!(
        captured.path,
        "/v1/chains/1/transactions/0xBEeFbeefbEefbeEFbeEfbEEfBEeFbeEfBeEfBeef/propose"
    );

    let body: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body["to"], "0xaAaAaAaaAaAaAaaAaAAAAAAAAaaaAaAaAaaAaaAa");
    assert_eq!(body["value"], "0");
    assert_eq!(body["data"], "0x");
    assert_eq!(body["operation"], 0);
    assert_eq!(body["nonce"], "5");
    assert_eq!(
        body["safeTxHash"],
        "0xdc9e4287d1f278967823b6db7d4b127174b6d55b655fedae047faac46b21eb18"
    );
    assert_eq!(body["sender"], "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    assert_eq!(
        body["signature"],
        "0x1839ddf5a965b5211b0fbc882e99bdc53e87f96ded226fff1f5ffce0b8cf98c2730a01dbbf7f7ba9a6a50e46489aa5fcb6c331469a60fd8af99558ed51ec803e1b"
    );

    let origin: Origin = serde_json::from_str(body["origin"].as_str().unwrap()).unwrap();
    assert_eq!(origin.name, "SafeProposal Creation");
    assert_eq!(origin.url, format!("{base_url}{}", captured.path));
}

#[tokio::test]
async fn test_explicit_nonce_skips_nonce_source() {
    let gateway = MockGateway::respond(200, "{}").await;
    let proposer = proposer(&gateway.base_url);

    let request = ProposalRequest::parse(&ProposalInputs {
        to: TO,
        value: "0",
        nonce: Some("0x5"),
        ..Default::default()
    })
    .unwrap();
    let signed = proposer
        .propose(request, &NoNonce, &anvil_signer(), SAFE, 1)
        .await
        .unwrap();

    assert_eq!(signed.record().nonce, U256::from(5));
    assert_eq!(
        signed.safe_tx_hash(),
        b256!("dc9e4287d1f278967823b6db7d4b127174b6d55b655fedae047faac46b21eb18")
    );

    let body: Value = serde_json::from_str(&gateway.request().await.body).unwrap();
    assert_eq!(body["nonce"], "5");
}

#[tokio::test]
async fn test_calldata_is_sent_as_decoded_hex() {
    let gateway = MockGateway::respond(201, "{}").await;
    let proposer = proposer(&gateway.base_url);

    let request = ProposalRequest::parse(&ProposalInputs {
        to: TO,
        value: "0xde0b6b3a7640000",
        calldata: Some("A9059CBB"),
        operation: 1,
        nonce: Some("42"),
    })
    .unwrap();
    let signed = proposer
        .propose(request, &NoNonce, &anvil_signer(), SAFE, 11155111)
        .await
        .unwrap();
    signed.verify().unwrap();

    let captured = gateway.request().await;
    assert!(captured.path.starts_with("/v1/chains/11155111/"));

    let body: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body["data"], "0xa9059cbb");
    assert_eq!(body["value"], "1000000000000000000");
    assert_eq!(body["operation"], 1);
    assert_eq!(body["nonce"], "42");
}
