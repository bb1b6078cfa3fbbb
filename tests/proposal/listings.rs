//! Fetching queued proposals and history through the client

use safe_proposer::api::{HistoryItem, TxInfo};
use safe_proposer::{Error, Listing, SafeApiClient, SafeApiConfig};

use crate::common::{MockGateway, SAFE};

const QUEUED: &str = r#"{
    "count": 1,
    "next": null,
    "previous": null,
    "results": [{
        "safe": "0xBEeFbeefbEefbeEFbeEfbEEfBEeFbeEfBeEfBeef",
        "to": "0xaAaAaAaaAaAaAaaAaAAAAAAAAaaaAaAaAaaAaaAa",
        "value": "0",
        "data": null,
        "operation": 0,
        "nonce": 5,
        "safeTxHash": "0xdc9e4287d1f278967823b6db7d4b127174b6d55b655fedae047faac46b21eb18",
        "isExecuted": false,
        "confirmationsRequired": 2,
        "confirmations": []
    }]
}"#;

const HISTORY: &str = r#"{
    "next": null,
    "previous": null,
    "results": [
        {"type": "DATE_LABEL", "timestamp": 1714521600000},
        {"type": "TRANSACTION", "transaction": {
            "id": "multisig_1",
            "txStatus": "SUCCESS",
            "txInfo": {
                "type": "Transfer",
                "sender": {"value": "0xBEeFbeefbEefbeEFbeEfbEEfBEeFbeEfBeEfBeef"},
                "recipient": {"value": "0x1111111111111111111111111111111111111111"},
                "direction": "OUTGOING",
                "transferInfo": {"type": "NATIVE_COIN", "value": "1000"}
            },
            "executionInfo": {"type": "MULTISIG", "nonce": 4, "confirmationsRequired": 1, "confirmationsSubmitted": 1}
        }},
        {"type": "CONFLICT_HEADER", "nonce": 4},
        {"type": "LABEL", "label": "Next"},
        {"type": "TRANSACTION", "transaction": {
            "id": "creation_1",
            "txStatus": "SUCCESS",
            "txInfo": {
                "type": "Creation",
                "creator": {"value": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"},
                "transactionHash": "0x0101010101010101010101010101010101010101010101010101010101010101"
            }
        }}
    ]
}"#;

#[tokio::test]
async fn test_queued_listing() {
    let gateway = MockGateway::respond(200, QUEUED).await;
    let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();

    let listing = client.list_multisig(1, SAFE).await.unwrap();
    let Listing::Multisig(page) = &listing else {
        panic!("expected flat listing, got {listing:?}");
    };
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].nonce, 5);

    let captured = gateway.request().await;
    assert_eq!(captured.method, "GET");
    assert_eq!(
        captured.path,
        "/v1/chains/1/safes/0xBEeFbeefbEefbeEFbeEfbEEfBEeFbeEfBeEfBeef/multisig-transactions/raw"
    );
}

#[tokio::test]
async fn test_history_listing_yields_only_transactions() {
    let gateway = MockGateway::respond(200, HISTORY).await;
    let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();

    let listing = client.history(1, SAFE).await.unwrap();
    let Listing::History(page) = &listing else {
        panic!("expected history listing, got {listing:?}");
    };
    assert_eq!(page.results.len(), 5);
    assert!(matches!(page.results[2], HistoryItem::ConflictHeader { nonce: 4 }));

    let kinds: Vec<_> = page.transactions().map(|tx| tx.tx_info.kind()).collect();
    assert_eq!(kinds, ["Transfer", "Creation"]);
    assert!(matches!(
        page.transactions().next().map(|tx| &tx.tx_info),
        Some(TxInfo::Transfer { direction, .. }) if direction == "OUTGOING"
    ));

    let captured = gateway.request().await;
    assert_eq!(
        captured.path,
        "/v1/chains/1/safes/0xBEeFbeefbEefbeEFbeEfbEEfBEeFbeEfBeEfBeef/transactions/history/"
    );
}

#[tokio::test]
async fn test_listing_error_status() {
    let gateway = MockGateway::respond(404, r#"{"detail":"Not found."}"#).await;
    let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();

    let err = client.list_multisig(1, SAFE).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
}

#[tokio::test]
async fn test_listing_with_unknown_shape() {
    let gateway = MockGateway::respond(200, r#"{"results":[{"type":"SOMETHING_NEW"}]}"#).await;
    let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();

    let err = client.history(1, SAFE).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
