//! Non-success statuses and deadlines on submission

use std::time::Duration;

use alloy::primitives::{Address, Bytes, U256};
use safe_proposer::api::{Origin, DEFAULT_ORIGIN_NAME};
use safe_proposer::error::ApiErrorBody;
use safe_proposer::{
    Error, Operation, SafeApiClient, SafeApiConfig, SignedTransaction, TransactionRecord,
};

use crate::common::{anvil_signer, MockGateway, SAFE};

fn signed() -> SignedTransaction {
    let record = TransactionRecord::new(Address::repeat_byte(0xaa), U256::ZERO, Bytes::new(), Operation::Call)
        .with_nonce(U256::from(5));
    SignedTransaction::sign(record, SAFE, 1, &anvil_signer()).unwrap()
}

fn origin() -> Origin {
    Origin::new("http://localhost", DEFAULT_ORIGIN_NAME)
}

#[tokio::test]
async fn test_created_and_ok_are_success() {
    for status in [200, 201] {
        let gateway = MockGateway::respond(status, "{}").await;
        let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();
        client.propose(&signed(), &origin()).await.unwrap();
    }
}

#[tokio::test]
async fn test_json_error_body_is_kept() {
    let gateway =
        MockGateway::respond(422, r#"{"code":1337,"message":"Nonce already used","arguments":["5"]}"#).await;
    let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();

    let err = client.propose(&signed(), &origin()).await.unwrap_err();
    let rendered = err.to_string();
    match err {
        Error::Api {
            status: 422,
            body: ApiErrorBody::Json(value),
        } => {
            assert_eq!(value["code"], 1337);
            assert_eq!(value["message"], "Nonce already used");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(rendered.starts_with("HTTP 422, error response:\n"));
}

#[tokio::test]
async fn test_text_error_body_is_kept_verbatim() {
    let gateway = MockGateway::respond(500, "upstream exploded").await;
    let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();

    let err = client.propose(&signed(), &origin()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "HTTP 500, failed to parse error body: upstream exploded"
    );
}

#[tokio::test]
async fn test_no_content_is_not_success() {
    let gateway = MockGateway::respond(204, "").await;
    let client = SafeApiClient::new(SafeApiConfig::new(&gateway.base_url)).unwrap();

    let err = client.propose(&signed(), &origin()).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 204, .. }));
}

#[tokio::test]
async fn test_slow_gateway_times_out() {
    let gateway = MockGateway::stall(Duration::from_secs(5)).await;
    let config = SafeApiConfig::new(&gateway.base_url).with_timeout(Duration::from_millis(200));
    let client = SafeApiClient::new(config).unwrap();

    let err = client.propose(&signed(), &origin()).await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { what: "proposal", .. }),
        "unexpected error {err:?}"
    );
}

#[tokio::test]
async fn test_unreachable_gateway_is_transport_error() {
    // bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SafeApiClient::new(SafeApiConfig::new(format!("http://{addr}"))).unwrap();
    let err = client.propose(&signed(), &origin()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "unexpected error {err:?}");
}
