//! Shared fixtures and a one-shot HTTP server standing in for the Safe gateway

use std::time::Duration;

use alloy::primitives::{address, Address, U256};
use alloy::signers::local::PrivateKeySigner;
use safe_proposer::{NonceSource, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// First well-known anvil development key
pub const ANVIL_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const ANVIL_ADDRESS: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

pub const SAFE: Address = address!("beefbeefbeefbeefbeefbeefbeefbeefbeefbeef");

pub fn anvil_signer() -> PrivateKeySigner {
    ANVIL_KEY.parse().unwrap()
}

/// Nonce source returning a fixed value
pub struct FixedNonce(pub u64);

impl NonceSource for FixedNonce {
    async fn safe_nonce(&self) -> Result<U256> {
        Ok(U256::from(self.0))
    }
}

/// Nonce source that must never be consulted
pub struct NoNonce;

impl NonceSource for NoNonce {
    async fn safe_nonce(&self) -> Result<U256> {
        panic!("nonce source consulted despite an explicit nonce")
    }
}

/// Request as seen by the mock gateway
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Accepts a single connection and answers it with a canned response
pub struct MockGateway {
    pub base_url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl MockGateway {
    pub async fn respond(status: u16, body: &'static str) -> Self {
        Self::spawn(status, body, Duration::ZERO).await
    }

    /// Reads the request, then waits `delay` before answering
    pub async fn stall(delay: Duration) -> Self {
        Self::spawn(200, "{}", delay).await
    }

    async fn spawn(status: u16, body: &'static str, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let captured = read_request(&mut stream).await;
            tokio::time::sleep(delay).await;

            let response = format!(
                "HTTP/1.1 {status} Mock\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            // the client may already have given up
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
            captured
        });

        Self { base_url, handle }
    }

    /// Waits for the server task and returns what it received
    pub async fn request(self) -> CapturedRequest {
        self.handle.await.unwrap()
    }
}

async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .map(|(_, value)| value.trim().parse::<usize>().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    let body = String::from_utf8(buf[header_end..header_end + content_length].to_vec()).unwrap();

    CapturedRequest { method, path, body }
}
