//! One-shot HTTP responder for exercising the fetcher without the network

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::FetcherConfig;

/// A listener that answers exactly one request with a canned response
pub struct MockUpstream {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl MockUpstream {
    /// Start answering the next request with `status` (e.g. "200 OK") and `body`
    pub async fn respond(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();

            String::from_utf8_lossy(&head).to_string()
        });

        Self { base_url: format!("http://{}/v3", addr), handle }
    }

    /// Config pointing at this responder
    pub fn config(&self, api_key: Option<&str>) -> FetcherConfig {
        let mut config = FetcherConfig::default();
        config.api_football.base_url = self.base_url.clone();
        config.api_football.api_key = api_key.map(str::to_string);
        config
    }

    /// Request line and headers as received, lower-cased
    pub async fn received(self) -> String {
        self.handle.await.unwrap().to_lowercase()
    }
}

/// Base URL of a port nothing is listening on
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v3", addr)
}
