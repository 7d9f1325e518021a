//! In-memory fakes for the service traits.
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::entity::Snapshot;
use crate::paprika::{PriceService, Ticker};
use crate::storage::SnapshotRepository;
use crate::view::PriceView;

/// Serves a canned ticker body as if it came from the price API
pub struct FakePriceService {
    ticker: Value,
}

impl FakePriceService {
    pub fn new(ticker: Value) -> Self {
        Self { ticker }
    }
}

#[async_trait]
impl PriceService for FakePriceService {
    async fn fetch_snapshot(&self, coin_id: &str, currency: &str) -> Result<Snapshot> {
        let ticker: Ticker = serde_json::from_value(self.ticker.clone())?;
        Ok(ticker.snapshot(coin_id, currency)?)
    }
}

#[derive(Default)]
pub struct MemorySnapshotRepository {
    pub snapshots: Mutex<HashMap<String, Snapshot>>,
}

impl MemorySnapshotRepository {
    pub fn with(coin_id: &str, snapshot: Snapshot) -> Self {
        let repo = Self::default();
        repo.snapshots
            .lock()
            .unwrap()
            .insert(coin_id.to_string(), snapshot);
        repo
    }

    pub fn stored(&self, coin_id: &str) -> Option<Snapshot> {
        self.snapshots.lock().unwrap().get(coin_id).copied()
    }
}

#[async_trait]
impl SnapshotRepository for MemorySnapshotRepository {
    async fn get(&self, coin_id: &str) -> Result<Option<Snapshot>> {
        Ok(self.stored(coin_id))
    }

    async fn set(&self, coin_id: &str, snapshot: &Snapshot) -> Result<()> {
        self.snapshots
            .lock()
            .unwrap()
            .insert(coin_id.to_string(), *snapshot);
        Ok(())
    }
}

/// Records every report instead of sending it
#[derive(Default)]
pub struct RecordingView {
    pub sent: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceView for RecordingView {
    async fn send_report(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Serves a single canned HTTP response on a local port.
///
/// Returns the base URL and a handle resolving to the raw request that was received.
pub async fn serve_once(
    status: u16,
    body: &str,
) -> (String, tokio::task::JoinHandle<String>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        // Read headers, then as much body as Content-Length announces
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}
