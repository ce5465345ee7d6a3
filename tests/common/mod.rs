//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Start a mock backend that answers every request with its name and the
/// request line. Returns a counter of accepted connections (registration
/// probes included).
pub async fn start_mock_backend(addr: SocketAddr, name: &'static str) -> Arc<AtomicU32> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);
                        let mut request_line = String::new();
                        match reader.read_line(&mut request_line).await {
                            Ok(0) | Err(_) => return,
                            Ok(_) => {}
                        }

                        // Drain headers, then the body per Content-Length.
                        let mut content_length = 0usize;
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) | Err(_) => return,
                                Ok(_) if line == "\r\n" => break,
                                Ok(_) => {
                                    if let Some(value) =
                                        line.to_ascii_lowercase().strip_prefix("content-length:")
                                    {
                                        content_length =
                                            value.trim().parse().unwrap_or(0);
                                    }
                                }
                            }
                        }
                        if content_length > 0 {
                            let mut body = vec![0u8; content_length];
                            if reader.read_exact(&mut body).await.is_err() {
                                return;
                            }
                        }

                        let body = format!("{} {}", name, request_line.trim_end());
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    hits
}
