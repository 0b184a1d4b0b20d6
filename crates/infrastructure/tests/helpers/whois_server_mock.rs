#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Minimal WHOIS server on 127.0.0.1: reads one CRLF line, writes a canned
/// answer, closes the connection.
pub struct MockWhoisServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockWhoisServer {
    pub async fn start(answer: &str) -> std::io::Result<Self> {
        Self::start_bytes(answer.as_bytes()).await
    }

    pub async fn start_bytes(answer: &[u8]) -> std::io::Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let answer: Arc<[u8]> = Arc::from(answer);
        let log = Arc::clone(&received);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let answer = Arc::clone(&answer);
                        let log = Arc::clone(&log);
                        tokio::spawn(async move {
                            let (read, mut write) = stream.into_split();
                            let mut line = String::new();
                            if BufReader::new(read).read_line(&mut line).await.is_ok() {
                                log.lock().unwrap().push(line);
                                let _ = write.write_all(&answer).await;
                                let _ = write.shutdown().await;
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Raw request lines, CRLF included.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockWhoisServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
