use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{lookup_host, TcpSocket, TcpStream};
use tracing::debug;
use whoisd_application::ports::{WhoisTransport, DEFAULT_WHOIS_PORT};
use whoisd_domain::{DomainError, TransportStage};

/// Initial read buffer; most WHOIS answers fit.
const INITIAL_RESPONSE_CAPACITY: usize = 8 * 1024;

/// WHOIS over TCP (RFC 3912).
///
/// One connection per query: the request is a single line terminated by CRLF
/// and the response is everything the server sends until it closes the
/// connection. Multipath TCP is requested when the kernel offers it.
///
/// Deadlines belong to the caller: dropping the returned future aborts the
/// connect, write or read in progress and closes the socket.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    multipath: bool,
}

impl TcpTransport {
    pub fn new() -> Self {
        Self { multipath: true }
    }

    /// Plain TCP sockets only.
    pub fn without_multipath(mut self) -> Self {
        self.multipath = false;
        self
    }

    async fn connect(&self, server: &str, port: u16) -> Result<TcpStream, DomainError> {
        let addrs = lookup_host((server, port))
            .await
            .map_err(|e| DomainError::transport(server, TransportStage::Dial, e))?;

        let mut last_error: Option<io::Error> = None;
        for addr in addrs {
            match self.connect_addr(addr).await {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    debug!(server = %server, addr = %addr, error = %e, "WHOIS connect attempt failed");
                    last_error = Some(e);
                }
            }
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no addresses resolved".to_string());
        Err(DomainError::transport(server, TransportStage::Dial, reason))
    }

    async fn connect_addr(&self, addr: SocketAddr) -> io::Result<TcpStream> {
        let socket = match self.multipath.then(|| multipath_socket(addr)).flatten() {
            Some(socket) => socket,
            None if addr.is_ipv4() => TcpSocket::new_v4()?,
            None => TcpSocket::new_v6()?,
        };
        socket.connect(addr).await
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhoisTransport for TcpTransport {
    async fn query(&self, text: &str, server: &str, port: u16) -> Result<String, DomainError> {
        let port = if port == 0 { DEFAULT_WHOIS_PORT } else { port };

        let mut stream = self.connect(server, port).await?;

        stream
            .write_all(format!("{text}\r\n").as_bytes())
            .await
            .map_err(|e| DomainError::transport(server, TransportStage::Write, e))?;

        let mut response = Vec::with_capacity(INITIAL_RESPONSE_CAPACITY);
        stream
            .read_to_end(&mut response)
            .await
            .map_err(|e| DomainError::transport(server, TransportStage::Read, e))?;

        debug!(
            server = %server,
            port = port,
            bytes_received = response.len(),
            "WHOIS response received"
        );

        Ok(decode_response(response))
    }
}

/// UTF-8 when valid, otherwise Latin-1, which maps every byte to a char.
fn decode_response(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| e.into_bytes().iter().map(|&b| b as char).collect())
}

/// MPTCP socket, or `None` when the kernel refuses the protocol.
#[cfg(target_os = "linux")]
fn multipath_socket(addr: SocketAddr) -> Option<TcpSocket> {
    use socket2::{Domain, Protocol, Socket, Type};

    let socket = Socket::new(
        Domain::for_address(addr),
        Type::STREAM,
        Some(Protocol::MPTCP),
    )
    .ok()?;
    socket.set_nonblocking(true).ok()?;

    let stream: std::net::TcpStream = socket.into();
    Some(TcpSocket::from_std_stream(stream))
}

#[cfg(not(target_os = "linux"))]
fn multipath_socket(_addr: SocketAddr) -> Option<TcpSocket> {
    None
}
