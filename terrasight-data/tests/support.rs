//! Single-shot local HTTP responders for behaviour tests.

use std::net::TcpListener as StdListener;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A local listener that answers exactly one request with a fixed response.
///
/// The port is bound synchronously so its URL can be configured before any
/// runtime exists; [`CannedResponder::answer`] then serves the request.
#[derive(Debug)]
pub struct CannedResponder {
    listener: StdListener,
    status: &'static str,
    body: &'static str,
}

impl CannedResponder {
    /// Bind an ephemeral port that will reply with `status` and `body`.
    pub fn bind(status: &'static str, body: &'static str) -> Self {
        let listener = StdListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
        Self {
            listener,
            status,
            body,
        }
    }

    /// URL of `path` on the listener.
    pub fn url(&self, path: &str) -> String {
        let addr = self
            .listener
            .local_addr()
            .expect("listener should have an address");
        format!("http://{addr}{path}")
    }

    /// Accept one connection, reply to it and return the raw request.
    pub async fn answer(self) -> String {
        self.listener
            .set_nonblocking(true)
            .expect("listener should switch to non-blocking mode");
        let listener = TcpListener::from_std(self.listener).expect("listener should register");
        let (mut stream, _) = listener.accept().await.expect("client should connect");
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\n\
             content-length: {length}\r\nconnection: close\r\n\r\n{body}",
            status = self.status,
            length = self.body.len(),
            body = self.body,
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("response should be written");
        stream.shutdown().await.expect("stream should close");
        request
    }
}

/// Body of a raw HTTP request, empty when there is none.
pub fn request_body(request: &str) -> &str {
    request.split_once("\r\n\r\n").map_or("", |(_, body)| body)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut received = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !request_complete(&received) {
        let read = stream
            .read(&mut chunk)
            .await
            .expect("request should be readable");
        if read == 0 {
            break;
        }
        received.extend(chunk.iter().take(read));
    }
    String::from_utf8_lossy(&received).into_owned()
}

fn request_complete(received: &[u8]) -> bool {
    let text = String::from_utf8_lossy(received);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let expected = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= expected
}
