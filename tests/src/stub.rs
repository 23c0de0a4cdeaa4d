use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::Notify,
    task::JoinHandle,
};
use wikiatlas::{Pending, PromiseToast, Settled, SparqlClient, Toaster};

/// What the stub server saw. `head` is lowercased, `body` is verbatim.
#[derive(Debug)]
pub struct Request {
    pub head: String,
    pub body: String,
}

/// Client that talks to the stub server directly, whatever proxy the
/// environment configures.
pub fn local_client(endpoint: &str) -> SparqlClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .user_agent("wikiatlas-tests")
        .build()
        .expect("client builds");
    SparqlClient::with_client(client, endpoint)
}

/// Answers exactly one request with `status` and `body`, then hangs up.
pub async fn serve_once(
    status: &'static str,
    body: impl Into<String>,
) -> (String, JoinHandle<Request>) {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("bound address");

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/sparql-results+json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = stream.shutdown().await;
        request
    });

    (format!("http://{addr}/sparql"), server)
}

/// An endpoint nothing listens on.
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("bound address");
    drop(listener);
    format!("http://{addr}/sparql")
}

async fn read_request(stream: &mut TcpStream) -> Request {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                return Request {
                    head,
                    body: String::from_utf8_lossy(&buf[end + 4..end + 4 + len]).into_owned(),
                };
            }
        }
    }

    Request {
        head: String::from_utf8_lossy(&buf).to_lowercase(),
        body: String::new(),
    }
}

/// Writes every phase it is shown into a shared log.
#[derive(Default)]
pub struct RecordingToaster {
    log: Mutex<Vec<String>>,
    done: Notify,
}

impl RecordingToaster {
    pub fn record(&self, line: impl Into<String>) {
        self.log.lock().expect("log poisoned").push(line.into());
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().expect("log poisoned").clone()
    }

    /// Waits until a tracked request has settled.
    pub async fn wait(&self) {
        tokio::time::timeout(Duration::from_secs(10), self.done.notified())
            .await
            .expect("toaster never saw the request settle");
    }
}

#[async_trait]
impl Toaster for RecordingToaster {
    async fn promise(&self, pending: Pending, toast: PromiseToast) {
        self.record(format!("loading: {}", toast.loading.title));
        let line = match pending.settled().await {
            Settled::Success => format!("success: {}", toast.success.title),
            Settled::Failure(reason) => format!("failure: {reason}"),
        };
        self.record(line);
        self.done.notify_one();
    }
}

/// Never gets past the loading phase.
pub struct StuckToaster;

#[async_trait]
impl Toaster for StuckToaster {
    async fn promise(&self, _pending: Pending, _toast: PromiseToast) {
        std::future::pending::<()>().await
    }
}
