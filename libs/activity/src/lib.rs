use std::io::{self, Write};

mod client;
mod events;
pub mod render;
mod response;

pub use client::{Client, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use events::{
    fetch_events, Commit, Event, EventKind, Issue, Payload, Repo,
};

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("{}: {}", message, source)]
    ReqwestError {
        message: String,
        source: reqwest::Error,
    },

    #[error("GitHub API returned status: {}", status_code)]
    FailedStatusCode {
        status_code: reqwest::StatusCode,
        message: String,
    },

    #[error("{}: {}", message, source)]
    SerdeJsonError {
        message: String,
        source: serde_json::Error,
    },

    #[error("{}: {}", message, source)]
    InvalidHeaderValue {
        message: String,
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("{}", message)]
    Option { message: String },
}

/// Fetches `username`'s events and writes them to `out`. A failure at any
/// step is written as a single `Error:` line and nothing else.
pub async fn report<W: Write>(
    client: &Client,
    username: &str,
    out: &mut W,
) -> io::Result<()> {
    match fetch_events(client, username).await {
        Ok(events) => render::render(&events, out),
        Err(e) => writeln!(out, "Error: {}", e),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    /// Serves exactly one canned HTTP response on a local port. Returns the
    /// base url and a handle yielding the raw request head.
    pub async fn serve_once(
        status: &str,
        body: &str,
    ) -> (String, JoinHandle<String>) {
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
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();

            String::from_utf8_lossy(&head).into_owned()
        });

        (format!("http://{}", addr), handle)
    }
}
