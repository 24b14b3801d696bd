//! HTTP quote source: one GET per call, JSON body mapped onto a domain quote

use async_trait::async_trait;
use quotebox_application::{QuoteSource, SourceError};
use quotebox_domain::{Quote, parse_quote};
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

/// Maximum response body size (1 MB); a single quote is a few hundred bytes
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Fetches random quotes from a JSON HTTP endpoint
///
/// No retries and no overall request timeout here: the session controller
/// races each call against its own timer and drops it when the timer wins.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    /// Build a source with its own client
    ///
    /// `connect_timeout` bounds only connection establishment.
    pub fn new(
        url: impl Into<String>,
        user_agent: &str,
        connect_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self::with_client(client, url))
    }

    /// Use an existing client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Only a response that stalls after connecting counts as a timeout; the
/// request deadline belongs to the session controller.
fn transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() && !e.is_connect() {
        SourceError::Timeout
    } else {
        SourceError::ConnectionError(e.to_string())
    }
}

fn body_too_large() -> SourceError {
    SourceError::InvalidResponse(format!("response larger than {} bytes", MAX_BODY_SIZE))
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_random(&self) -> Result<Quote, SourceError> {
        debug!(url = %self.url, "GET quote");

        let mut response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
            });
        }

        if response.content_length().unwrap_or(0) > MAX_BODY_SIZE as u64 {
            return Err(body_too_large());
        }

        // Chunked bodies carry no length up front
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(transport_error)? {
            if body.len() + chunk.len() > MAX_BODY_SIZE {
                return Err(body_too_large());
            }
            body.extend_from_slice(&chunk);
        }

        let text = String::from_utf8_lossy(&body);
        Ok(parse_quote(&text)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one canned HTTP response; the request head is sent back
    async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        serve_raw(response.into_bytes()).await
    }

    /// Serve raw response bytes to one connection
    async fn serve_raw(response: Vec<u8>) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut request = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = tx.send(String::from_utf8_lossy(&request).to_string());
            // The client may hang up early on oversized bodies
            let _ = socket.write_all(&response).await;
            let _ = socket.shutdown().await;
        });

        (format!("http://{}/random", addr), rx)
    }

    fn source(url: String) -> HttpQuoteSource {
        HttpQuoteSource::new(url, "quotebox-test/1.0", Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_parses_quote() {
        let (url, request) = serve_once(
            "200 OK",
            r#"{"_id":"1","content":"X","author":"Y","tags":["a","b"]}"#,
        )
        .await;

        let quote = source(url).fetch_random().await.unwrap();
        assert_eq!(quote.text(), "X");
        assert_eq!(quote.author(), "Y");
        assert_eq!(quote.tags_line(), "Tags: a, b");
        assert_eq!(quote.id().unwrap().as_str(), "1");

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /random "));
        assert!(request.contains("user-agent: quotebox-test/1.0"));
        assert!(request.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let (url, _) = serve_once("503 Service Unavailable", "{}").await;
        let err = source(url).fetch_random().await.unwrap_err();
        assert_eq!(err, SourceError::HttpStatus { status: 503 });
    }

    #[tokio::test]
    async fn test_unparseable_body_is_invalid_response() {
        let (url, _) = serve_once("200 OK", r#"{"author":"only"}"#).await;
        let err = source(url).fetch_random().await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(format!("http://{}/random", addr))
            .fetch_random()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::ConnectionError(_)));
    }

    #[tokio::test]
    async fn test_oversized_chunked_body_is_rejected() {
        let chunk = vec![b' '; 256 * 1024];
        let mut response =
            b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\n\r\n"
                .to_vec();
        for _ in 0..5 {
            response.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
            response.extend_from_slice(&chunk);
            response.extend_from_slice(b"\r\n");
        }
        response.extend_from_slice(b"0\r\n\r\n");
        let (url, _) = serve_raw(response).await;

        let err = source(url).fetch_random().await.unwrap_err();
        assert_eq!(err, body_too_large());
    }

    #[tokio::test]
    async fn test_small_chunked_body_is_parsed() {
        let body = r#"{"content":"X","author":"Y"}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n{:x}\r\n{}\r\n0\r\n\r\n",
            body.len(),
            body
        );
        let (url, _) = serve_raw(response.into_bytes()).await;

        let quote = source(url).fetch_random().await.unwrap();
        assert_eq!(quote.text(), "X");
    }

    #[tokio::test]
    async fn test_stalled_response_is_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let err = HttpQuoteSource::with_client(client, format!("http://{}/random", addr))
            .fetch_random()
            .await
            .unwrap_err();
        assert_eq!(err, SourceError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error_not_timeout() {
        // Non-routable: either the connect timeout fires or the route is refused
        let client = reqwest::Client::builder()
            .no_proxy()
            .connect_timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let err = HttpQuoteSource::with_client(client, "http://10.255.255.1:81/random")
            .fetch_random()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::ConnectionError(_)), "{:?}", err);
    }

    #[test]
    fn test_describe_is_url() {
        let s = source("http://example.invalid/q".to_string());
        assert_eq!(s.describe(), "http://example.invalid/q");
        assert_eq!(s.url(), "http://example.invalid/q");
    }
}
