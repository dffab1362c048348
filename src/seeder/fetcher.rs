//! Dataset downloading

use crate::config::{Config, YEAR_PLACEHOLDER};
use crate::seeder::SeedError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Source of raw yearly datasets
#[async_trait]
pub trait YearFetcher: Send + Sync {
    /// Download the dataset for `year`, returning the response body untouched
    async fn fetch(&self, year: i32) -> Result<Vec<u8>, SeedError>;
}

/// Fetches datasets over HTTP, one GET per year with no retry
pub struct HttpFetcher {
    client: Client,
    url_template: String,
}

impl HttpFetcher {
    pub fn new(url_template: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.url_template.clone(),
            config.http_timeout(),
            &config.http.user_agent,
        )
    }

    pub fn url_for(&self, year: i32) -> String {
        self.url_template.replace(YEAR_PLACEHOLDER, &year.to_string())
    }
}

#[async_trait]
impl YearFetcher for HttpFetcher {
    async fn fetch(&self, year: i32) -> Result<Vec<u8>, SeedError> {
        let url = self.url_for(year);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SeedError::fetch(year, describe_request_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::fetch(year, format!("HTTP {} from {}", status, url)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SeedError::fetch(year, describe_request_error(&e)))?;

        Ok(body.to_vec())
    }
}

fn describe_request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned HTTP response on a local port. Returns the URL
    /// template pointing at it and a receiver for the request line.
    pub(crate) async fn serve_once(response: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        (format!("http://{}/best-books/{{year}}.json", addr), rx)
    }

    pub(crate) fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    fn fetcher(template: &str, timeout: Duration) -> HttpFetcher {
        HttpFetcher::new(template, timeout, "books-we-love-test").unwrap()
    }

    #[test]
    fn test_url_for_substitutes_year() {
        let fetcher = fetcher(crate::config::DEFAULT_URL_TEMPLATE, Duration::from_secs(1));
        assert_eq!(fetcher.url_for(2025), "https://apps.npr.org/best-books/2025.json");
        assert_eq!(fetcher.url_for(2013), fetcher.url_for(2013));
    }

    #[tokio::test]
    async fn test_fetch_returns_body_bytes() {
        let (template, request_line) =
            serve_once(http_response("200 OK", r#"{"books":[]}"#)).await;

        let body = fetcher(&template, Duration::from_secs(5)).fetch(2025).await.unwrap();
        assert_eq!(body, br#"{"books":[]}"#.to_vec());

        let request_line = request_line.await.unwrap();
        assert_eq!(request_line, "GET /best-books/2025.json HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_fetch_error() {
        let (template, _) = serve_once(http_response("404 Not Found", "")).await;

        let err = fetcher(&template, Duration::from_secs(5)).fetch(1999).await.unwrap_err();
        assert!(matches!(err, SeedError::Fetch { year: 1999, .. }));
        let message = err.to_string();
        assert!(message.contains("1999"));
        assert!(message.contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let template = format!("http://{}/{{year}}.json", addr);
        let err = fetcher(&template, Duration::from_millis(200))
            .fetch(2014)
            .await
            .unwrap_err();
        assert_eq!(err.year(), 2014);
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_fetch_error() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let template = format!("http://{}/{{year}}.json", addr);
        let err = fetcher(&template, Duration::from_secs(2)).fetch(2020).await.unwrap_err();
        assert!(matches!(err, SeedError::Fetch { year: 2020, .. }));
    }
}
