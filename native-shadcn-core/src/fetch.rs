//! Registry retrieval
//!
//! The installer only sees a [`RegistrySource`]; the HTTP client lives behind
//! it so the pipeline can be driven from memory in tests.

use async_trait::async_trait;

use crate::error::RegistryError;

/// Something that can produce the raw registry document
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Retrieve the document text
    async fn fetch(&self) -> Result<String, RegistryError>;

    /// Where the document comes from, for messages
    fn location(&self) -> &str;
}

/// Fetches the registry document over HTTP
pub struct HttpRegistrySource {
    client: reqwest::Client,
    url: String,
}

impl HttpRegistrySource {
    pub fn new(url: impl Into<String>) -> Result<Self, RegistryError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .user_agent(concat!("native-shadcn/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RegistryError::Fetch {
                url: url.clone(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self::with_client(url, client))
    }

    /// Use a preconfigured client
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    fn fetch_error(&self, reason: impl Into<String>) -> RegistryError {
        RegistryError::Fetch {
            url: self.url.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl RegistrySource for HttpRegistrySource {
    async fn fetch(&self) -> Result<String, RegistryError> {
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self.fetch_error(format!("HTTP {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| self.fetch_error(format!("failed to read response body: {e}")))
    }

    fn location(&self) -> &str {
        &self.url
    }
}

/// Serves a fixed document, or a fixed fetch failure
#[cfg(test)]
pub struct MockSource {
    pub document: Option<String>,
}

#[cfg(test)]
#[async_trait]
impl RegistrySource for MockSource {
    async fn fetch(&self) -> Result<String, RegistryError> {
        self.document.clone().ok_or_else(|| RegistryError::Fetch {
            url: "mock://registry".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        })
    }

    fn location(&self) -> &str {
        "mock://registry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source() {
        let source = MockSource {
            document: Some("{}".to_string()),
        };
        assert_eq!(source.fetch().await.unwrap(), "{}");

        let failing = MockSource { document: None };
        let err = failing.fetch().await.unwrap_err();
        assert!(err.to_string().contains("mock://registry"));
    }

    /// Serve one canned HTTP response on a local port
    fn serve_once(response: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{addr}/registry.json")
    }

    fn direct_source(url: String) -> HttpRegistrySource {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpRegistrySource::with_client(url, client)
    }

    #[tokio::test]
    async fn test_http_success_returns_body() {
        let url =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}");
        let source = direct_source(url);
        assert_eq!(source.fetch().await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_http_error_status_is_fetch_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let source = direct_source(url.clone());

        let err = source.fetch().await.unwrap_err();
        match err {
            RegistryError::Fetch { url: failed, reason } => {
                assert_eq!(failed, url);
                assert!(reason.contains("404"));
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_fetch_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let source = direct_source(format!("http://127.0.0.1:{port}/registry.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, RegistryError::Fetch { .. }));
    }
}
