//! Docker Engine API client over the local unix socket.
//!
//! Each listing opens a fresh HTTP/1.1 connection, sends one request and
//! drops the connection. There is no pooling and no retry: a failed listing
//! fails the DNS request that triggered it.
//!
//! Wire format:
//! ```text
//! GET /v1.41/containers/json?filters=%7B%22health%22%3A...%7D HTTP/1.1
//! Host: docker
//! ```

use super::container_json::parse_container_list;
use async_trait::async_trait;
use bytes::Bytes;
use dockdns_application::ports::ContainerSnapshotProvider;
use dockdns_domain::config::RuntimeConfig;
use dockdns_domain::{Container, ContainerFilter, DomainError};
use http_body_util::{BodyExt, Empty};
use hyper::client::conn::http1;
use hyper::{header, Method, Request};
use hyper_util::rt::TokioIo;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::UnixStream;
use tracing::debug;
use url::{Position, Url};

/// Authority sent in the Host header; the engine ignores its value.
const DOCKER_HOST_HEADER: &str = "docker";

pub struct DockerEngineClient {
    socket_path: PathBuf,
    api_version: String,
    timeout: Duration,
}

impl DockerEngineClient {
    pub fn new(socket_path: impl Into<PathBuf>, api_version: impl Into<String>) -> Self {
        Self {
            socket_path: socket_path.into(),
            api_version: api_version.into(),
            timeout: Duration::from_millis(2000),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(&config.socket_path, &config.api_version)
            .with_timeout(Duration::from_millis(config.timeout_ms))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path and query of the container listing request.
    pub fn list_containers_uri(&self, filter: &ContainerFilter) -> Result<String, DomainError> {
        let filters = serde_json::to_string(filter).map_err(|e| {
            DomainError::RuntimeResponse(format!("Failed to encode container filter: {}", e))
        })?;

        let mut url = Url::parse(&format!("http://{}/", DOCKER_HOST_HEADER))
            .map_err(|e| DomainError::RuntimeResponse(e.to_string()))?;
        url.set_path(&format!(
            "/{}/containers/json",
            self.api_version.trim_matches('/')
        ));
        url.query_pairs_mut().append_pair("filters", &filters);

        Ok(url[Position::BeforePath..].to_string())
    }

    async fn get(&self, uri: &str) -> Result<Bytes, DomainError> {
        let endpoint = self.socket_path.display().to_string();
        let unavailable = |reason: String| DomainError::RuntimeUnavailable {
            endpoint: endpoint.clone(),
            reason,
        };

        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let (mut sender, connection) = http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| unavailable(format!("HTTP handshake failed: {}", e)))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!(error = %e, "Runtime connection closed with error");
            }
        });

        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::HOST, DOCKER_HOST_HEADER)
            .header(header::ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())
            .map_err(|e| DomainError::RuntimeResponse(format!("Invalid request: {}", e)))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| unavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| unavailable(format!("Failed to read response body: {}", e)))?
            .to_bytes();

        if !status.is_success() {
            return Err(DomainError::RuntimeResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                String::from_utf8_lossy(&body).trim()
            )));
        }

        Ok(body)
    }
}

#[async_trait]
impl ContainerSnapshotProvider for DockerEngineClient {
    async fn list_running(&self, filter: &ContainerFilter) -> Result<Vec<Container>, DomainError> {
        let uri = self.list_containers_uri(filter)?;

        debug!(socket = %self.socket_path.display(), uri = %uri, "Listing containers");

        let body = tokio::time::timeout(self.timeout, self.get(&uri))
            .await
            .map_err(|_| DomainError::RuntimeTimeout {
                timeout_ms: self.timeout.as_millis() as u64,
            })??;

        let containers = parse_container_list(&body)?;

        debug!(count = containers.len(), "Container snapshot received");

        Ok(containers)
    }
}
