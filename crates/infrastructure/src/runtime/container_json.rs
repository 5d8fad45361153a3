//! Docker Engine `GET /containers/json` response model.
//!
//! Only the fields discovery needs are decoded; everything else is ignored.
//!
//! ```text
//! [{"Id":"8dfa…","Names":["/web-1"],"Labels":{"app":"web"},
//!   "Ports":[{"IP":"0.0.0.0","PrivatePort":80,"PublicPort":8080,"Type":"tcp"}]}]
//! ```

use dockdns_domain::{Container, DomainError, PortProtocol, PublishedPort};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub names: Option<Vec<String>>,

    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,

    #[serde(default)]
    pub ports: Option<Vec<PortSummary>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortSummary {
    pub private_port: u16,

    #[serde(default)]
    pub public_port: Option<u16>,

    #[serde(rename = "Type", default)]
    pub protocol: PortProtocol,
}

impl From<ContainerSummary> for Container {
    fn from(summary: ContainerSummary) -> Self {
        Container {
            id: summary.id.into(),
            names: summary
                .names
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            labels: summary.labels.unwrap_or_default(),
            ports: summary
                .ports
                .unwrap_or_default()
                .into_iter()
                .map(|p| PublishedPort::new(p.private_port, p.public_port).with_protocol(p.protocol))
                .collect(),
        }
    }
}

/// Decode a container listing body into domain containers, keeping runtime order.
pub fn parse_container_list(body: &[u8]) -> Result<Vec<Container>, DomainError> {
    let summaries: Vec<ContainerSummary> = serde_json::from_slice(body).map_err(|e| {
        DomainError::RuntimeResponse(format!("Failed to decode container list: {}", e))
    })?;
    Ok(summaries.into_iter().map(Container::from).collect())
}
