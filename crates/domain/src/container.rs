use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortProtocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}

/// A container port and, when published, the host port it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedPort {
    pub private_port: u16,
    /// `None` for ports that are exposed but not reachable from the host.
    pub public_port: Option<u16>,
    pub protocol: PortProtocol,
}

impl PublishedPort {
    pub fn new(private_port: u16, public_port: Option<u16>) -> Self {
        Self {
            private_port,
            public_port,
            protocol: PortProtocol::Tcp,
        }
    }

    pub fn with_protocol(mut self, protocol: PortProtocol) -> Self {
        self.protocol = protocol;
        self
    }
}

/// One running container as seen in a runtime snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: Arc<str>,
    /// Runtime names, usually prefixed with `/`.
    pub names: Vec<Arc<str>>,
    pub labels: HashMap<String, String>,
    pub ports: Vec<PublishedPort>,
}

impl Container {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            names: Vec::new(),
            labels: HashMap::new(),
            ports: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_port(mut self, port: PublishedPort) -> Self {
        self.ports.push(port);
        self
    }

    /// Names in comparable form: the last `/` segment of each runtime name.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(|name| name.rsplit('/').next().unwrap_or_default())
    }

    /// Exact, case-sensitive label comparison.
    pub fn has_label(&self, key: &str, value: &str) -> bool {
        self.labels.get(key).is_some_and(|v| v == value)
    }

    pub fn public_ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().filter_map(|p| p.public_port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Starting,
    Healthy,
    Unhealthy,
    /// Container defines no health check.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    Created,
    Restarting,
    Running,
    Removing,
    Paused,
    Exited,
    Dead,
}

/// Filter passed to the runtime when listing containers.
///
/// Serializes to the runtime's `filters` object, e.g.
/// `{"health":["healthy","none"],"status":["running"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerFilter {
    pub health: Vec<HealthState>,
    pub status: Vec<ContainerStatus>,
}

impl ContainerFilter {
    /// Running containers that are healthy or have no health check.
    pub fn discoverable() -> Self {
        Self {
            health: vec![HealthState::Healthy, HealthState::None],
            status: vec![ContainerStatus::Running],
        }
    }
}

impl Default for ContainerFilter {
    fn default() -> Self {
        Self::discoverable()
    }
}
