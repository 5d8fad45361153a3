use async_trait::async_trait;
use dockdns_domain::{Container, ContainerFilter, DomainError};

#[async_trait]
pub trait ContainerSnapshotProvider: Send + Sync {
    /// Read the current set of containers accepted by `filter`, in runtime order.
    ///
    /// An unreachable runtime must surface as an error, never as an empty list.
    async fn list_running(&self, filter: &ContainerFilter) -> Result<Vec<Container>, DomainError>;
}
