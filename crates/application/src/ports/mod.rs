mod container_snapshot_provider;
mod host_identity;

pub use container_snapshot_provider::ContainerSnapshotProvider;
pub use host_identity::HostIdentity;
