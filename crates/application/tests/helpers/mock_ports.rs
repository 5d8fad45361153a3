#![allow(dead_code)]

use async_trait::async_trait;
use dockdns_application::ports::{ContainerSnapshotProvider, HostIdentity};
use dockdns_domain::{Container, ContainerFilter, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockSnapshotProvider {
    containers: Arc<Mutex<Vec<Container>>>,
    error: Arc<Mutex<Option<DomainError>>>,
    calls: Arc<AtomicUsize>,
    last_filter: Arc<Mutex<Option<ContainerFilter>>>,
}

impl MockSnapshotProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers(containers: Vec<Container>) -> Self {
        let provider = Self::new();
        provider.set_containers(containers);
        provider
    }

    pub fn set_containers(&self, containers: Vec<Container>) {
        *self.containers.lock().unwrap() = containers;
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_filter(&self) -> Option<ContainerFilter> {
        self.last_filter.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContainerSnapshotProvider for MockSnapshotProvider {
    async fn list_running(&self, filter: &ContainerFilter) -> Result<Vec<Container>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.lock().unwrap() = Some(filter.clone());

        if let Some(err) = self.error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.containers.lock().unwrap().clone())
    }
}

pub struct FixedHost(pub Arc<str>);

impl FixedHost {
    pub fn new(host: &str) -> Self {
        Self(host.into())
    }
}

impl HostIdentity for FixedHost {
    fn target_host(&self) -> Arc<str> {
        Arc::clone(&self.0)
    }
}
