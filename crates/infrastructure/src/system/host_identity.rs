use dockdns_application::ports::HostIdentity;
use dockdns_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// SRV target taken from configuration or, failing that, from the OS hostname.
///
/// Resolved once at startup; the hostname is not expected to change while
/// the server runs.
pub struct SystemHostIdentity {
    target: Arc<str>,
}

impl SystemHostIdentity {
    pub fn new(target: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn resolve(configured: Option<&str>) -> Result<Self, DomainError> {
        if let Some(target) = configured {
            debug!(target = %target, "Using configured SRV target host");
            return Ok(Self::new(target));
        }

        let hostname = hostname::get()
            .map_err(|e| DomainError::InvalidRecordName(format!("Failed to read hostname: {}", e)))?
            .into_string()
            .map_err(|raw| {
                DomainError::InvalidRecordName(format!("Hostname is not valid UTF-8: {:?}", raw))
            })?;

        debug!(target = %hostname, "Using system hostname as SRV target host");
        Ok(Self::new(hostname))
    }
}

impl HostIdentity for SystemHostIdentity {
    fn target_host(&self) -> Arc<str> {
        Arc::clone(&self.target)
    }
}
