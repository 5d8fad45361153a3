use crate::matcher::ContainerMatch;
use std::sync::Arc;

/// Answers must not be cached: containers come and go at any time.
pub const SRV_TTL: u32 = 0;
pub const SRV_PRIORITY: u16 = 1;
pub const SRV_WEIGHT: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvAnswer {
    pub name: Arc<str>,
    pub target: Arc<str>,
    pub port: u16,
    pub ttl: u32,
    pub priority: u16,
    pub weight: u16,
}

impl SrvAnswer {
    pub fn new(name: impl Into<Arc<str>>, target: impl Into<Arc<str>>, port: u16) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            port,
            ttl: SRV_TTL,
            priority: SRV_PRIORITY,
            weight: SRV_WEIGHT,
        }
    }

    /// One answer per published port of the matched container.
    pub fn for_match(matched: &ContainerMatch<'_>, target: &Arc<str>) -> Vec<SrvAnswer> {
        matched
            .container
            .public_ports()
            .map(|port| SrvAnswer::new(Arc::clone(&matched.query_name), Arc::clone(target), port))
            .collect()
    }
}
