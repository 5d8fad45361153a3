use std::sync::Arc;

pub trait HostIdentity: Send + Sync {
    /// Host name clients should connect to for published ports.
    fn target_host(&self) -> Arc<str>;
}
