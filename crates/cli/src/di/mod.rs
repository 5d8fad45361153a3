mod discovery;

pub use discovery::DiscoveryServices;
