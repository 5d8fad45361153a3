//! dockdns Infrastructure Layer
pub mod dns;
pub mod runtime;
pub mod system;
