//! dockdns Domain Layer
pub mod config;
pub mod container;
pub mod discovery_query;
pub mod errors;
pub mod label_escape;
pub mod matcher;
pub mod srv_answer;

pub use config::{CliOverrides, Config, ConfigError};
pub use container::{
    Container, ContainerFilter, ContainerStatus, HealthState, PortProtocol, PublishedPort,
};
pub use discovery_query::{
    DecodedQueries, LabelPredicate, LabelQuery, NameQuery, QueryKind, QueryRejection,
    RejectionReason, DISCOVERY_ZONE,
};
pub use errors::DomainError;
pub use label_escape::{escape_label, unescape_label};
pub use matcher::{
    match_containers, match_containers_with, ContainerMatch, MatchPrecedence, MATCH_PRECEDENCE,
};
pub use srv_answer::{SrvAnswer, SRV_PRIORITY, SRV_TTL, SRV_WEIGHT};
