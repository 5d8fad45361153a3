//! Evaluation of decoded predicates against a container snapshot.

use crate::container::Container;
use crate::discovery_query::DecodedQueries;
use std::sync::Arc;

/// Which predicate family wins when one container satisfies both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPrecedence {
    /// Label predicates are evaluated after name predicates and replace them.
    LabelOverridesName,
    /// A name match is kept even if a label predicate also holds.
    NameOverridesLabel,
}

/// Each container answers for a single question name. When a container is
/// matched by both a name and a label question, only the label question gets
/// answers.
// TODO: confirm against real deployments whether such a container should
// answer both question names instead of one.
pub const MATCH_PRECEDENCE: MatchPrecedence = MatchPrecedence::LabelOverridesName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerMatch<'a> {
    pub container: &'a Container,
    /// Original question name the answers belong to.
    pub query_name: Arc<str>,
}

/// Match every container of `snapshot` against `queries`, in snapshot order.
///
/// Produces at most one match per container, resolved with [`MATCH_PRECEDENCE`].
pub fn match_containers<'a>(
    queries: &DecodedQueries,
    snapshot: &'a [Container],
) -> Vec<ContainerMatch<'a>> {
    match_containers_with(queries, snapshot, MATCH_PRECEDENCE)
}

pub fn match_containers_with<'a>(
    queries: &DecodedQueries,
    snapshot: &'a [Container],
    precedence: MatchPrecedence,
) -> Vec<ContainerMatch<'a>> {
    snapshot
        .iter()
        .filter_map(|container| {
            resolve_query_name(queries, container, precedence).map(|query_name| ContainerMatch {
                container,
                query_name,
            })
        })
        .collect()
}

fn resolve_query_name(
    queries: &DecodedQueries,
    container: &Container,
    precedence: MatchPrecedence,
) -> Option<Arc<str>> {
    let by_name = match_by_name(queries, container);
    match precedence {
        MatchPrecedence::LabelOverridesName => match_by_label(queries, container).or(by_name),
        MatchPrecedence::NameOverridesLabel => {
            by_name.or_else(|| match_by_label(queries, container))
        }
    }
}

/// First alias found in the name predicates wins.
fn match_by_name(queries: &DecodedQueries, container: &Container) -> Option<Arc<str>> {
    container
        .service_names()
        .find_map(|name| queries.names.get(name).cloned())
}

/// First satisfied label predicate, in question order, wins.
fn match_by_label(queries: &DecodedQueries, container: &Container) -> Option<Arc<str>> {
    queries
        .labels
        .iter()
        .find(|(key, predicate)| container.has_label(key, &predicate.value))
        .map(|(_, predicate)| Arc::clone(&predicate.name))
}
