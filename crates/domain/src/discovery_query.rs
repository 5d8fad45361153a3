//! Decoding of discovery questions into name and label predicates.
//!
//! Two question shapes are understood, both rooted in the `docker` zone:
//!
//! ```text
//! <service>.name.docker            match a container by its name
//! <value>.<key>.label.docker       match a container by label key = value
//! ```
//!
//! Underscores in `<key>` and `<value>` stand for dots (see [`crate::label_escape`]).

use crate::label_escape::unescape_label;
use std::fmt;
use std::sync::Arc;

/// Last label every discovery question must carry.
pub const DISCOVERY_ZONE: &str = "docker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Name,
    Label,
}

impl QueryKind {
    /// Discriminator labels are matched exactly; `NAME` is not `name`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "name" => Some(QueryKind::Name),
            "label" => Some(QueryKind::Label),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Name => "name",
            QueryKind::Label => "label",
        }
    }

    /// Number of labels that must precede the discriminator.
    pub fn arity(&self) -> usize {
        match self {
            QueryKind::Name => 1,
            QueryKind::Label => 2,
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service name -> question name, in first-insertion order.
///
/// Inserting an existing service name replaces the question name but keeps
/// the entry where it was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    entries: Vec<(Arc<str>, Arc<str>)>,
}

impl NameQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, service: impl Into<Arc<str>>, question: impl Into<Arc<str>>) {
        let service = service.into();
        let question = question.into();
        match self.entries.iter_mut().find(|(s, _)| *s == service) {
            Some(entry) => entry.1 = question,
            None => self.entries.push((service, question)),
        }
    }

    pub fn get(&self, service: &str) -> Option<&Arc<str>> {
        self.entries
            .iter()
            .find(|(s, _)| s.as_ref() == service)
            .map(|(_, question)| question)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, q)| (s.as_ref(), q.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPredicate {
    /// Expected label value, already unescaped.
    pub value: Arc<str>,
    /// Question name answers are owned by.
    pub name: Arc<str>,
}

/// Label key -> predicate, with the same ordering rule as [`NameQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelQuery {
    entries: Vec<(Arc<str>, LabelPredicate)>,
}

impl LabelQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<Arc<str>>, predicate: LabelPredicate) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = predicate,
            None => self.entries.push((key, predicate)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&LabelPredicate> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, predicate)| predicate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelPredicate)> {
        self.entries.iter().map(|(k, p)| (k.as_ref(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// A `name` question with the wrong number of leading labels.
    NameArity { found: usize },
    /// A `label` question with the wrong number of leading labels.
    LabelArity { found: usize },
    /// Discriminator other than `name` or `label` (empty when missing).
    UnknownKind(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NameArity { found } => write!(
                f,
                "name query must have {} labels, got {}",
                QueryKind::Name.arity() + 2,
                found + 2
            ),
            RejectionReason::LabelArity { found } => write!(
                f,
                "label query must have {} labels, got {}",
                QueryKind::Label.arity() + 2,
                found + 2
            ),
            RejectionReason::UnknownKind(kind) => write!(f, "unknown query type '{}'", kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRejection {
    pub question: Arc<str>,
    pub reason: RejectionReason,
}

/// Predicates decoded from one request's questions.
#[derive(Debug, Clone, Default)]
pub struct DecodedQueries {
    pub names: NameQuery,
    pub labels: LabelQuery,
    /// Questions in the `docker` zone that could not be decoded.
    pub rejections: Vec<QueryRejection>,
}

impl DecodedQueries {
    /// Decode a batch of question names.
    ///
    /// Questions outside the `docker` zone are skipped without a rejection.
    /// A single trailing root dot is ignored.
    pub fn decode<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut decoded = Self::default();
        for question in questions {
            decoded.decode_one(question.as_ref());
        }
        decoded
    }

    fn decode_one(&mut self, question: &str) {
        let question = question.strip_suffix('.').unwrap_or(question);
        let mut labels: Vec<&str> = question.split('.').collect();

        if labels.pop() != Some(DISCOVERY_ZONE) {
            return;
        }

        let kind_label = labels.pop().unwrap_or_default();
        let kind = match QueryKind::from_label(kind_label) {
            Some(kind) => kind,
            None => {
                self.reject(question, RejectionReason::UnknownKind(kind_label.to_string()));
                return;
            }
        };

        match (kind, labels.as_slice()) {
            (QueryKind::Name, [service]) => {
                self.names.insert(*service, question);
            }
            (QueryKind::Label, [value, key]) => {
                self.labels.insert(
                    unescape_label(key),
                    LabelPredicate {
                        value: unescape_label(value).into(),
                        name: question.into(),
                    },
                );
            }
            (QueryKind::Name, rest) => {
                self.reject(question, RejectionReason::NameArity { found: rest.len() });
            }
            (QueryKind::Label, rest) => {
                self.reject(question, RejectionReason::LabelArity { found: rest.len() });
            }
        }
    }

    fn reject(&mut self, question: &str, reason: RejectionReason) {
        self.rejections.push(QueryRejection {
            question: question.into(),
            reason,
        });
    }

    /// True when no question produced a predicate.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.labels.is_empty()
    }
}
