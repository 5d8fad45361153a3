//! Dot/underscore escaping for label keys and values carried in DNS labels.
//!
//! A DNS label cannot contain a raw `.`, so label keys such as
//! `com.example.tier` travel as `com_example_tier`. The mapping is lossy: a
//! real `_` in a key or value decodes to `.`, and there is no way to tell the
//! two apart on the wire.

const ESCAPED_DOT: &str = "_";

pub fn escape_label(raw: &str) -> String {
    raw.replace('.', ESCAPED_DOT)
}

pub fn unescape_label(escaped: &str) -> String {
    escaped.replace(ESCAPED_DOT, ".")
}
