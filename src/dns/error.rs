use std::fmt;

use thiserror::Error;
use trust_dns_resolver::error::ResolveError;

/// Record type a failed query asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Mx,
    Txt,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mx => "MX",
            Self::Txt => "TXT",
        })
    }
}

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("cannot load system resolver configuration: {source}")]
    SystemConfig {
        #[source]
        source: std::io::Error,
    },
    /// Any resolver failure other than "no records".
    #[error("{kind} query for {name} failed: {source}")]
    Query {
        kind: RecordKind,
        name: String,
        #[source]
        source: ResolveError,
    },
}

impl DnsError {
    pub(crate) fn system_config(source: std::io::Error) -> Self {
        Self::SystemConfig { source }
    }

    pub(crate) fn mx_lookup(name: impl Into<String>, source: ResolveError) -> Self {
        Self::query(RecordKind::Mx, name, source)
    }

    pub(crate) fn txt_lookup(name: impl Into<String>, source: ResolveError) -> Self {
        Self::query(RecordKind::Txt, name, source)
    }

    fn query(kind: RecordKind, name: impl Into<String>, source: ResolveError) -> Self {
        Self::Query {
            kind,
            name: name.into(),
            source,
        }
    }
}
