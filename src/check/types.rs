use std::fmt;

use crate::dns::MxRecord;

/// A missing or unreadable record, named after the domain it concerns.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(tag = "kind", content = "domain"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckIssue {
    MissingMx(String),
    MissingTxt(String),
    MissingSpf(String),
    MissingDmarc(String),
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMx(domain) => write!(f, "No MX record found for domain {domain}"),
            Self::MissingTxt(domain) => write!(f, "No TXT record found for domain {domain}"),
            Self::MissingSpf(domain) => write!(f, "No SPF record found for domain {domain}"),
            Self::MissingDmarc(domain) => write!(f, "No DMARC record found for domain {domain}"),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsReport {
    pub email: String,
    pub domain: String,
    pub mx: Vec<MxRecord>,
    pub spf: Vec<String>,
    pub dmarc: Vec<String>,
    pub issues: Vec<CheckIssue>,
}

impl DnsReport {
    pub(crate) fn new(email: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            domain: domain.into(),
            mx: Vec::new(),
            spf: Vec::new(),
            dmarc: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// True when every lookup produced a record.
    pub fn looks_valid(&self) -> bool {
        self.issues.is_empty()
    }
}
