use thiserror::Error;

/// An address that passed the syntax check, split at its single `@`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    pub original: String,
    pub local: String,
    pub domain: String,
}

impl EmailAddress {
    pub(crate) fn new(original: &str, local: &str, domain: &str) -> Self {
        Self {
            original: original.to_string(),
            local: local.to_string(),
            domain: domain.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("{input} is not a valid email address")]
    InvalidFormat { input: String },
}

impl EmailError {
    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}
