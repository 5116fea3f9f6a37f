mod types;

pub use types::{EmailAddress, EmailError};

use regex::Regex;
use std::sync::LazyLock;

/// Accepted shape: `local@domain.tld`, ASCII only, TLD of two letters or more.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).unwrap_or_else(|err| panic!("email pattern must compile: {err}"))
});

/// Returns whether `input` is a syntactically valid address.
///
/// The raw input is matched as-is: no trimming, no case folding.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Validates `input` and splits it into local part and domain.
pub fn parse_email(input: &str) -> Result<EmailAddress, EmailError> {
    if !is_valid_email(input) {
        return Err(EmailError::invalid_format(input));
    }
    // the pattern's character classes exclude '@' on both sides
    let (local, domain) = input
        .split_once('@')
        .ok_or_else(|| EmailError::invalid_format(input))?;
    Ok(EmailAddress::new(input, local, domain))
}
