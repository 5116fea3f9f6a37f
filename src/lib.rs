#![forbid(unsafe_code)]
//! email_checker — email syntax check + MX/SPF/DMARC presence lookups

pub mod check;
pub mod dns;
pub mod report;
pub mod session;
pub mod validator;

pub use check::{CheckIssue, DnsReport, check_dns_records, find_spf};
pub use dns::{DnsError, DnsLookup, MxRecord, RecordKind, dmarc_name, system_resolver};
pub use session::{Session, SessionEnd, SessionError};
pub use validator::{EmailAddress, EmailError, is_valid_email, parse_email};

/// Syntax check followed by the DNS checks; no query is made for an
/// invalid address.
pub fn check_email<R>(resolver: &R, input: &str) -> Result<DnsReport, EmailError>
where
    R: DnsLookup + ?Sized,
{
    let email = parse_email(input)?;
    Ok(check_dns_records(resolver, &email))
}
