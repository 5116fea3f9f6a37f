//! MX / SPF / DMARC presence check for the domain of an address.
//!
//! The three lookups always run, in order, and never short-circuit each
//! other: every failure is folded into a [`CheckIssue`] on the report.

mod types;

pub use types::{CheckIssue, DnsReport};

use tracing::{debug, warn};

use crate::dns::{DnsLookup, dmarc_name};
use crate::validator::EmailAddress;

pub const SPF_PREFIX: &str = "v=spf1";

pub fn check_dns_records<R>(resolver: &R, email: &EmailAddress) -> DnsReport
where
    R: DnsLookup + ?Sized,
{
    let domain = email.domain.as_str();
    let mut report = DnsReport::new(email.original.as_str(), domain);

    debug!(domain = %domain, "looking up MX records");
    match resolver.lookup_mx(domain) {
        Ok(mut records) if !records.is_empty() => {
            // stable: equal preferences keep resolver order
            records.sort_by_key(|record| record.preference);
            report.mx = records;
        }
        Ok(_) => report.issues.push(CheckIssue::MissingMx(domain.to_string())),
        Err(err) => {
            warn!(domain = %domain, error = %err, "MX lookup failed");
            report.issues.push(CheckIssue::MissingMx(domain.to_string()));
        }
    }

    debug!(domain = %domain, "looking up TXT records");
    let txt_records = match resolver.lookup_txt(domain) {
        Ok(records) => records,
        Err(err) => {
            warn!(domain = %domain, error = %err, "TXT lookup failed");
            report.issues.push(CheckIssue::MissingTxt(domain.to_string()));
            Vec::new()
        }
    };
    match find_spf(&txt_records) {
        Some(record) => report.spf.push(record.to_string()),
        None => report.issues.push(CheckIssue::MissingSpf(domain.to_string())),
    }

    let dmarc = dmarc_name(domain);
    debug!(name = %dmarc, "looking up DMARC record");
    match resolver.lookup_txt(&dmarc) {
        Ok(records) if !records.is_empty() => report.dmarc = records,
        Ok(_) => report.issues.push(CheckIssue::MissingDmarc(domain.to_string())),
        Err(err) => {
            warn!(name = %dmarc, error = %err, "DMARC lookup failed");
            report.issues.push(CheckIssue::MissingDmarc(domain.to_string()));
        }
    }

    report
}

/// First TXT record starting with `v=spf1`; later ones are ignored.
pub fn find_spf(records: &[String]) -> Option<&str> {
    records
        .iter()
        .map(String::as_str)
        .find(|record| record.starts_with(SPF_PREFIX))
}
