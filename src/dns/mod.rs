//! DNS access for the checker.
//!
//! [`DnsLookup`] is the seam between the checker and the network: the
//! blocking `trust_dns_resolver::Resolver` implements it, tests use stubs.

mod error;
mod resolver;
mod types;

pub use error::{DnsError, RecordKind};
pub use resolver::{DnsLookup, dmarc_name, system_resolver};
pub use types::MxRecord;
