use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
    lookup::{MxLookup, TxtLookup},
};

use super::{DnsError, MxRecord};

/// The two queries the checker needs from a resolver.
///
/// A "no records" answer (NXDOMAIN or an empty NOERROR) comes back as an
/// empty `Ok`; every other resolver failure is an `Err`.
pub trait DnsLookup {
    fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, DnsError>;
    fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError>;
}

/// Builds the blocking resolver from the system configuration
/// (`/etc/resolv.conf` on Unix). No timeout or retry override is applied.
pub fn system_resolver() -> Result<Resolver, DnsError> {
    Resolver::from_system_conf().map_err(DnsError::system_config)
}

pub fn dmarc_name(domain: &str) -> String {
    format!("_dmarc.{}", domain)
}

impl DnsLookup for Resolver {
    fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, DnsError> {
        match Resolver::mx_lookup(self, name) {
            Ok(lookup) => Ok(collect_mx_records(&lookup)),
            Err(err) if should_treat_as_empty(&err) => Ok(Vec::new()),
            Err(err) => Err(DnsError::mx_lookup(name, err)),
        }
    }

    fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        match Resolver::txt_lookup(self, name) {
            Ok(lookup) => Ok(collect_txt_records(&lookup)),
            Err(err) if should_treat_as_empty(&err) => Ok(Vec::new()),
            Err(err) => Err(DnsError::txt_lookup(name, err)),
        }
    }
}

fn collect_mx_records(lookup: &MxLookup) -> Vec<MxRecord> {
    lookup
        .iter()
        .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
        .collect()
}

/// One string per TXT record, its character-strings concatenated.
fn collect_txt_records(lookup: &TxtLookup) -> Vec<String> {
    lookup.iter().map(|txt| join_txt_data(txt.txt_data())).collect()
}

/// Invalid UTF-8 is decoded lossily so a single odd record does not hide
/// the others.
pub(crate) fn join_txt_data(pieces: &[Box<[u8]>]) -> String {
    pieces
        .iter()
        .map(|piece| String::from_utf8_lossy(piece))
        .collect()
}

pub(crate) fn should_treat_as_empty(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}
