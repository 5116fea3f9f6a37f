use std::cell::Cell;
use std::collections::HashMap;
use std::io::{self, BufRead, Cursor, Read};

use email_checker::report::{CAVEAT, FAREWELL, FIRST_PROMPT, PROMPT, WELCOME};
use email_checker::{DnsError, DnsLookup, MxRecord, RecordKind, Session, SessionEnd};
use trust_dns_resolver::error::ResolveError;

#[derive(Default)]
struct StubResolver {
    mx: HashMap<String, Vec<MxRecord>>,
    txt: HashMap<String, Vec<String>>,
    unreachable: bool,
    calls: Cell<usize>,
}

impl StubResolver {
    fn example_com() -> Self {
        let mut stub = Self::default();
        stub.mx.insert(
            "example.com".into(),
            vec![MxRecord::new(10, "mx1.example.com.")],
        );
        stub.txt.insert(
            "example.com".into(),
            vec!["v=spf1 include:_spf.example.com ~all".into()],
        );
        stub.txt.insert(
            "_dmarc.example.com".into(),
            vec!["v=DMARC1; p=quarantine".into()],
        );
        stub
    }
}

impl DnsLookup for StubResolver {
    fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, DnsError> {
        self.calls.set(self.calls.get() + 1);
        if self.unreachable {
            return Err(DnsError::Query {
                kind: RecordKind::Mx,
                name: name.to_string(),
                source: ResolveError::from("no connections available"),
            });
        }
        Ok(self.mx.get(name).cloned().unwrap_or_default())
    }

    fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        self.calls.set(self.calls.get() + 1);
        if self.unreachable {
            return Err(DnsError::Query {
                kind: RecordKind::Txt,
                name: name.to_string(),
                source: ResolveError::from("no connections available"),
            });
        }
        Ok(self.txt.get(name).cloned().unwrap_or_default())
    }
}

fn run(resolver: &StubResolver, input: &str) -> (SessionEnd, String) {
    let mut out = Vec::new();
    let end = Session::new(resolver)
        .run(Cursor::new(input.as_bytes().to_vec()), &mut out)
        .expect("in-memory output never fails");
    (end, String::from_utf8(out).expect("utf-8 output"))
}

fn banner() -> String {
    format!("{WELCOME}{FIRST_PROMPT}")
}

#[test]
fn exit_prints_only_farewell() {
    let resolver = StubResolver::default();
    for keyword in ["exit\n", "quit\n", "exit"] {
        let (end, out) = run(&resolver, keyword);
        assert_eq!(end, SessionEnd::Exit);
        assert_eq!(out, format!("{}{FAREWELL}\n", banner()));
    }
    assert_eq!(resolver.calls.get(), 0);
}

#[test]
fn exit_stops_reading_further_lines() {
    let resolver = StubResolver::example_com();
    let (end, out) = run(&resolver, "exit\nuser@example.com\n");
    assert_eq!(end, SessionEnd::Exit);
    assert!(!out.contains("user@example.com"));
    assert_eq!(resolver.calls.get(), 0);
}

#[test]
fn end_of_input_is_silent() {
    let resolver = StubResolver::default();
    let (end, out) = run(&resolver, "");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(out, banner());
}

#[test]
fn capitalised_exit_is_invalid_input() {
    let resolver = StubResolver::default();
    let (end, out) = run(&resolver, "Exit\n");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(
        out,
        format!(
            "{}\nInvalid input: Exit is not a valid email address\n{PROMPT}",
            banner()
        )
    );
    assert_eq!(resolver.calls.get(), 0);
}

#[test]
fn invalid_address_makes_no_dns_call() {
    let resolver = StubResolver::example_com();
    let (_, out) = run(&resolver, "not-an-email\n");
    assert!(out.contains("Invalid input: not-an-email is not a valid email address"));
    assert_eq!(resolver.calls.get(), 0);
}

#[test]
fn unknown_domain_lists_three_issues() {
    let resolver = StubResolver::default();
    let (_, out) = run(&resolver, "user@nonexistent-domain-xyz123.invalid\nquit\n");

    let expected = format!(
        "{}\nEmail user@nonexistent-domain-xyz123.invalid may not be valid for the following reasons:\n\
         - No MX record found for domain nonexistent-domain-xyz123.invalid\n\
         - No SPF record found for domain nonexistent-domain-xyz123.invalid\n\
         - No DMARC record found for domain nonexistent-domain-xyz123.invalid\n\
         \n{CAVEAT}\n{PROMPT}{FAREWELL}\n",
        banner()
    );
    assert_eq!(out, expected);
    assert_eq!(resolver.calls.get(), 3);
}

#[test]
fn unreachable_resolver_also_reports_txt() {
    let resolver = StubResolver {
        unreachable: true,
        ..StubResolver::default()
    };
    let (_, out) = run(&resolver, "user@example.com\n");
    let issues: Vec<&str> = out.lines().filter(|line| line.starts_with("- ")).collect();
    assert_eq!(
        issues,
        vec![
            "- No MX record found for domain example.com",
            "- No TXT record found for domain example.com",
            "- No SPF record found for domain example.com",
            "- No DMARC record found for domain example.com",
        ]
    );
}

#[test]
fn healthy_domain_prints_records() {
    let resolver = StubResolver::example_com();
    let (_, out) = run(&resolver, "user@example.com\r\n");

    let expected = format!(
        "{}\nEmail user@example.com appears to be valid.\n\n\
         MX Records: [mx1.example.com. 10]\n\
         SPF Records: [v=spf1 include:_spf.example.com ~all]\n\
         DMARC Records: [v=DMARC1; p=quarantine]\n{PROMPT}",
        banner()
    );
    assert_eq!(out, expected);
}

#[test]
fn same_address_twice_gives_same_report() {
    let resolver = StubResolver::example_com();
    let (_, out) = run(&resolver, "user@example.com\nuser@example.com\n");
    let body = out.strip_prefix(&banner()).expect("banner first");
    let (first, second) = body.split_at(body.len() / 2);
    assert_eq!(first, second);
}

#[test]
fn non_utf8_line_is_invalid_input_and_session_continues() {
    let resolver = StubResolver::default();
    let mut out = Vec::new();
    let end = Session::new(&resolver)
        .run(Cursor::new(b"caf\xe9@x.com\nnot-an-email\n".to_vec()), &mut out)
        .expect("in-memory output never fails");
    let out = String::from_utf8(out).unwrap();

    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(out.contains("Invalid input: caf\u{FFFD}@x.com is not a valid email address"));
    assert!(out.contains("Invalid input: not-an-email is not a valid email address"));
    assert_eq!(resolver.calls.get(), 0);
}

struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin went away"))
    }
}

impl BufRead for BrokenInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::other("stdin went away"))
    }

    fn consume(&mut self, _amt: usize) {}
}

#[test]
fn read_error_ends_session() {
    let resolver = StubResolver::default();
    let mut out = Vec::new();
    let end = Session::new(&resolver)
        .run(BrokenInput, &mut out)
        .expect("read errors are not propagated");
    assert_eq!(end, SessionEnd::ReadError);
    assert_eq!(String::from_utf8(out).unwrap(), banner());
}
