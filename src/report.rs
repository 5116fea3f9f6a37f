//! Text rendering of check results and session messages.

use std::fmt::Display;
use std::io::{self, Write};

use crate::check::DnsReport;

pub const WELCOME: &str = "\nWelcome to Email Checker!\n";
pub const FIRST_PROMPT: &str = "Enter an email address to check, or type 'exit' to quit: ";
pub const PROMPT: &str = "\nEnter an email address, or type 'exit' to quit: ";
pub const FAREWELL: &str = "Exiting Email Checker...";
pub const CAVEAT: &str = "However, some valid emails may not have certain DNS records, or their DNS records may not be configured properly.";

pub fn write_invalid_input<W: Write>(out: &mut W, input: &str) -> io::Result<()> {
    writeln!(out, "\nInvalid input: {input} is not a valid email address")
}

pub fn write_report<W: Write>(out: &mut W, report: &DnsReport) -> io::Result<()> {
    if report.looks_valid() {
        writeln!(out, "\nEmail {} appears to be valid.\n", report.email)?;
        writeln!(out, "MX Records: {}", bracketed(&report.mx))?;
        writeln!(out, "SPF Records: {}", bracketed(&report.spf))?;
        writeln!(out, "DMARC Records: {}", bracketed(&report.dmarc))?;
    } else {
        writeln!(
            out,
            "\nEmail {} may not be valid for the following reasons:",
            report.email
        )?;
        for issue in &report.issues {
            writeln!(out, "- {issue}")?;
        }
        writeln!(out, "\n{CAVEAT}")?;
    }
    Ok(())
}

/// `[a b c]`: entries joined by a single space.
pub fn bracketed<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{joined}]")
}

#[cfg(feature = "with-serde")]
pub fn write_report_json<W: Write>(out: &mut W, report: &DnsReport) -> io::Result<()> {
    let line = serde_json::to_string(report).map_err(io::Error::other)?;
    writeln!(out, "{line}")
}
