//! Interactive prompt loop.
//!
//! Reads one candidate address per line until `exit`/`quit` or end of input.
//! Generic over the input, output and resolver so tests can drive it from
//! memory.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, error};

use crate::check_email;
use crate::dns::DnsLookup;
use crate::report::{FAREWELL, FIRST_PROMPT, PROMPT, WELCOME, write_invalid_input, write_report};

/// Exact, case-sensitive keywords that end the session.
pub const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` or `quit` was entered.
    Exit,
    EndOfInput,
    /// Reading the input failed; the error has been logged.
    ReadError,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write to output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl SessionError {
    pub(crate) fn output(source: io::Error) -> Self {
        Self::Output { source }
    }
}

pub struct Session<'r, R: ?Sized> {
    resolver: &'r R,
}

impl<'r, R> Session<'r, R>
where
    R: DnsLookup + ?Sized,
{
    pub fn new(resolver: &'r R) -> Self {
        Self { resolver }
    }

    pub fn run<I, W>(&self, input: I, out: &mut W) -> Result<SessionEnd, SessionError>
    where
        I: BufRead,
        W: Write,
    {
        self.run_inner(input, out).map_err(SessionError::output)
    }

    fn run_inner<I, W>(&self, mut input: I, out: &mut W) -> io::Result<SessionEnd>
    where
        I: BufRead,
        W: Write,
    {
        out.write_all(WELCOME.as_bytes())?;
        out.write_all(FIRST_PROMPT.as_bytes())?;
        out.flush()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    debug!("input closed");
                    return Ok(SessionEnd::EndOfInput);
                }
                Ok(_) => {}
                Err(err) => {
                    error!(error = %err, "Something went wrong from input");
                    return Ok(SessionEnd::ReadError);
                }
            }

            // non UTF-8 bytes become U+FFFD and fail validation like any other input
            let decoded = String::from_utf8_lossy(&buf);
            let line = strip_line_ending(&decoded);
            if is_exit_keyword(line) {
                writeln!(out, "{FAREWELL}")?;
                out.flush()?;
                return Ok(SessionEnd::Exit);
            }

            self.process_line(line, out)?;
            out.write_all(PROMPT.as_bytes())?;
            out.flush()?;
        }
    }

    /// Validates `line` and, when it is an address, checks and reports it.
    pub fn process_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<()> {
        match check_email(self.resolver, line) {
            Ok(report) => write_report(out, &report),
            Err(_) => write_invalid_input(out, line),
        }
    }
}

pub fn is_exit_keyword(line: &str) -> bool {
    EXIT_KEYWORDS.contains(&line)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
