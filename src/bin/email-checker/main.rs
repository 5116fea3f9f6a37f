mod args;

use anyhow::{Context, Result};
use email_checker::{DnsLookup, Session, check_email, report, system_resolver};
use tracing_subscriber::EnvFilter;

use std::io::{self, Write};

use crate::args::{Cli, Format};

/// Exit status when at least one argument fails the syntax check.
const EXIT_INVALID: i32 = 2;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Checks every address once, without prompts; returns the exit status
/// (0 ok, 2 invalid address).
fn check_once<R, W, S>(resolver: &R, emails: &[S], format: Format, out: &mut W) -> Result<i32>
where
    R: DnsLookup + ?Sized,
    W: Write,
    S: AsRef<str>,
{
    let mut any_invalid = false;
    for email in emails {
        let email = email.as_ref();
        match (check_email(resolver, email), format) {
            (Ok(checked), Format::Human) => report::write_report(out, &checked)?,
            #[cfg(feature = "with-serde")]
            (Ok(checked), Format::Json) => report::write_report_json(out, &checked)?,
            (Err(_), Format::Human) => {
                any_invalid = true;
                report::write_invalid_input(out, email)?;
            }
            #[cfg(feature = "with-serde")]
            (Err(err), Format::Json) => {
                any_invalid = true;
                let line = serde_json::json!({ "email": email, "error": err.to_string() });
                writeln!(out, "{line}")?;
            }
        }
    }
    out.flush()?;
    Ok(if any_invalid { EXIT_INVALID } else { 0 })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = cli.parsed_format()?;

    let resolver = system_resolver().context("build DNS resolver")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.emails.is_empty() {
        let end = Session::new(&resolver)
            .run(io::stdin().lock(), &mut out)
            .context("interactive session")?;
        // a read error is logged by the session and still exits 0
        tracing::debug!(?end, "session finished");
        return Ok(());
    }

    let status = check_once(&resolver, cli.emails.as_slice(), format, &mut out)?;
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}
