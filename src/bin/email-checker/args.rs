use anyhow::{Result, bail};
use clap::Parser;

#[derive(Parser)]
#[command(name = "email-checker", version, about)]
pub struct Cli {
    /// addresses to check once, without the interactive prompt
    pub emails: Vec<String>,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// debug logs on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    #[cfg(feature = "with-serde")]
    Json,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn parsed_format(&self) -> Result<Format> {
        format_from_str(&self.format)
    }
}

pub fn format_from_str(s: &str) -> Result<Format> {
    match s {
        "human" => Ok(Format::Human),
        #[cfg(feature = "with-serde")]
        "json" => Ok(Format::Json),
        #[cfg(not(feature = "with-serde"))]
        "json" => bail!("format=json requires the 'with-serde' feature"),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}
