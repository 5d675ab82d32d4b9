//! `xqlex`: print the token stream of an XQuery file.
//!
//! ```text
//! xqlex query.xq
//! xqlex --text '<a>{1e}</a>' --format json
//! xqlex query.xq --from 120 --state 0x2a3 --extension update
//! ```
//!
//! Each row carries the packed state the token was lexed from, so a
//! suspicious row can be replayed on its own with `--from` and `--state`.
//! Set `RUST_LOG=xq_lexer=trace` to watch the lexer step by step.

mod dump;
mod error;

use std::path::PathBuf;
use std::sync::Once;

use clap::{Parser, ValueEnum};
use tracing::debug;
use xq_lexer::{Dialect, Extensions, SourceBuffer, State, XQueryVersion};

use crate::dump::Dump;
use crate::error::XqlexError;

#[derive(Parser, Debug)]
#[command(name = "xqlex", version, about = "Dump the XQuery token stream of a file")]
struct Cli {
    /// XQuery file to lex
    #[arg(
        value_name = "FILE",
        conflicts_with = "text",
        required_unless_present = "text"
    )]
    path: Option<PathBuf>,

    /// Inline query text
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// First UTF-16 offset to lex
    #[arg(long, default_value_t = 0)]
    from: usize,

    /// End of the lexed range (defaults to the end of the input)
    #[arg(long)]
    to: Option<usize>,

    /// Packed state to start from, decimal or `0x` hex
    #[arg(long, value_parser = parse_state, default_value = "0")]
    state: State,

    /// Language version keywords are classified against
    #[arg(long = "xquery-version", value_name = "VERSION", default_value = "3.1")]
    xquery_version: XQueryVersion,

    /// Enable an extension (update, scripting, marklogic, saxon, basex)
    #[arg(long = "extension", value_name = "NAME", value_parser = Extensions::parse_one)]
    extensions: Vec<Extensions>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One aligned row per token
    Text,
    /// A JSON array of token objects
    Json,
}

impl Cli {
    fn dialect(&self) -> Dialect {
        let extensions = self
            .extensions
            .iter()
            .fold(Extensions::empty(), |all, ext| all | *ext);
        Dialect::new(self.xquery_version, extensions)
    }

    fn read_source(&self) -> Result<String, XqlexError> {
        match (&self.path, &self.text) {
            (_, Some(text)) => Ok(text.clone()),
            (Some(path), None) => {
                std::fs::read_to_string(path).map_err(|source| XqlexError::Read {
                    path: path.clone(),
                    source,
                })
            }
            (None, None) => Err(XqlexError::NoInput),
        }
    }
}

fn parse_state(s: &str) -> Result<State, std::num::ParseIntError> {
    let raw = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)?,
        None => s.parse()?,
    };
    Ok(State::from_raw(raw))
}

static TRACING_INIT: Once = Once::new();

/// Install a `RUST_LOG`-filtered subscriber, once, and only when
/// `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn run(cli: &Cli) -> Result<String, XqlexError> {
    let buffer = SourceBuffer::new(&cli.read_source()?);
    for issue in buffer.encoding_issues() {
        eprintln!(
            "warning: {:?} at offset {} ({} units)",
            issue.kind, issue.pos, issue.len
        );
    }

    let to = cli.to.unwrap_or(buffer.len());
    debug!(from = cli.from, to, state = %cli.state, "lexing");
    let dump = Dump::lex(buffer.units(), cli.from, to, cli.state, cli.dialect())?;

    match cli.format {
        Format::Text => Ok(dump.to_text()),
        Format::Json => dump.to_json(),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
