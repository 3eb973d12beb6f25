//! MIPS32 instruction decoder CLI.
//!
//! This binary is a thin front end over `mipsdec-core`. It performs:
//! 1. **Batch decode:** Decode every word given on the command line, then exit.
//! 2. **Interactive decode:** Prompt for words on stdin until an empty line or EOF.
//!
//! Reports go to stdout; logs go to stderr so reports stay machine-readable.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use mipsdec_core::config::{Config, ReportConfig, ReportStyle};
use mipsdec_core::literal::parse_word;
use mipsdec_core::report::{write_error, write_report};
use mipsdec_core::{ControlSignals, decode};

#[derive(Parser, Debug)]
#[command(
    name = "mipsdec",
    author,
    version,
    about = "Decode MIPS32 instruction words",
    long_about = "Decode MIPS32 instruction words into fields, a mnemonic, and single-cycle control signals.\n\nWords may be decimal or prefixed binary (0b), octal (0o), or hexadecimal (0x).\nWith no words, reads one word per line from stdin until an empty line.\n\nExamples:\n  mipsdec 0x22300005\n  mipsdec --json 0x8fa80004 0x1085000a\n  mipsdec --config decoder.json"
)]
struct Cli {
    /// Instruction words to decode. Reads stdin interactively when omitted.
    words: Vec<String>,

    /// Emit one JSON object per word instead of the text report.
    #[arg(long)]
    json: bool,

    /// Omit the 32-bit binary string from the text report.
    #[arg(long)]
    no_bits: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every decode at trace level (stderr).
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref().map(Config::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    if cli.json {
        config.report.style = ReportStyle::Json;
    }
    if cli.no_bits {
        config.report.show_bits = false;
    }
    init_tracing(cli.trace || config.general.trace_decodes);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if cli.words.is_empty() {
        run_interactive(&mut out, &config)
    } else {
        run_batch(&mut out, &cli.words, &config.report)
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            error!(%err, "failed to write report");
            process::exit(1);
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins; `trace` raises the core crate to trace.
fn init_tracing(trace: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        match "mipsdec_core=trace".parse::<Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(err) => eprintln!("warning: ignoring trace directive: {err}"),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Decodes every word; returns false if any failed.
fn run_batch<W: Write>(out: &mut W, words: &[String], config: &ReportConfig) -> io::Result<bool> {
    let mut all_ok = true;
    for word in words {
        all_ok &= decode_one(out, word, config)?;
    }
    Ok(all_ok)
}

/// Prompts for words until an empty line or EOF. Failed words are reported and skipped.
fn run_interactive<W: Write>(out: &mut W, config: &Config) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    // JSON output stays one object per line, so no banner or prompt.
    let chatty = config.report.style == ReportStyle::Text;
    if chatty {
        writeln!(out, "--- [MIPS instruction decoder] ---")?;
    }
    loop {
        if chatty {
            write!(out, "{}", config.prompt.text)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let word = line.trim();
        if word.is_empty() {
            break;
        }
        let _ = decode_one(out, word, &config.report)?;
    }
    Ok(true)
}

/// Parses, decodes, and reports one word; returns false on a decode failure.
fn decode_one<W: Write>(out: &mut W, input: &str, config: &ReportConfig) -> io::Result<bool> {
    match parse_word(input).and_then(decode) {
        Ok(inst) => {
            let signals = ControlSignals::for_instruction(&inst);
            write_report(out, &inst, &signals, config)?;
            Ok(true)
        }
        Err(err) => {
            warn!(input, %err, "decode failed");
            write_error(out, input, &err, config)?;
            Ok(false)
        }
    }
}
