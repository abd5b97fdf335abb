//! `fsname` CLI — encode text into filesystem-legal file names and back.
//!
//! ## Usage
//!
//! ```sh
//! # Encode text given as an argument
//! fsname encode 'report: Q1/Q2?'
//! # report(COLON) Q1(SLASH)Q2(QUESTION)
//!
//! # Decode a name read from stdin
//! echo 'report(COLON) Q1(SLASH)Q2(QUESTION)' | fsname decode
//!
//! # Reject names that contain forbidden characters before decoding
//! fsname decode --strict 'a*b'
//!
//! # Check whether a string is a legal encoded name
//! fsname check 'a(STAR)b'
//!
//! # Show how the scanner splits a name
//! fsname tokens 'a_(STAR)\b'
//!
//! # File I/O, keeping the input byte-for-byte (no trailing newline stripping)
//! fsname encode --raw -i notes.txt -o name.txt
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use fsname_core::FileName;
use std::io::{self, Read};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    name = "fsname",
    version,
    about = "Lossless text <-> filesystem-legal file name conversion"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode arbitrary text into a file name
    Encode {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Decode a file name back into text
    Decode {
        #[command(flatten)]
        io: IoArgs,
        /// Fail if the name contains characters no encoded name may contain
        #[arg(long)]
        strict: bool,
    },
    /// Check that a name contains no forbidden characters
    Check {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Print the scanner's token stream for a name as JSON
    Tokens {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Value to convert (reads --input or stdin if omitted)
    value: Option<String>,
    /// Input file
    #[arg(short, long, conflicts_with = "value")]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Keep a trailing line terminator on file/stdin input
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode { io } => {
            let text = read_input(&io)?;
            let name = fsname_core::encode(&text);
            info!(text_bytes = text.len(), name_bytes = name.len(), "encoded");
            write_output(io.output.as_deref(), &name)?;
        }
        Commands::Decode { io, strict } => {
            let name = read_input(&io)?;
            let text = if strict {
                FileName::parse(name)
                    .context("Input is not a legal file name")?
                    .to_text()
            } else {
                fsname_core::decode(&name)
            };
            info!(text_bytes = text.len(), "decoded");
            write_output(io.output.as_deref(), &text)?;
        }
        Commands::Check { io } => {
            let name = read_input(&io)?;
            FileName::parse(name).context("Illegal file name")?;
            write_output(io.output.as_deref(), "legal\n")?;
        }
        Commands::Tokens { io } => {
            let name = read_input(&io)?;
            let tokens = fsname_core::tokenize(&name);
            debug!(count = tokens.len(), "scanned");
            let json = serde_json::to_string_pretty(&tokens)?;
            write_output(io.output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Log to stderr so that stdout carries only the converted value.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the input value: positional argument, then --input, then stdin.
///
/// File and stdin input lose one trailing `\n` or `\r\n` unless `--raw` is set,
/// since a newline is significant to the encoder.
fn read_input(args: &IoArgs) -> Result<String> {
    if let Some(value) = &args.value {
        debug!(source = "argument", bytes = value.len(), "read input");
        return Ok(value.clone());
    }
    let mut buf = match args.input.as_deref() {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    debug!(source = args.input.as_deref().unwrap_or("stdin"), bytes = buf.len(), "read input");
    if !args.raw {
        strip_line_terminator(&mut buf);
    }
    Ok(buf)
}

fn strip_line_terminator(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
