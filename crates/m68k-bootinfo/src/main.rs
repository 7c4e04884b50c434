//! CLI entry point: dumps every bootinfo record as one line on stdout.

use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use bootinfo_core::{DecodeError, DecodeEvent, StreamDecoder, TraceSink, DEFAULT_BOOTINFO_PATH};
use log::{debug, warn};
#[cfg(test)]
use tempfile as _;

const FALLBACK_PROGRAM_NAME: &str = "m68k-bootinfo";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    file: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_BOOTINFO_PATH),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ParseResult {
    Run(Options),
    Help(Options),
}

/// Parses everything after `argv[0]`. Errors carry the current options so
/// the usage text can show the effective input path.
fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, (String, Options)> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        if arg == "-h" || arg == "--help" {
            return Ok(ParseResult::Help(options));
        }

        if arg == "-f" || arg == "--file" {
            match args.next() {
                Some(value) => options.file = PathBuf::from(value),
                None => {
                    let message = format!("missing value for {}", arg.to_string_lossy());
                    return Err((message, options));
                }
            }
            continue;
        }

        let message = if arg.to_string_lossy().starts_with('-') {
            format!("unknown option: {}", arg.to_string_lossy())
        } else {
            format!("unexpected argument: {}", arg.to_string_lossy())
        };
        return Err((message, options));
    }

    Ok(ParseResult::Run(options))
}

fn program_name(argv0: Option<OsString>) -> String {
    argv0
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(
            || FALLBACK_PROGRAM_NAME.to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

fn usage_text(program: &str, options: &Options) -> String {
    format!(
        "\n\
{program}: [options]\n\
\n\
Valid options are:\n\
\x20   -f, --file file  Specify bootinfo file\n\
\x20                    (default: {})\n\
\x20   -h, --help       Display this usage information\n",
        options.file.display()
    )
}

/// Forwards decoder events to the `log` facade.
struct LogTrace;

impl TraceSink for LogTrace {
    fn on_event(&mut self, event: DecodeEvent) {
        match event {
            DecodeEvent::MachineDetected { code, name } => {
                debug!("machine type {code} is {name}");
            }
            DecodeEvent::UnknownMachine { code } => {
                warn!("unknown machine type 0x{code:08x}, machine records stay unresolved");
            }
            DecodeEvent::RecordDecoded {
                tag,
                payload_len,
                semantic_type,
            } => {
                debug!(
                    "record 0x{tag:04x}: {payload_len} payload bytes as {}",
                    semantic_type.name()
                );
            }
            DecodeEvent::EndOfStream { sentinel } => {
                let end = if sentinel { "last tag" } else { "end of file" };
                debug!("end of bootinfo at {end}");
            }
        }
    }
}

#[derive(Debug)]
enum DumpError {
    Decode(DecodeError),
    Write(io::Error),
}

/// Renders every record from `reader` to `out`, one per line, and returns
/// the number of lines written.
fn dump<R: Read, W: Write>(reader: R, out: &mut W) -> Result<usize, DumpError> {
    let mut decoder = StreamDecoder::with_trace(reader, LogTrace);
    let mut lines = 0usize;

    while let Some(record) = decoder.next_record().map_err(DumpError::Decode)? {
        writeln!(out, "{record}").map_err(DumpError::Write)?;
        lines += 1;
    }

    Ok(lines)
}

fn run(options: &Options) -> Result<(), i32> {
    let file = match File::open(&options.file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Cannot open bootinfo for reading: {}: {e}",
                options.file.display()
            );
            return Err(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = dump(BufReader::new(file), &mut out);
    // Earlier lines must reach stdout before any diagnostic.
    let flushed = out.flush();

    match (result, flushed) {
        (Ok(lines), Ok(())) => {
            debug!("rendered {lines} records from {}", options.file.display());
            Ok(())
        }
        (Err(DumpError::Decode(e)), _) => {
            eprintln!("{e}");
            Err(1)
        }
        (Err(DumpError::Write(e)), _) | (Ok(_), Err(e)) => {
            eprintln!("error: failed to write output: {e}");
            Err(1)
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    init_logging();

    let mut args = env::args_os();
    let program = program_name(args.next());

    let exit_code = match parse_args(args) {
        Ok(ParseResult::Help(options)) => {
            eprintln!("{}", usage_text(&program, &options));
            1
        }
        Ok(ParseResult::Run(options)) => match run(&options) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err((error, options)) => {
            eprintln!("{program}: {error}");
            eprintln!("{}", usage_text(&program, &options));
            1
        }
    };

    std::process::exit(exit_code);
}
