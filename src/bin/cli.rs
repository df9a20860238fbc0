//! Command-line front end for the `ibdiag` harness.
//!
//! `ibdiag emit` composes one diagnostic with the requested severity variant
//! and lets it go out of scope, which makes emission and fatal termination
//! observable from outside the process. `ibdiag dump` renders standard input
//! with the buffer formatting helpers.

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::thread;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use logging::{BufSummary, BufText, Dump, Fatal, Hex, HexBytes, Logger, Severity};
use logging_sink::{LineMode, SetSinkError, Sink, SinkConfig, Target};

/// Severity variants accepted by `ibdiag emit`.
const VARIANTS: [&str; 6] = [
    "info",
    "warning",
    "error",
    "fatal",
    "error-or-warn",
    "fatal-or-error",
];

/// Ways an `ibdiag emit` accumulator can end, accepted by `--via`.
const ENDINGS: [&str; 4] = ["abort", "drop", "unwind", "macro"];

/// Renderings accepted by `ibdiag dump --format`.
const FORMATS: [&str; 4] = ["dump", "hex", "text", "summary"];

/// Exit status for command-line usage errors.
const USAGE_ERROR: u8 = 2;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    #[error("failed to install the diagnostic sink: {0}")]
    Install(#[source] SetSinkError),
}

/// How the accumulator built by `ibdiag emit` reaches the end of its scope.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Ending {
    /// Scope end for non-fatal diagnostics, [`Fatal::abort`] for fatal ones.
    Abort,
    /// The accumulator is dropped explicitly.
    Drop,
    /// A panic unwinds through the live accumulator.
    Unwind,
    /// The `ib_*!` macros emit through the installed process-wide sink.
    Macro,
}

impl Ending {
    fn from_arg(name: &str) -> Self {
        match name {
            "drop" => Self::Drop,
            "unwind" => Self::Unwind,
            "macro" => Self::Macro,
            _ => Self::Abort,
        }
    }
}

/// The parts `ibdiag emit` appends to a diagnostic, in order.
struct Message {
    text: String,
    hex_values: Vec<u64>,
    attachment: Option<Vec<u8>>,
}

impl Message {
    fn write_to<W>(&self, out: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        out.write_str(&self.text)?;
        for value in &self.hex_values {
            write!(out, " {}", Hex(*value))?;
        }
        if let Some(data) = &self.attachment {
            write!(out, ":\n{}", Dump::new(data))?;
        }
        Ok(())
    }
}

/// Parses `args` and runs the selected subcommand.
pub fn run_with<I, In, Out, Err>(args: I, stdin: &mut In, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    In: Read,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => return report_clap_error(&error, stdout, stderr),
    };

    let result = match matches.subcommand() {
        Some(("emit", sub)) => emit(sub, stdin, stdout),
        Some(("dump", sub)) => dump(sub, stdin, stdout),
        _ => unreachable!("clap requires a subcommand"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "ibdiag: {error}");
            ExitCode::FAILURE
        }
    }
}

fn report_clap_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Out: Write,
    Err: Write,
{
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{rendered}");
            ExitCode::SUCCESS
        }
        _ => {
            let _ = write!(stderr, "{rendered}");
            ExitCode::from(USAGE_ERROR)
        }
    }
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("ibdiag")
        .about("Compose scoped diagnostics and render byte buffers.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("emit")
                .about("Compose one diagnostic and emit it when its scope ends.")
                .arg(
                    Arg::new("severity")
                        .value_name("SEVERITY")
                        .required(true)
                        .help("Severity variant to construct.")
                        .value_parser(VARIANTS),
                )
                .arg(
                    Arg::new("text")
                        .value_name("TEXT")
                        .num_args(0..)
                        .help("Words appended to the message, separated by spaces."),
                )
                .arg(
                    Arg::new("pred")
                        .long("pred")
                        .help("Predicate for error-or-warn and fatal-or-error.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("hex")
                        .long("hex")
                        .value_name("VALUE")
                        .help("Append VALUE rendered in hexadecimal.")
                        .value_parser(value_parser!(u64))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("attach")
                        .long("attach")
                        .help("Append a dump of standard input to the message.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("via")
                        .long("via")
                        .value_name("ENDING")
                        .help("How the diagnostic scope ends (abort, drop, unwind or macro).")
                        .default_value("abort")
                        .value_parser(ENDINGS),
                )
                .arg(
                    Arg::new("then")
                        .long("then")
                        .value_name("TEXT")
                        .help("Print TEXT to standard output after the diagnostic scope ends."),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .value_name("NAME")
                        .help("Component prefix rendered before the message."),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .value_name("STREAM")
                        .help("Stream receiving diagnostics (stderr or stdout).")
                        .value_parser(value_parser!(Target)),
                )
                .arg(
                    Arg::new("no-newline")
                        .long("no-newline")
                        .help("Do not terminate the diagnostic with a newline.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("tracing")
                        .long("tracing")
                        .help("Route the diagnostic through a tracing subscriber.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("dump")
                .about("Render standard input with the buffer formatting helpers.")
                .arg(
                    Arg::new("width")
                        .long("width")
                        .short('w')
                        .value_name("BYTES")
                        .help("Bytes per line for the dump format.")
                        .default_value("16")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Rendering to use.")
                        .default_value("dump")
                        .value_parser(FORMATS),
                ),
        )
}

fn read_stdin<In>(stdin: &mut In) -> Result<Vec<u8>, CliError>
where
    In: Read,
{
    let mut data = Vec::new();
    stdin.read_to_end(&mut data).map_err(CliError::Stdin)?;
    Ok(data)
}

fn sink_config(matches: &ArgMatches) -> SinkConfig {
    let mut config = SinkConfig::default().with_line_mode(LineMode::from(!matches.get_flag("no-newline")));
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        config = config.with_prefix(prefix.clone());
    }
    if let Some(target) = matches.get_one::<Target>("target") {
        config = config.with_target(*target);
    }
    config
}

fn build_sink(matches: &ArgMatches) -> Box<dyn Sink> {
    if matches.get_flag("tracing") {
        return tracing_sink();
    }
    sink_config(matches).build()
}

fn install_sink(matches: &ArgMatches) -> Result<(), SetSinkError> {
    if matches.get_flag("tracing") {
        return logging_sink::set_global_sink(tracing_sink());
    }
    sink_config(matches).install()
}

#[cfg(feature = "tracing")]
fn tracing_sink() -> Box<dyn Sink> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when running in-process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    Box::new(logging_sink::TracingSink::new())
}

#[cfg(not(feature = "tracing"))]
fn tracing_sink() -> Box<dyn Sink> {
    SinkConfig::default().build()
}

/// Panics with `value` alive so that unwinding drops it.
///
/// `resume_unwind` skips the panic hook, so nothing besides the diagnostic
/// reaches standard error.
fn unwind_holding<T>(value: T) -> thread::Result<()> {
    panic::catch_unwind(AssertUnwindSafe(move || {
        let _held = value;
        panic::resume_unwind(Box::new("diagnostic scope unwound"));
    }))
}

fn emit_fatal(sink: &dyn Sink, message: &Message, ending: Ending) -> ! {
    let mut fatal = Fatal::with_sink(sink);
    // Accumulators never fail a write.
    let _ = message.write_to(&mut fatal);
    match ending {
        Ending::Drop => drop(fatal),
        Ending::Unwind => {
            let _ = unwind_holding(fatal);
        }
        Ending::Abort | Ending::Macro => fatal.abort(),
    }
    unreachable!("dropping a fatal diagnostic aborts the process")
}

fn emit_with_macros(variant: &str, pred: bool, message: &Message) {
    let mut text = String::new();
    let _ = message.write_to(&mut text);
    match variant {
        "warning" => logging::ib_warn!("{text}"),
        "error" => logging::ib_error!("{text}"),
        "fatal" => logging::ib_fatal!("{text}"),
        "error-or-warn" => logging::ib_error_or_warn!(pred, "{text}"),
        "fatal-or-error" => logging::ib_fatal_or_error!(pred, "{text}"),
        _ => logging::ib_info!("{text}"),
    }
}

fn emit<In, Out>(matches: &ArgMatches, stdin: &mut In, stdout: &mut Out) -> Result<(), CliError>
where
    In: Read,
    Out: Write,
{
    let attachment = if matches.get_flag("attach") {
        Some(read_stdin(stdin)?)
    } else {
        None
    };
    let message = Message {
        text: matches
            .get_many::<String>("text")
            .unwrap_or_default()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        hex_values: matches.get_many::<u64>("hex").unwrap_or_default().copied().collect(),
        attachment,
    };
    let pred = matches.get_flag("pred");
    let variant = matches
        .get_one::<String>("severity")
        .map_or("info", String::as_str);
    let ending = Ending::from_arg(matches.get_one::<String>("via").map_or("abort", String::as_str));

    if ending == Ending::Macro {
        install_sink(matches).map_err(CliError::Install)?;
        emit_with_macros(variant, pred, &message);
    } else {
        let sink = build_sink(matches);
        let severity = match variant {
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            "fatal" => emit_fatal(sink.as_ref(), &message, ending),
            "error-or-warn" => Severity::error_or_warning(pred),
            "fatal-or-error" => Severity::fatal_or_error(pred),
            _ => Severity::Info,
        };

        let mut logger = Logger::with_sink(severity, sink.as_ref());
        let _ = message.write_to(&mut logger);
        if ending == Ending::Unwind {
            let _ = unwind_holding(logger);
        } else {
            drop(logger);
        }
    }

    if let Some(then) = matches.get_one::<String>("then") {
        writeln!(stdout, "{then}").map_err(CliError::Output)?;
    }
    stdout.flush().map_err(CliError::Output)
}

fn dump<In, Out>(matches: &ArgMatches, stdin: &mut In, stdout: &mut Out) -> Result<(), CliError>
where
    In: Read,
    Out: Write,
{
    let data = read_stdin(stdin)?;
    let width = matches.get_one::<usize>("width").copied().unwrap_or(logging::DEFAULT_DUMP_WIDTH);

    let written = match matches.get_one::<String>("format").map_or("dump", String::as_str) {
        "hex" => writeln!(stdout, "{}", HexBytes(&data)),
        "text" => writeln!(stdout, "{}", BufText(&data)),
        "summary" => writeln!(stdout, "{}", BufSummary(&data)),
        _ => write!(stdout, "{}", Dump::with_width(&data, width)),
    };
    written.and_then(|()| stdout.flush()).map_err(CliError::Output)
}
