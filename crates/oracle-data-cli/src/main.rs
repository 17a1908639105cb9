// oracle-data-cli/src/main.rs
// ============================================================================
// Module: Oracle Data CLI Entry Point
// Description: Command dispatcher for decode, encode, diff, and validation.
// Purpose: Provide a bounded, localized JSON-in/JSON-out front end.
// Dependencies: clap, oracle-data-core, serde, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The oracle data CLI reads triple lists or entities as JSON from files or
//! stdin, runs the core codec, and writes JSON to stdout. Diagnostics go to
//! stderr. All user-facing strings are routed through the i18n catalog. Inputs
//! are untrusted: every read is capped at [`MAX_INPUT_BYTES`].

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use oracle_data_cli::t;
use oracle_data_core::DataField;
use oracle_data_core::DecodeError;
use oracle_data_core::DecodeTrace;
use oracle_data_core::Requirement;
use oracle_data_core::Response;
use oracle_data_core::decode_assets;
use oracle_data_core::decode_assets_with_trace;
use oracle_data_core::decode_provider;
use oracle_data_core::decode_provider_with_trace;
use oracle_data_core::diff_by_fields;
use oracle_data_core::encode_json;
use oracle_data_core::is_valid_asset_id;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of any JSON input, file or stdin.
const MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;
/// Path value that selects stdin.
const STDIN_PATH: &str = "-";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "oracle-data", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a triple list into provider or asset responses.
    Decode {
        /// Selected decode subcommand.
        #[command(subcommand)]
        command: DecodeCommand,
    },
    /// Encode a JSON entity into a triple list.
    Encode(EncodeCommand),
    /// Compute the delta between two inputs.
    Diff {
        /// Selected diff subcommand.
        #[command(subcommand)]
        command: DiffCommand,
    },
    /// Identifier validation utilities.
    Validate {
        /// Selected validate subcommand.
        #[command(subcommand)]
        command: ValidateCommand,
    },
}

/// Decode subcommands.
#[derive(Subcommand, Debug)]
enum DecodeCommand {
    /// Decode the data provider profile.
    Provider(DecodeArgs),
    /// Decode every asset record, in discovery order.
    Assets(DecodeArgs),
}

/// Arguments shared by the decode subcommands.
#[derive(Args, Debug)]
struct DecodeArgs {
    /// Triple list JSON file (`-` reads stdin).
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
    /// Exit with failure when any response has status `error`.
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,
    /// Print decode events to stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    trace: bool,
}

/// Arguments for `encode`.
#[derive(Args, Debug)]
struct EncodeCommand {
    /// Entity JSON file (`-` reads stdin).
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
}

/// Diff subcommands.
#[derive(Subcommand, Debug)]
enum DiffCommand {
    /// Diff two triple lists.
    Fields(DiffArgs),
    /// Encode two entities and diff the resulting triple lists.
    Data(DiffArgs),
}

/// Arguments shared by the diff subcommands.
#[derive(Args, Debug)]
struct DiffArgs {
    /// Previous state (`-` reads stdin).
    #[arg(long, value_name = "PATH")]
    previous: PathBuf,
    /// Next state (`-` reads stdin).
    #[arg(long, value_name = "PATH")]
    next: PathBuf,
}

/// Validate subcommands.
#[derive(Subcommand, Debug)]
enum ValidateCommand {
    /// Check that an asset identifier is well formed.
    AssetId {
        /// Asset identifier to check.
        #[arg(value_name = "ID")]
        id: String,
    },
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Decode {
            command,
        } => command_decode(command),
        Commands::Encode(command) => command_encode(&command),
        Commands::Diff {
            command,
        } => command_diff(command),
        Commands::Validate {
            command,
        } => command_validate(command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Decode Command
// ============================================================================

/// Dispatches decode subcommands.
fn command_decode(command: DecodeCommand) -> CliResult<ExitCode> {
    match command {
        DecodeCommand::Provider(args) => {
            let fields: Vec<DataField> = read_json(&args.input, &t!("input.kind.fields"))?;
            let response = if args.trace {
                decode_provider_with_trace(&fields, &mut StderrTrace)
            } else {
                decode_provider(&fields)
            };
            write_json(&response, &t!("input.kind.fields"))?;
            Ok(strict_exit_code(args.strict, &[response]))
        }
        DecodeCommand::Assets(args) => {
            let fields: Vec<DataField> = read_json(&args.input, &t!("input.kind.fields"))?;
            let responses = if args.trace {
                decode_assets_with_trace(&fields, &mut StderrTrace)
            } else {
                decode_assets(&fields)
            };
            write_json(&responses, &t!("input.kind.fields"))?;
            Ok(strict_exit_code(args.strict, &responses))
        }
    }
}

/// Returns failure in strict mode when any response carries errors.
fn strict_exit_code<T, P>(strict: bool, responses: &[Response<T, P>]) -> ExitCode {
    let failed = responses.iter().filter(|response| !response.is_ok()).count();
    if !strict || failed == 0 {
        return ExitCode::SUCCESS;
    }
    let _ = write_stderr_line(&t!("decode.strict_failed", count = failed, total = responses.len()));
    ExitCode::FAILURE
}

/// Decode trace that reports every event on stderr.
struct StderrTrace;

impl DecodeTrace for StderrTrace {
    fn on_schema_selected(&mut self, schema: &'static str, asset_id: Option<&str>) {
        let target = trace_target(asset_id);
        let _ = write_stderr_line(&t!("trace.schema_selected", schema = schema, target = target));
    }

    fn on_field_resolved(&mut self, path: &str, key: &str) {
        let _ = write_stderr_line(&t!("trace.field_resolved", path = path, key = key));
    }

    fn on_field_failed(&mut self, path: &str, error: &DecodeError, requirement: Requirement) {
        let requirement = match requirement {
            Requirement::Required => t!("trace.requirement.required"),
            Requirement::Optional => t!("trace.requirement.optional"),
        };
        let _ = write_stderr_line(&t!(
            "trace.field_failed",
            requirement = requirement,
            path = path,
            error = error
        ));
    }

    fn on_dispatch_failed(&mut self, asset_id: Option<&str>, error: &DecodeError) {
        let target = trace_target(asset_id);
        let _ = write_stderr_line(&t!("trace.dispatch_failed", target = target, error = error));
    }
}

/// Labels a trace target: the asset id, or the provider profile.
fn trace_target(asset_id: Option<&str>) -> String {
    asset_id.map_or_else(|| t!("trace.target.provider"), str::to_string)
}

// ============================================================================
// SECTION: Encode Command
// ============================================================================

/// Encodes one JSON entity and prints its triple list.
fn command_encode(command: &EncodeCommand) -> CliResult<ExitCode> {
    let kind = t!("input.kind.entity");
    let fields = read_and_encode(&command.input, &kind)?;
    write_json(&fields, &kind)?;
    Ok(ExitCode::SUCCESS)
}

/// Reads a JSON entity and encodes it.
fn read_and_encode(path: &Path, kind: &str) -> CliResult<Vec<DataField>> {
    let value: Value = read_json(path, kind)?;
    encode_json(&value).map_err(|err| CliError::new(t!("encode.failed", kind = kind, error = err)))
}

// ============================================================================
// SECTION: Diff Command
// ============================================================================

/// Dispatches diff subcommands.
fn command_diff(command: DiffCommand) -> CliResult<ExitCode> {
    let previous_kind = t!("input.kind.previous");
    let next_kind = t!("input.kind.next");
    let delta = match command {
        DiffCommand::Fields(args) => {
            ensure_single_stdin(&args)?;
            let previous: Vec<DataField> = read_json(&args.previous, &previous_kind)?;
            let next: Vec<DataField> = read_json(&args.next, &next_kind)?;
            diff_by_fields(&previous, &next)
        }
        DiffCommand::Data(args) => {
            ensure_single_stdin(&args)?;
            let previous = read_and_encode(&args.previous, &previous_kind)?;
            let next = read_and_encode(&args.next, &next_kind)?;
            diff_by_fields(&previous, &next)
        }
    };
    write_json(&delta, &t!("input.kind.fields"))?;
    Ok(ExitCode::SUCCESS)
}

/// Rejects diffs that would read stdin for both sides.
fn ensure_single_stdin(args: &DiffArgs) -> CliResult<()> {
    if is_stdin(&args.previous) && is_stdin(&args.next) {
        return Err(CliError::new(t!("input.stdin_twice")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Validate Command
// ============================================================================

/// Asset identifier validation report.
#[derive(Debug, Serialize)]
struct AssetIdReport<'a> {
    /// Checked identifier.
    id: &'a str,
    /// Whether the identifier is well formed.
    valid: bool,
}

/// Dispatches validate subcommands.
fn command_validate(command: ValidateCommand) -> CliResult<ExitCode> {
    match command {
        ValidateCommand::AssetId {
            id,
        } => {
            let report = AssetIdReport {
                id: &id,
                valid: is_valid_asset_id(&id),
            };
            write_json(&report, &t!("input.kind.entity"))?;
            if report.valid {
                write_stderr_line(&t!("validate.asset_id.valid", id = id))
                    .map_err(|err| CliError::new(output_error("stderr", &err)))?;
                Ok(ExitCode::SUCCESS)
            } else {
                write_stderr_line(&t!("validate.asset_id.invalid", id = id))
                    .map_err(|err| CliError::new(output_error("stderr", &err)))?;
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded reads.
#[derive(Debug)]
enum ReadLimitError {
    /// I/O failure.
    Io(std::io::Error),
    /// Input size exceeds the configured limit.
    TooLarge {
        /// Actual (or observed) size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    read_reader_with_limit(file, max_bytes)
}

/// Reads a stream to its end, failing once more than `max_bytes` arrive.
fn read_reader_with_limit(reader: impl Read, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let read_limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut limited = reader.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Returns true when `path` selects stdin.
fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Reads and parses a JSON input from a file or stdin.
fn read_json<T: DeserializeOwned>(path: &Path, kind: &str) -> CliResult<T> {
    let (bytes, label) = if is_stdin(path) {
        (read_reader_with_limit(std::io::stdin().lock(), MAX_INPUT_BYTES), t!("input.stdin"))
    } else {
        (read_bytes_with_limit(path, MAX_INPUT_BYTES), path.display().to_string())
    };
    let bytes = bytes.map_err(|err| match err {
        ReadLimitError::Io(error) => {
            CliError::new(t!("input.read_failed", kind = kind, path = label, error = error))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(t!(
            "input.read_too_large",
            kind = kind,
            path = label,
            size = size,
            limit = limit
        )),
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        CliError::new(t!("input.parse_failed", kind = kind, path = label, error = err))
    })
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes pretty-printed JSON followed by a newline to stdout.
fn write_json<T: Serialize>(value: &T, kind: &str) -> CliResult<()> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|err| {
        CliError::new(t!("output.serialize_failed", kind = kind, error = err))
    })?;
    bytes.push(b'\n');
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
