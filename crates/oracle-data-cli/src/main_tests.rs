// oracle-data-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for bounded input reads and argument parsing.
// Purpose: Ensure oversized inputs fail closed and commands parse as documented.
// Dependencies: oracle-data-cli main helpers
// ============================================================================

//! ## Overview
//! Validates `read_bytes_with_limit`, stdin-style reader limits, JSON input
//! errors, and the clap command surface.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::Parser;
use oracle_data_core::DataField;
use oracle_data_core::DecodeError;
use oracle_data_core::PartialProviderData;
use oracle_data_core::ProviderResponse;
use oracle_data_core::Response;
use oracle_data_core::ResponseError;

use super::Cli;
use super::Commands;
use super::DecodeCommand;
use super::DiffArgs;
use super::DiffCommand;
use super::ReadLimitError;
use super::ValidateCommand;
use super::command_validate;
use super::ensure_single_stdin;
use super::is_stdin;
use super::read_and_encode;
use super::read_bytes_with_limit;
use super::read_json;
use super::read_reader_with_limit;
use super::strict_exit_code;
use super::trace_target;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn temp_file(label: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("oracle-data-cli-{label}-{nanos}.json"));
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
}

/// `ExitCode` only exposes `Debug`, so codes are compared by their rendering.
fn same_code(left: ExitCode, right: ExitCode) -> bool {
    format!("{left:?}") == format!("{right:?}")
}

fn failed_provider() -> ProviderResponse {
    Response::Error {
        content: PartialProviderData::default(),
        errors: vec![ResponseError::new(
            "version",
            DecodeError::MissingField {
                key: "data_provider_version".to_string(),
            },
        )],
    }
}

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

#[test]
fn read_bytes_with_limit_allows_small_file() {
    let path = temp_file("io-small");
    fs::write(&path, b"ok").expect("write small file");

    let bytes = read_bytes_with_limit(&path, 16).expect("read small file");
    assert_eq!(bytes, b"ok");

    cleanup(&path);
}

#[test]
fn read_bytes_with_limit_rejects_large_file() {
    let path = temp_file("io-large");
    let limit = 8_usize;
    let payload = vec![0_u8; limit + 1];
    fs::write(&path, payload).expect("write large file");

    let err = read_bytes_with_limit(&path, limit).expect_err("expected size limit failure");
    match err {
        ReadLimitError::TooLarge {
            size,
            limit: reported,
        } => {
            let limit_u64 = u64::try_from(limit).expect("limit fits");
            assert!(size > limit_u64);
            assert_eq!(reported, limit);
        }
        ReadLimitError::Io(err) => panic!("unexpected IO error: {err}"),
    }

    cleanup(&path);
}

#[test]
fn read_bytes_with_limit_reports_missing_file() {
    let path = temp_file("io-missing");
    let err = read_bytes_with_limit(&path, 16).expect_err("missing file should fail");
    assert!(matches!(err, ReadLimitError::Io(_)));
}

#[test]
fn read_reader_with_limit_accepts_exact_limit() {
    let bytes = read_reader_with_limit(&b"12345678"[..], 8).expect("exact limit");
    assert_eq!(bytes.len(), 8);
}

#[test]
fn read_reader_with_limit_rejects_overflowing_stream() {
    let err = read_reader_with_limit(&b"123456789"[..], 8).expect_err("overflow");
    match err {
        ReadLimitError::TooLarge {
            size,
            limit,
        } => {
            assert_eq!(size, 9);
            assert_eq!(limit, 8);
        }
        ReadLimitError::Io(err) => panic!("unexpected IO error: {err}"),
    }
}

// ============================================================================
// SECTION: JSON Inputs
// ============================================================================

#[test]
fn read_json_parses_field_list() {
    let path = temp_file("fields");
    fs::write(&path, br#"[{"key":"data_provider_version","type":"integer","value":0}]"#)
        .expect("write field list");

    let fields: Vec<DataField> = read_json(&path, "field list").expect("parse field list");
    assert_eq!(fields, vec![DataField::integer("data_provider_version", 0)]);

    cleanup(&path);
}

#[test]
fn read_json_reports_parse_failure_with_path() {
    let path = temp_file("broken");
    fs::write(&path, b"{not json").expect("write broken file");

    let err = read_json::<Vec<DataField>>(&path, "field list").expect_err("parse failure");
    let message = err.to_string();
    assert!(message.starts_with("Failed to parse field list JSON at"));
    assert!(message.contains(&path.display().to_string()));

    cleanup(&path);
}

#[test]
fn read_json_reports_missing_file() {
    let path = temp_file("absent");
    let err = read_json::<Vec<DataField>>(&path, "entity").expect_err("missing file");
    assert!(err.to_string().starts_with("Failed to read entity at"));
}

#[test]
fn dash_selects_stdin() {
    assert!(is_stdin(Path::new("-")));
    assert!(!is_stdin(Path::new("./-")));
    assert!(!is_stdin(Path::new("fields.json")));
}

#[test]
fn trace_target_names_provider_or_asset() {
    assert_eq!(trace_target(None), "provider");
    assert_eq!(trace_target(Some("abc")), "abc");
}

// ============================================================================
// SECTION: Argument Parsing
// ============================================================================

#[test]
fn cli_parses_decode_assets_flags() {
    let cli = Cli::try_parse_from([
        "oracle-data",
        "decode",
        "assets",
        "--input",
        "fields.json",
        "--strict",
        "--trace",
    ])
    .expect("parse decode assets");
    let Some(Commands::Decode {
        command: DecodeCommand::Assets(args),
    }) = cli.command
    else {
        panic!("expected decode assets");
    };
    assert_eq!(args.input, PathBuf::from("fields.json"));
    assert!(args.strict);
    assert!(args.trace);
}

#[test]
fn cli_decode_requires_input() {
    let result = Cli::try_parse_from(["oracle-data", "decode", "provider"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_diff_data_paths() {
    let cli = Cli::try_parse_from([
        "oracle-data",
        "diff",
        "data",
        "--previous",
        "old.json",
        "--next",
        "-",
    ])
    .expect("parse diff data");
    let Some(Commands::Diff {
        command: DiffCommand::Data(args),
    }) = cli.command
    else {
        panic!("expected diff data");
    };
    assert_eq!(args.previous, PathBuf::from("old.json"));
    assert!(is_stdin(&args.next));
}

#[test]
fn cli_parses_validate_asset_id() {
    let cli = Cli::try_parse_from(["oracle-data", "validate", "asset-id", "abc"])
        .expect("parse validate");
    let Some(Commands::Validate {
        command: ValidateCommand::AssetId {
            id,
        },
    }) = cli.command
    else {
        panic!("expected validate asset-id");
    };
    assert_eq!(id, "abc");
}

#[test]
fn cli_version_flag_without_command() {
    let cli = Cli::try_parse_from(["oracle-data", "--version"]).expect("parse version");
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}

// ============================================================================
// SECTION: Command Behavior
// ============================================================================

#[test]
fn strict_mode_fails_on_error_response() {
    let responses = [failed_provider()];
    assert!(same_code(strict_exit_code(true, &responses), ExitCode::FAILURE));
}

#[test]
fn lenient_mode_succeeds_on_error_response() {
    let responses = [failed_provider()];
    assert!(same_code(strict_exit_code(false, &responses), ExitCode::SUCCESS));
}

#[test]
fn strict_mode_succeeds_without_responses() {
    let responses: [ProviderResponse; 0] = [];
    assert!(same_code(strict_exit_code(true, &responses), ExitCode::SUCCESS));
}

#[test]
fn read_and_encode_encodes_asset_file() {
    let path = temp_file("asset");
    fs::write(&path, br#"{"id": "abc", "status": -2, "ticker": "XYZ"}"#).expect("write asset");

    let fields = read_and_encode(&path, "entity").expect("encode asset file");
    assert_eq!(
        fields,
        vec![
            DataField::integer("version_<abc>", 0),
            DataField::integer("status_<abc>", -2),
            DataField::string("ticker_<abc>", "XYZ"),
        ]
    );

    cleanup(&path);
}

#[test]
fn read_and_encode_reports_encode_failure() {
    let path = temp_file("bad-entity");
    fs::write(&path, b"[1, 2]").expect("write array");

    let err = read_and_encode(&path, "entity").expect_err("arrays are not entities");
    assert_eq!(err.to_string(), "Failed to encode entity: Entity must be an object, found array");

    cleanup(&path);
}

#[test]
fn validate_rejects_id_with_zero() {
    let code = command_validate(ValidateCommand::AssetId {
        id: "abc0".to_string(),
    })
    .expect("validate runs");
    assert!(same_code(code, ExitCode::FAILURE));
}

#[test]
fn validate_accepts_base58_id() {
    let code = command_validate(ValidateCommand::AssetId {
        id: "8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS".to_string(),
    })
    .expect("validate runs");
    assert!(same_code(code, ExitCode::SUCCESS));
}

#[test]
fn diff_rejects_stdin_on_both_sides() {
    let both = DiffArgs {
        previous: PathBuf::from("-"),
        next: PathBuf::from("-"),
    };
    let err = ensure_single_stdin(&both).expect_err("stdin twice");
    assert_eq!(err.to_string(), "Only one of --previous and --next may read stdin (-).");

    let one = DiffArgs {
        previous: PathBuf::from("old.json"),
        next: PathBuf::from("-"),
    };
    assert!(ensure_single_stdin(&one).is_ok());
}
