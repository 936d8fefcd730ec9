use std::cell::Cell;
use std::io::Cursor;
use std::path::PathBuf;

use clap::{Command, Parser};
use gzh_logger::Level;
use gzh_testutil::{assert_contains, temp_file, SharedBuffer};
use serde::{Deserialize, Serialize};

use super::*;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    global: GlobalFlags,
    #[command(flatten)]
    output: OutputFlags,
    #[command(flatten)]
    dry_run: DryRunFlags,
    #[command(flatten)]
    confirm: ConfirmFlags,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Item {
    name: String,
    count: u32,
}

fn item() -> Item {
    Item {
        name: "test".into(),
        count: 42,
    }
}

fn capture(format: OutputFormat) -> (Output, SharedBuffer) {
    let buf = SharedBuffer::new();
    let out = Output::new().with_writer(buf.clone()).with_format(format);
    (out, buf)
}

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
    assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::parse("yaml"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::parse("YML"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::parse("Llm"), OutputFormat::Llm);
    assert_eq!(OutputFormat::parse("table"), OutputFormat::Text);
    assert_eq!(OutputFormat::Yaml.to_string(), "yaml");

    let err = "xml".parse::<OutputFormat>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown output format \"xml\" (expected text, json, yaml or llm)"
    );
}

#[test]
fn test_flag_defaults() {
    let cli = TestCli::try_parse_from(["test"]).unwrap();
    assert!(!cli.global.verbose);
    assert!(!cli.global.quiet);
    assert!(!cli.global.debug);
    assert!(!cli.global.no_color);
    assert_eq!(cli.global.config, None);
    assert_eq!(cli.output.format, OutputFormat::Text);
    assert_eq!(cli.output.output, None);
    assert!(!cli.dry_run.dry_run);
    assert!(!cli.dry_run.force);
    assert!(!cli.confirm.yes);
}

#[test]
fn test_flags_parse() {
    let cli = TestCli::try_parse_from([
        "test",
        "-v",
        "--no-color",
        "-c",
        "custom.yaml",
        "-f",
        "json",
        "-o",
        "out.json",
        "--dry-run",
        "--force",
        "-y",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    assert!(cli.global.no_color);
    assert_eq!(cli.global.config, Some(PathBuf::from("custom.yaml")));
    assert_eq!(cli.output.format, OutputFormat::Json);
    assert_eq!(cli.output.output, Some(PathBuf::from("out.json")));
    assert!(cli.dry_run.dry_run);
    assert!(cli.dry_run.force);
    assert!(cli.confirm.yes);
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(TestCli::try_parse_from(["test", "-v", "-q"]).is_err());
    assert!(TestCli::try_parse_from(["test", "--quiet"]).is_ok());
}

#[test]
fn test_invalid_format_rejected() {
    assert!(TestCli::try_parse_from(["test", "--format", "xml"]).is_err());
}

#[test]
fn test_log_level() {
    let mut flags = GlobalFlags::default();
    assert_eq!(flags.log_level(), Level::Warn);
    flags.quiet = true;
    assert_eq!(flags.log_level(), Level::Error);
    flags.quiet = false;
    flags.verbose = true;
    assert_eq!(flags.log_level(), Level::Info);
    flags.debug = true;
    assert_eq!(flags.log_level(), Level::Debug);

    flags.no_color = true;
    let tracing = flags.tracing_config();
    assert_eq!(tracing.level, Level::Debug);
    assert!(tracing.with_target);
    assert!(!tracing.ansi);

    let tracing = GlobalFlags::default().tracing_config();
    assert!(!tracing.with_target);
    assert!(tracing.ansi);
}

#[test]
fn test_output_json() {
    let (mut out, buf) = capture(OutputFormat::Json);
    out.print(&item()).unwrap();
    assert_eq!(
        buf.contents(),
        "{\n  \"name\": \"test\",\n  \"count\": 42\n}\n"
    );
}

#[test]
fn test_output_yaml() {
    let (mut out, buf) = capture(OutputFormat::Yaml);
    out.print(&item()).unwrap();
    assert_eq!(buf.contents(), "name: test\ncount: 42\n");
}

#[test]
fn test_output_llm() {
    let (mut out, buf) = capture(OutputFormat::Llm);
    out.print(&item()).unwrap();
    assert_eq!(buf.contents(), "NAME: test\nCOUNT: 42\n");
}

#[test]
fn test_output_llm_empty_writes_nothing() {
    let (mut out, buf) = capture(OutputFormat::Llm);
    out.print(&Item {
        name: String::new(),
        count: 0,
    })
    .unwrap();
    out.print(&Option::<Item>::None).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn test_output_text() {
    let (mut out, buf) = capture(OutputFormat::Text);
    out.print("hello").unwrap();
    out.print(&42).unwrap();
    out.print(&true).unwrap();
    assert_eq!(buf.contents(), "hello\n42\ntrue\n");

    buf.clear();
    out.print(&item()).unwrap();
    assert_eq!(buf.contents(), "name: test\ncount: 42\n");
}

#[test]
fn test_output_set_format() {
    let (mut out, buf) = capture(OutputFormat::Text);
    out.set_format(OutputFormat::Llm);
    assert_eq!(out.format(), OutputFormat::Llm);
    out.print(&item()).unwrap();
    assert_contains!(buf.contents(), "NAME: test");

    let other = SharedBuffer::new();
    out.set_writer(other.clone()).set_format(OutputFormat::Yaml);
    out.print(&item()).unwrap();
    assert_eq!(other.contents(), "name: test\ncount: 42\n");
}

#[test]
fn test_output_messages() {
    let (mut out, buf) = capture(OutputFormat::Text);
    out.success("done").unwrap();
    out.error(format_args!("failed {} times", 2)).unwrap();
    out.warning("careful").unwrap();
    out.info("note").unwrap();
    out.line("plain").unwrap();
    out.dry_run().unwrap();
    assert_eq!(
        buf.lines(),
        vec![
            "✓ done",
            "✗ failed 2 times",
            "⚠ careful",
            "ℹ note",
            "plain",
            "[DRY-RUN] No changes will be made",
        ]
    );
}

#[test]
fn test_output_from_flags_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let flags = OutputFlags {
        format: OutputFormat::Json,
        output: Some(path.clone()),
    };
    let mut out = Output::from_flags(&flags).unwrap();
    assert_eq!(out.format(), OutputFormat::Json);
    out.print(&item()).unwrap();
    drop(out);

    let written: Item = load_document(&path).unwrap();
    assert_eq!(written, item());
}

#[test]
fn test_output_from_flags_bad_path() {
    let flags = OutputFlags {
        format: OutputFormat::Text,
        output: Some(PathBuf::from("/nonexistent/dir/out.txt")),
    };
    let err = Output::from_flags(&flags).unwrap_err();
    assert_contains!(err.to_string(), "failed to create output file");
}

#[test]
fn test_render_version() {
    let cfg = RootConfig::new("gzh").with_version("1.2.3");
    assert_eq!(render_version(&cfg), "gzh version 1.2.3\n");

    let cfg = cfg.with_version_template("{name} {version} (custom)\n");
    assert_eq!(render_version(&cfg), "gzh 1.2.3 (custom)\n");
}

#[test]
fn test_new_root_command() {
    let cfg = RootConfig::new("gzh")
        .with_short("Short description")
        .with_long("Long description")
        .with_version("1.0.0");
    let cmd = new_root_command(&cfg);
    assert_eq!(cmd.get_name(), "gzh");
    assert_eq!(cmd.get_about().map(|s| s.to_string()).as_deref(), Some("Short description"));
    assert_eq!(cmd.get_version(), Some("1.0.0"));
    assert_eq!(cmd.get_long_version(), Some("gzh version 1.0.0\n"));
}

#[test]
fn test_run_version_flag() {
    let cfg = RootConfig::new("gzh").with_version("1.0.0");
    for flag in ["--version", "-V"] {
        let mut buf = SharedBuffer::new();
        run(new_root_command(&cfg), ["gzh", flag], &mut buf, |_| {
            panic!("handler must not run for {flag}")
        })
        .unwrap();
        assert_eq!(buf.contents(), "gzh version 1.0.0\n");
    }
}

#[test]
fn test_run_without_version() {
    let cmd = new_root_command(&RootConfig::new("gzh"));
    let mut buf = SharedBuffer::new();
    let result = run(cmd, ["gzh", "--version"], &mut buf, |_| Ok(()));
    assert_eq!(exit_status(&result), 2);
}

#[test]
fn test_run_help() {
    let cmd = new_root_command(&RootConfig::new("gzh").with_short("A test tool"));
    let mut buf = SharedBuffer::new();
    run(cmd, ["gzh", "--help"], &mut buf, |_| panic!("handler must not run")).unwrap();
    let help = buf.contents();
    assert_contains!(help, "A test tool");
    assert_contains!(help, "Usage");
}

#[test]
fn test_run_dispatches_to_handler() {
    let cmd = new_root_command(&RootConfig::new("gzh").with_version("1.0.0"))
        .subcommand(Command::new("hello"));
    let called = Cell::new(false);
    let mut buf = SharedBuffer::new();
    let result = run(cmd, ["gzh", "hello"], &mut buf, |matches| {
        assert_eq!(matches.subcommand_name(), Some("hello"));
        called.set(true);
        Ok(())
    });
    assert!(called.get());
    assert_eq!(exit_status(&result), 0);
}

#[test]
fn test_exit_status() {
    let cmd = new_root_command(&RootConfig::new("gzh"));
    let mut buf = SharedBuffer::new();
    let usage = run(cmd, ["gzh", "--bogus"], &mut buf, |_| Ok(()));
    assert_eq!(exit_status(&usage), 2);

    let cmd = new_root_command(&RootConfig::new("gzh"));
    let failed = run(cmd, ["gzh"], &mut buf, |_| anyhow::bail!("boom"));
    assert_eq!(exit_status(&failed), 1);
}

#[test]
fn test_version_command() {
    let info = gzh_version::Info::new("1.0.0").with_platform("linux/x86_64");
    let cmd = version_command(&info);
    assert_eq!(cmd.get_name(), "version");
    assert_eq!(
        cmd.get_about().map(|s| s.to_string()).as_deref(),
        Some("Print version information")
    );

    let mut buf = SharedBuffer::new();
    print_version(&mut buf, &info).unwrap();
    let out = buf.contents();
    assert!(out.starts_with("Version:    1.0.0\n"), "got {out:?}");
    assert!(out.ends_with("Platform:   linux/x86_64\n"), "got {out:?}");
}

#[test]
fn test_load_document_yaml() {
    let (_dir, path) = temp_file("item.yaml", "name: test\ncount: 42\n").unwrap();
    let doc: Item = load_document(&path).unwrap();
    assert_eq!(doc, item());
}

#[test]
fn test_load_document_json() {
    let (_dir, path) = temp_file("item.json", r#"{"name": "test", "count": 42}"#).unwrap();
    let doc: Item = load_document(&path).unwrap();
    assert_eq!(doc, item());
}

#[test]
fn test_parse_document_unknown_extension() {
    let doc: Item = parse_document(b"name: test\ncount: 42", "item.txt").unwrap();
    assert_eq!(doc, item());

    let result: Result<Item, _> = parse_document(b"invalid data {{{{", "item.txt");
    assert!(matches!(result, Err(DocumentError::ParseFailed)));
}

#[test]
fn test_parse_document_strict_extension() {
    let result: Result<Item, _> = parse_document(b"name: test\ncount: 42", "item.json");
    assert!(matches!(result, Err(DocumentError::ParseJson(_))));
}

#[test]
fn test_load_document_from_reader() {
    let doc: Item = load_document_from_reader(Cursor::new(r#"{"name":"test","count":42}"#)).unwrap();
    assert_eq!(doc, item());

    let missing = load_document::<Item>("/nonexistent/item.yaml").unwrap_err();
    assert!(matches!(missing, DocumentError::Read(_)));
}
