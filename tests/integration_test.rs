use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_xml_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time must be after UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "xml_datatree_cli_{}_{}_{}.xml",
        prefix,
        std::process::id(),
        nanos
    ))
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_xml-datatree"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for command")
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_xml-datatree"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_prints_outline() {
    let path = temp_xml_path("outline");
    std::fs::write(&path, "<root>\n  <name>Alice</name>\n  <empty/>\n</root>\n")
        .expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_xml-datatree"))
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "root\n  name\n    Alice\n  empty\n"
    );
}

#[test]
fn test_cli_prints_json() {
    let path = temp_xml_path("json");
    std::fs::write(&path, r#"<item id="3">x</item>"#).expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_xml-datatree"))
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""value": "item id=\"3\"""#));
    assert!(stdout.contains(r#""value": "x""#));
}

#[test]
fn test_cli_reports_parse_errors() {
    let path = temp_xml_path("broken");
    std::fs::write(&path, "<root><open></root>").expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_xml-datatree"))
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse XML"));
}

#[test]
fn test_cli_reads_stdin() {
    let output = run_with_stdin(&["-"], "<root><name>Alice</name></root>");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "root\n  name\n    Alice\n"
    );
}

#[test]
fn test_cli_max_depth_limits_nesting() {
    let xml = "<a><b><c><d>deep</d></c></b></a>";

    let limited = run_with_stdin(&["-", "--max-depth", "3"], xml);
    assert!(!limited.status.success());
    let stderr = String::from_utf8_lossy(&limited.stderr);
    assert!(stderr.contains("depth limit of 3"));

    let unlimited = run_with_stdin(&["-", "--max-depth", "0"], xml);
    assert!(unlimited.status.success());
    assert_eq!(
        String::from_utf8_lossy(&unlimited.stdout),
        "a\n  b\n    c\n      d\n        deep\n"
    );
}

#[test]
fn test_cli_preserve_whitespace_and_ignore_comments() {
    let xml = "<r>\n  <!-- note -->\n  <a/>\n</r>";

    let default = run_with_stdin(&["-"], xml);
    assert!(default.status.success());
    assert_eq!(String::from_utf8_lossy(&default.stdout), "r\n  note\n  a\n");

    let preserved = run_with_stdin(&["-", "--preserve-whitespace", "--ignore-comments"], xml);
    assert!(preserved.status.success());
    assert_eq!(String::from_utf8_lossy(&preserved.stdout), "r\n  \n  \n  a\n  \n");
}

#[test]
fn test_cli_writes_output_file() {
    let output_path = temp_xml_path("written");

    let output = run_with_stdin(
        &["-", output_path.to_str().expect("utf-8 temp path")],
        "<root>x</root>",
    );
    let written = std::fs::read_to_string(&output_path).expect("output file");
    let _ = std::fs::remove_file(&output_path);

    assert!(output.status.success());
    assert_eq!(written, "root\n  x\n");
}
