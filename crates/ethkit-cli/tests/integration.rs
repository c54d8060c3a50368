//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_ethkit"))
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ethkit"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn write_input(contents: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.json");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path.to_string_lossy().to_string())
}

#[test]
fn test_convert_decimal() {
    let (success, stdout, _) = run_cli(&["convert", "1145256125817859742934257", "--json"]);
    assert!(success);
    let views: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(views["hex"], "f284757fec556200a4f1");
    assert_eq!(views["prefixed_hex"], "0xf284757fec556200a4f1");
    assert_eq!(views["kind"], "decimal");
    assert_eq!(views["padded_hex"].as_str().unwrap().len(), 64);
}

#[test]
fn test_convert_wider_than_a_word() {
    let digits = "1".repeat(80);
    let (success, stdout, _) = run_cli(&["convert", &digits, "--json"]);
    assert!(success);
    let views: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(views["decimal"], digits.as_str());
    assert_eq!(views["byte_length"], 33);
}

#[test]
fn test_convert_bounds_padding() {
    let (success, stdout, _) = run_cli(&["convert", "0xff", "--pad", "1024", "--json"]);
    assert!(success);
    let views: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(views["padded_hex"].as_str().unwrap().len(), 2048);

    let (success, _, stderr) = run_cli(&["convert", "0xff", "--pad", "18446744073709551615"]);
    assert!(!success);
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_convert_hex_table() {
    let (success, stdout, _) = run_cli(&["convert", "0xff"]);
    assert!(success);
    assert!(stdout.contains("255"));
    assert!(stdout.contains("0xff"));
}

#[test]
fn test_convert_rejects_unknown_shape() {
    let (success, _, stderr) = run_cli(&["convert", "hello"]);
    assert!(!success);
    assert!(stderr.contains("Error:"));

    let (success, _, _) = run_cli(&["convert", "0xff", "--as", "decimal"]);
    assert!(!success);
}

#[test]
fn test_random() {
    let (success, stdout, _) = run_cli(&["random", "--json"]);
    assert!(success);
    let views: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(views["padded_hex"].as_str().unwrap().len(), 64);
}

#[test]
fn test_encode_from_file() {
    let (_temp_dir, path) = write_input(r#"["cat", "dog"]"#);
    let (success, stdout, _) = run_cli(&["encode", &path]);
    assert!(success);
    assert_eq!(stdout.trim(), "0xc88363617483646f67");
}

#[test]
fn test_encode_from_stdin() {
    let (success, stdout, _) = run_cli_with_stdin(&["encode"], "[[], [[]], [[], [[]]]]");
    assert!(success);
    assert_eq!(stdout.trim(), "0xc7c0c1c0c3c0c1c0");
}

#[test]
fn test_encode_rejects_negative() {
    let (_temp_dir, path) = write_input("[1, -1]");
    let (success, _, stderr) = run_cli(&["encode", &path]);
    assert!(!success);
    assert!(stderr.contains("Encoding failed"));
}

#[test]
fn test_decode_structural() {
    let (success, stdout, _) = run_cli(&["decode", "0xc88363617483646f67"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, serde_json::json!(["0x636174", "0x646f67"]));
}

#[test]
fn test_decode_with_integer_codec() {
    let (success, stdout, _) = run_cli(&["decode", "820400", "--sedes", "int"]);
    assert!(success);
    assert_eq!(stdout.trim(), "1024");
}

#[test]
fn test_decode_trailing_bytes() {
    let (success, _, stderr) = run_cli(&["decode", "0x8000"]);
    assert!(!success);
    assert!(stderr.contains("trailing"));

    let (success, stdout, _) = run_cli(&["decode", "0x8000", "--permissive"]);
    assert!(success);
    assert_eq!(stdout.trim(), r#""0x""#);
}

#[test]
fn test_infer() {
    let (_temp_dir, path) = write_input(r#"[[], "asdf", 5]"#);
    let (success, stdout, _) = run_cli(&["infer", &path]);
    assert!(success);
    assert_eq!(stdout.trim(), "list[list, bytes, int]");
}

#[test]
fn test_hash_is_deterministic() {
    let (_temp_dir, path) = write_input(r#"["cat", "dog"]"#);
    let (success, first, _) = run_cli(&["hash", &path]);
    assert!(success);
    let (_, second, _) = run_cli(&["hash", &path]);
    assert_eq!(first, second);
    assert_eq!(first.trim().len(), 66);
}

#[test]
fn test_hash_uses_keccak256() {
    let (_temp_dir, path) = write_input("[]");
    let (success, stdout, _) = run_cli(&["hash", &path]);
    assert!(success);
    assert_eq!(
        stdout.trim(),
        "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347"
    );
}

#[test]
fn test_encode_integer_beyond_u64() {
    let (_temp_dir, path) = write_input("18446744073709551616");
    let (success, stdout, _) = run_cli(&["encode", &path]);
    assert!(success);
    assert_eq!(stdout.trim(), "0x89010000000000000000");
}
