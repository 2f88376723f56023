//! CLI tests: stdin-to-stdout conversion, exit codes, and `-g`.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use assert_cmd::cargo;

fn l2u_cmd() -> Command {
    Command::new(cargo::cargo_bin!("l2u"))
}

fn run_with_stdin(cmd: &mut Command, stdin_body: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn l2u");

    {
        let stdin = child.stdin.as_mut().expect("stdin handle");
        stdin.write_all(stdin_body).expect("write stdin body");
    }

    child.wait_with_output().expect("wait for output")
}

fn convert(input: &str) -> Output {
    run_with_stdin(&mut l2u_cmd(), input.as_bytes())
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn converts_stdin_to_stdout() {
    let output = convert(r"Let $x \in \bb{R}$ and \alpha^2 = 90^\circ.");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Let 𝑥 ∈ ℝ and α² = 90°.");
    assert!(output.stderr.is_empty());
}

#[test]
fn empty_input_gives_empty_output() {
    let output = convert("");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn multi_line_input_is_streamed_through() {
    let output = convert("first \\'e\nsecond x_1\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "first é\nsecond x₁\n");
}

#[test]
fn incomplete_input_still_succeeds() {
    let output = convert(r"x\bb");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "x(error:\\bb)");
}

#[test]
fn incomplete_input_is_logged_when_asked() {
    let output = run_with_stdin(l2u_cmd().env("RUST_LOG", "warn"), b"{abc");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "abc(error:nul)");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unfinished command"), "stderr={stderr}");
}

#[test]
fn logging_can_be_silenced() {
    let output = run_with_stdin(l2u_cmd().env("RUST_LOG", "off"), b"{abc");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn invalid_utf8_is_passed_through() {
    let output = run_with_stdin(&mut l2u_cmd(), &[b'a', 0xFF, b'^', b'2']);
    assert!(output.status.success());
    // 0xFF announces a four-byte sequence and swallows `^2`.
    assert_eq!(output.stdout, [b'a', 0xFF, b'^', b'2']);
}

#[test]
fn help_mentions_generate() {
    let output = l2u_cmd().arg("--help").output().expect("run help");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--generate"));
}

#[test]
fn unknown_flag_is_rejected() {
    let output = l2u_cmd().arg("--nope").output().expect("run l2u");
    assert!(!output.status.success());
}

fn excerpt() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../table-gen/tests/fixtures/NamesList-excerpt.txt"
    ))
}

#[test]
fn generate_prints_table_and_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::copy(excerpt(), dir.path().join("NamesList.txt")).expect("copy names list");

    let output = l2u_cmd()
        .arg("-g")
        .current_dir(dir.path())
        .output()
        .expect("run l2u -g");
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("pub(crate) static MAPPINGS"));
    assert!(text.contains(r#"r"\mathcal""#));
    assert!(text.contains(r#"("α", r"\alpha"),"#));
}
