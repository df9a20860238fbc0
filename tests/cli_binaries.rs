use std::process::{Command, Output};

fn binary_output(args: &[&str]) -> Output {
    let path = env!("CARGO_BIN_EXE_ibdiag");
    Command::new(path)
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run {path}: {error}"))
}

fn stdout_utf8(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

fn stderr_utf8(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

#[test]
fn ibdiag_help_lists_usage() {
    let output = binary_output(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = stdout_utf8(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("emit"));
    assert!(stdout.contains("dump"));
}

#[test]
fn ibdiag_without_subcommand_shows_usage() {
    let output = binary_output(&[]);
    assert!(
        !output.status.success(),
        "running without a subcommand should fail so the caller sees the usage"
    );
    let mut combined = stdout_utf8(&output);
    combined.push_str(&stderr_utf8(&output));
    assert!(combined.contains("Usage:"));
}

#[test]
fn info_is_written_as_a_note_line() {
    let output = binary_output(&["emit", "info", "buffer", "pool", "ready"]);
    assert!(output.status.success());
    assert_eq!(stderr_utf8(&output), "[Note] InnoDB: buffer pool ready\n");
    assert!(output.stdout.is_empty());
}

#[test]
fn warning_and_error_labels() {
    let warning = binary_output(&["emit", "warning", "slow"]);
    assert_eq!(stderr_utf8(&warning), "[Warning] InnoDB: slow\n");

    let error = binary_output(&["emit", "error", "bad"]);
    assert_eq!(stderr_utf8(&error), "[ERROR] InnoDB: bad\n");
}

#[test]
fn error_or_warn_follows_predicate() {
    let error = binary_output(&["emit", "error-or-warn", "--pred", "page", "corrupt"]);
    assert!(error.status.success());
    assert_eq!(stderr_utf8(&error), "[ERROR] InnoDB: page corrupt\n");

    let warning = binary_output(&["emit", "error-or-warn", "page", "corrupt"]);
    assert!(warning.status.success());
    assert_eq!(stderr_utf8(&warning), "[Warning] InnoDB: page corrupt\n");
}

#[test]
fn empty_message_still_emits_one_line() {
    let output = binary_output(&["emit", "warning"]);
    assert!(output.status.success());
    assert_eq!(stderr_utf8(&output), "[Warning] InnoDB: \n");
}

#[test]
fn hex_values_follow_the_text() {
    let output = binary_output(&["emit", "info", "--hex", "255", "--hex", "16", "space"]);
    assert_eq!(stderr_utf8(&output), "[Note] InnoDB: space 0xff 0x10\n");
}

#[test]
fn prefix_target_and_newline_options() {
    let output = binary_output(&[
        "emit",
        "error",
        "--prefix",
        "Aria",
        "--target",
        "stdout",
        "--no-newline",
        "oops",
    ]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(stdout_utf8(&output), "[ERROR] Aria: oops");
}

#[test]
fn then_text_follows_the_diagnostic() {
    let output = binary_output(&["emit", "warning", "--then", "after", "before"]);
    assert!(output.status.success());
    assert_eq!(stderr_utf8(&output), "[Warning] InnoDB: before\n");
    assert_eq!(stdout_utf8(&output), "after\n");
}

#[test]
fn dump_reads_standard_input() {
    let output = assert_cmd::Command::cargo_bin("ibdiag")
        .expect("ibdiag binary is built")
        .args(["dump", "--width", "8"])
        .write_stdin("Hello, world!\n")
        .output()
        .expect("failed to run ibdiag");
    assert!(output.status.success());
    assert_eq!(
        stdout_utf8(&output),
        "48 65 6c 6c 6f 2c 20 77  Hello, w\n6f 72 6c 64 21 0a        orld!.\n"
    );
}

#[test]
fn attach_embeds_a_dump_in_the_message() {
    let output = assert_cmd::Command::cargo_bin("ibdiag")
        .expect("ibdiag binary is built")
        .args(["emit", "error", "--attach", "page"])
        .write_stdin(&[0x00u8, 0x41][..])
        .output()
        .expect("failed to run ibdiag");
    assert!(output.status.success());
    let expected = format!("[ERROR] InnoDB: page:\n00 41{}  .A\n\n", " ".repeat(42));
    assert_eq!(stderr_utf8(&output), expected);
}

#[test]
fn dump_accepts_very_wide_lines() {
    let output = assert_cmd::Command::cargo_bin("ibdiag")
        .expect("ibdiag binary is built")
        .args(["dump", "--width", "30000"])
        .write_stdin("AB")
        .output()
        .expect("failed to run ibdiag");
    assert!(output.status.success());
    let stdout = stdout_utf8(&output);
    assert!(stdout.starts_with("41 42 "));
    assert!(stdout.ends_with("  AB\n"));
    assert_eq!(stdout.len(), 30000 * 3 + 4);
}
