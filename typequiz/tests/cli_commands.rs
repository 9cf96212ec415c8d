//! CLI tests for `typequiz` commands.
//!
//! Spawns the binary against temporary data directories and verifies
//! printed results and exit codes.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use typequiz::exit_codes;
use typequiz::io::init::{InitOptions, init_data_dir};
use typequiz::test_support::{TestDataDir, small_quiz};

fn typequiz(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_typequiz"));
    cmd.current_dir(dir).arg("--data-dir").arg(dir);
    cmd
}

#[test]
fn score_prints_result_code() {
    let data = TestDataDir::new(&small_quiz()).expect("data dir");
    let sheet = data.path().join("answers.json");
    fs::write(&sheet, "[2, 1, 2]").expect("write sheet");

    let output = typequiz(data.path())
        .arg("score")
        .arg("--answers")
        .arg(&sheet)
        .output()
        .expect("typequiz score");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "MMM-3\n");
}

#[test]
fn score_skips_values_outside_button_scores() {
    let data = TestDataDir::new(&small_quiz()).expect("data dir");
    let sheet = data.path().join("answers.json");
    fs::write(&sheet, "[2147483647, 1, -2147483648]").expect("write sheet");

    let output = typequiz(data.path())
        .arg("score")
        .arg("--answers")
        .arg(&sheet)
        .output()
        .expect("typequiz score");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "PMM-2\n");
}

#[test]
fn score_json_reports_all_axes() {
    let data = TestDataDir::new(&small_quiz()).expect("data dir");
    let sheet = data.path().join("answers.json");
    fs::write(&sheet, "[2, 0, null]").expect("write sheet");

    let output = typequiz(data.path())
        .args(["score", "--json", "--answers"])
        .arg(&sheet)
        .output()
        .expect("typequiz score");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["code"], "SMM-2");
    assert_eq!(report["type"], "SMM");
    assert_eq!(report["level"], 2);
    assert_eq!(report["scores"]["S1"], 4);
    assert_eq!(report["scores"].as_object().expect("scores").len(), 10);
}

#[test]
fn malformed_data_exits_invalid() {
    let data = TestDataDir::new(&small_quiz()).expect("data dir");
    fs::write(data.paths().config_path, "{ not json").expect("corrupt config");

    let output = typequiz(data.path())
        .arg("validate")
        .output()
        .expect("typequiz validate");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not be loaded"));
    assert!(stderr.contains("config.json"));
}

#[test]
fn validate_summarizes_bundled_sample() {
    let temp = tempfile::tempdir().expect("tempdir");
    init_data_dir(temp.path(), &InitOptions { force: false }).expect("init");

    let output = typequiz(temp.path())
        .arg("validate")
        .output()
        .expect("typequiz validate");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("validate: questions=18 three_choice=3 scale=15"));
    assert!(stdout.contains("languages=en,ja"));
}

#[test]
fn init_refuses_existing_data_without_force() {
    let data = TestDataDir::new(&small_quiz()).expect("data dir");

    let status = typequiz(data.path())
        .arg("init")
        .status()
        .expect("typequiz init");
    assert_eq!(status.code(), Some(exit_codes::INVALID));

    let status = typequiz(data.path())
        .args(["init", "--force"])
        .status()
        .expect("typequiz init --force");
    assert_eq!(status.code(), Some(exit_codes::OK));
}

#[test]
fn take_completes_and_saves_answers() {
    let data = TestDataDir::new(&small_quiz()).expect("data dir");
    let sheet = data.path().join("saved.json");

    let mut child = typequiz(data.path())
        .args(["take", "--lang", "en", "--save"])
        .arg(&sheet)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn typequiz take");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"\n5\nn\n2\nn\n5\nn\n\n")
        .expect("write input");
    let output = child.wait_with_output().expect("wait");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("  MMM-3"));
    assert_eq!(fs::read_to_string(&sheet).expect("sheet"), "[2,1,2]\n");
}

#[test]
fn take_aborted_on_quit() {
    let data = TestDataDir::new(&small_quiz()).expect("data dir");

    let mut child = typequiz(data.path())
        .arg("take")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn typequiz take");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"\nq\n")
        .expect("write input");
    let output = child.wait_with_output().expect("wait");

    assert_eq!(output.status.code(), Some(exit_codes::ABORTED));
}
