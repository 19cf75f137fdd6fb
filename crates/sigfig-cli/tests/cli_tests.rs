//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sigfig() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("sigfig").unwrap()
}

fn generate_json(dir: &TempDir, category: &str, seed: u64) -> (std::path::PathBuf, serde_json::Value) {
    let output = sigfig()
        .args(["generate", "--category", category, "--seed"])
        .arg(seed.to_string())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = dir.path().join(format!("{category}-{seed}.json"));
    std::fs::write(&path, &output.stdout).unwrap();
    let value = serde_json::from_slice(&output.stdout).unwrap();
    (path, value)
}

#[test]
fn help_output() {
    sigfig()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scientific notation and significant figures practice",
        ));
}

#[test]
fn version_output() {
    sigfig()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sigfig"));
}

#[test]
fn generate_is_reproducible_with_seed() {
    let run = || {
        sigfig()
            .args(["generate", "--category", "mixed", "--count", "5", "--seed", "11"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn generate_json_array_for_many() {
    let output = sigfig()
        .args(["generate", "--category", "compareScientific", "--count", "3", "--seed", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let problems = value.as_array().unwrap();
    assert_eq!(problems.len(), 3);
    for problem in problems {
        assert_eq!(problem["category"], "compareScientific");
        assert_eq!(problem["answer"]["type"], "compare");
    }
}

#[test]
fn generate_rejects_unknown_category() {
    sigfig()
        .args(["generate", "--category", "longDivision"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn check_correct_sig_fig_answer() {
    let dir = TempDir::new().unwrap();
    let (path, problem) = generate_json(&dir, "countSigFigs", 3);
    let count = problem["answer"]["count"].as_u64().unwrap();

    sigfig()
        .arg("check")
        .arg("--problem")
        .arg(&path)
        .arg("--answer")
        .arg(count.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Correct!"));
}

#[test]
fn check_wrong_answer_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let (path, problem) = generate_json(&dir, "orderMagnitude", 8);
    let exponent = problem["answer"]["exponent"].as_i64().unwrap();

    sigfig()
        .arg("check")
        .arg("--problem")
        .arg(&path)
        .arg("--answer")
        .arg((exponent + 5).to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Incorrect. The answer was:"));
}

#[test]
fn check_scientific_spellings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("problem.json");
    std::fs::write(
        &path,
        r#"{
    "category": "toScientific",
    "question": "Convert to scientific notation: 32000",
    "answer": { "type": "scientific", "value": { "coefficient": 3.2, "exponent": 4 } }
}"#,
    )
    .unwrap();

    for answer in ["3.2 x 10^4", "3.2×10^4", "3.2 * 10 ^ 4"] {
        sigfig()
            .arg("check")
            .arg("--problem")
            .arg(&path)
            .arg("--answer")
            .arg(answer)
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ Correct!"));
    }

    sigfig()
        .arg("check")
        .arg("--problem")
        .arg(&path)
        .arg("--answer")
        .arg("32 x 10^3")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.2 × 10^4"));
}

#[test]
fn check_missing_problem_file() {
    sigfig()
        .args(["check", "--problem", "no_such_problem.json", "--answer", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn rules_single_section() {
    sigfig()
        .args(["rules", "--section", "sigfigs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Significant Figures Rules"))
        .stdout(predicate::str::contains("Leading zeros are NEVER significant"))
        .stdout(predicate::str::contains("Scientific Notation").not());
}

#[test]
fn rules_all_sections() {
    sigfig()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Scientific Notation =="))
        .stdout(predicate::str::contains("== Operations with Sig Figs =="))
        .stdout(predicate::str::contains("Common mistake"));
}

#[test]
fn categories_table() {
    sigfig()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("orderMagnitude"))
        .stdout(predicate::str::contains("magnitude"))
        .stdout(predicate::str::contains("Mixed practice"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    sigfig()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sigfig.toml"));

    assert!(dir.path().join("sigfig.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    sigfig().current_dir(dir.path()).arg("init").assert().success();

    sigfig()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn practice_reads_local_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sigfig.toml"),
        "default_category = \"orderMagnitude\"\n",
    )
    .unwrap();

    sigfig()
        .current_dir(dir.path())
        .env_remove("SIGFIG_DEFAULT_CATEGORY")
        .args(["practice", "--seed", "2"])
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Practice: Order of magnitude"))
        .stdout(predicate::str::contains("Estimate the order of magnitude"));
}

#[test]
fn practice_env_override() {
    let dir = TempDir::new().unwrap();

    sigfig()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("SIGFIG_DEFAULT_CATEGORY", "countSigFigs")
        .arg("practice")
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How many significant figures are in:"));
}

#[test]
fn practice_logs_session_start_and_switch() {
    let dir = TempDir::new().unwrap();

    sigfig()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("RUST_LOG", "sigfig=debug")
        .args(["practice", "--category", "countSigFigs", "--seed", "1"])
        .write_stdin(":category mixed\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to Mixed"))
        .stderr(predicate::str::contains("starting practice"))
        .stderr(predicate::str::contains("switched category"));
}

#[test]
fn practice_rounds_and_wrong_answers() {
    let dir = TempDir::new().unwrap();

    sigfig()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["practice", "--category", "compare-scientific", "--rounds", "2", "--seed", "4"])
        .write_stdin("\nmaybe\nperhaps\nnever reached\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0 / 2 (0%)"))
        .stdout(predicate::str::contains("Final Score: 0 / 2 (0%)"));
}

#[test]
fn practice_missing_config_fails() {
    sigfig()
        .args(["practice", "--config", "no_such_config.toml"])
        .write_stdin(":quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn quiz_perfect_run() {
    let dir = TempDir::new().unwrap();

    sigfig()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("quiz")
        .write_stdin("b\nb\na\na\nc\nd\na\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz complete: 8 / 8"))
        .stdout(predicate::str::contains("Excellent!"));
}
