//! End-to-end tests of the kubo binary

mod common;

use assert_cmd::Command;
use common::{create_test_config, create_test_config_in_subdir};
use predicates::prelude::*;

const TOOL: &str = r#"
name: tool
description: a small tool
help: true
commands:
  - name: greet
    description: print a greeting
    flags:
      - name: greeting
        aliases: [g]
    arguments:
      - name: who
    run: "${greeting}, ${who}!"
  - name: group
    commands:
      - name: leaf
        run: leaf ran
"#;

fn kubo() -> Command {
    Command::cargo_bin("kubo").unwrap()
}

#[test]
fn test_runs_template() {
    let (_dir, config) = create_test_config(TOOL);
    kubo()
        .arg("-f")
        .arg(&config)
        .args(["greet", "-g", "Hello", "world"])
        .assert()
        .success()
        .stdout("Hello, world!\n");
}

#[test]
fn test_finds_config_in_parent_dir() {
    let (_dir, _config, sub_dir) = create_test_config_in_subdir(TOOL);
    kubo()
        .current_dir(&sub_dir)
        .args(["group", "leaf"])
        .assert()
        .success()
        .stdout("leaf ran\n");
}

#[test]
fn test_unknown_flag_fails() {
    let (_dir, config) = create_test_config(TOOL);
    kubo()
        .arg("-f")
        .arg(&config)
        .args(["greet", "--shout"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("unknown flag: --shout"));
}

#[test]
fn test_missing_flag_value_fails() {
    let (_dir, config) = create_test_config(TOOL);
    kubo()
        .arg("-f")
        .arg(&config)
        .args(["greet", "world", "-g"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flag '-g' requires a value"));
}

#[test]
fn test_command_without_run_fails() {
    let (_dir, config) = create_test_config(TOOL);
    kubo()
        .arg("-f")
        .arg(&config)
        .arg("group")
        .assert()
        .failure()
        .stderr(predicate::str::contains("command 'tool group' has nothing to run"));
}

#[test]
fn test_help_command() {
    let (_dir, config) = create_test_config(TOOL);
    kubo()
        .arg("-f")
        .arg(&config)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tool - a small tool"))
        .stdout(predicate::str::contains("greet"))
        .stdout(predicate::str::contains("print a greeting"));
}

#[test]
fn test_missing_config_file() {
    let (dir, _config) = create_test_config(TOOL);
    kubo()
        .arg("-f")
        .arg(dir.path().join("absent.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_template_is_reported() {
    let (_dir, config) = create_test_config("name: bad\nrun: \"${nope}\"\n");
    kubo()
        .arg("-f")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined variable 'nope'"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (_dir, config) = create_test_config(TOOL);
    kubo()
        .env_remove("RUST_LOG")
        .arg("-f")
        .arg(&config)
        .args(["-vv", "group", "leaf"])
        .assert()
        .success()
        .stdout("leaf ran\n")
        .stderr(predicate::str::contains("dispatching 'leaf'"));
}
