//! Integration tests for the pwseal CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.  The
//! password comes from `PWSEAL_PASSWORD` so nothing prompts, and a low
//! `--iterations` keeps each run fast.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the pwseal binary, run inside `dir`.
fn pwseal(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pwseal").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("PWSEAL_PASSWORD")
        .env_remove("PWSEAL_ITERATIONS")
        .env_remove("PWSEAL_FORMAT");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    pwseal(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Password-based authenticated encryption",
        ))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("fingerprint"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    pwseal(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn encrypt_then_decrypt_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.child("questions.json");
    input.write_str("{\"title\":\"two sum\"}").unwrap();

    pwseal(&tmp)
        .args(["--iterations", "1000", "encrypt", "questions.json", "-o", "questions.sealed"])
        .env("PWSEAL_PASSWORD", "correct horse")
        .assert()
        .success()
        .stderr(predicate::str::contains("Encrypted 19 bytes"));

    let sealed = std::fs::read(tmp.child("questions.sealed").path()).unwrap();
    assert_eq!(sealed.len(), 12 + 19 + 16);

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "questions.sealed"])
        .env("PWSEAL_PASSWORD", "correct horse")
        .assert()
        .success()
        .stdout("{\"title\":\"two sum\"}");
}

#[test]
fn decrypt_with_wrong_password_fails() {
    let tmp = TempDir::new().unwrap();
    tmp.child("plain.txt").write_str("secret").unwrap();

    pwseal(&tmp)
        .args(["--iterations", "1000", "encrypt", "plain.txt", "-o", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "right password")
        .assert()
        .success();

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "wrong password")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn armored_output_is_text_and_decrypts() {
    let tmp = TempDir::new().unwrap();
    tmp.child("plain.txt").write_str("armored payload").unwrap();

    let assert = pwseal(&tmp)
        .args(["--iterations", "1000", "encrypt", "plain.txt", "--armor"])
        .env("PWSEAL_PASSWORD", "armor-pass")
        .assert()
        .success();
    let armored = assert.get_output().stdout.clone();
    assert!(armored.iter().all(|b| b.is_ascii()));

    tmp.child("blob.txt").write_binary(&armored).unwrap();

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "blob.txt"])
        .env("PWSEAL_PASSWORD", "armor-pass")
        .assert()
        .success()
        .stdout("armored payload");
}

#[test]
fn aad_must_match_on_decrypt() {
    let tmp = TempDir::new().unwrap();
    tmp.child("row.txt").write_str("row data").unwrap();

    pwseal(&tmp)
        .args([
            "--iterations", "1000", "encrypt", "row.txt", "-o", "row.sealed", "--aad", "id-1",
        ])
        .env("PWSEAL_PASSWORD", "aad-pass")
        .assert()
        .success();

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "row.sealed", "--aad", "id-2"])
        .env("PWSEAL_PASSWORD", "aad-pass")
        .assert()
        .failure();

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "row.sealed", "--aad", "id-1"])
        .env("PWSEAL_PASSWORD", "aad-pass")
        .assert()
        .success()
        .stdout("row data");
}

#[test]
fn empty_password_from_env_opens_library_blob() {
    let tmp = TempDir::new().unwrap();
    let blob = pwseal::encrypt(b"hi", "").unwrap();
    tmp.child("empty.sealed").write_binary(&blob).unwrap();

    pwseal(&tmp)
        .args(["decrypt", "empty.sealed"])
        .env("PWSEAL_PASSWORD", "")
        .assert()
        .success()
        .stdout("hi");
}

#[test]
fn empty_password_round_trips_through_cli() {
    let tmp = TempDir::new().unwrap();
    tmp.child("plain.txt").write_str("no password").unwrap();

    pwseal(&tmp)
        .args(["--iterations", "1000", "encrypt", "plain.txt", "-o", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "")
        .assert()
        .success()
        .stderr(predicate::str::contains("shorter than"));

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "not empty")
        .assert()
        .failure();

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "")
        .assert()
        .success()
        .stdout("no password");
}

#[test]
fn iterations_and_format_from_env() {
    let tmp = TempDir::new().unwrap();
    tmp.child("plain.txt").write_str("env settings").unwrap();

    pwseal(&tmp)
        .args(["encrypt", "plain.txt", "-o", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "env-pass")
        .env("PWSEAL_ITERATIONS", "1000")
        .env("PWSEAL_FORMAT", "embedded-salt")
        .assert()
        .success()
        .stderr(predicate::str::contains("embedded-salt layout"));

    let sealed = std::fs::read(tmp.child("plain.sealed").path()).unwrap();
    assert_eq!(sealed.len(), 16 + 12 + 12 + 16);

    // The flag wins over the environment.
    pwseal(&tmp)
        .args(["--iterations", "2000", "decrypt", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "env-pass")
        .env("PWSEAL_ITERATIONS", "1000")
        .env("PWSEAL_FORMAT", "embedded-salt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));

    pwseal(&tmp)
        .args(["decrypt", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "env-pass")
        .env("PWSEAL_ITERATIONS", "1000")
        .env("PWSEAL_FORMAT", "embedded-salt")
        .assert()
        .success()
        .stdout("env settings");
}

#[test]
fn armor_setting_in_config_file() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".pwseal.toml")
        .write_str("iterations = 1000\narmor = true\n")
        .unwrap();
    tmp.child("plain.txt").write_str("configured armor").unwrap();

    pwseal(&tmp)
        .args(["encrypt", "plain.txt", "-o", "plain.asc"])
        .env("PWSEAL_PASSWORD", "armor-config")
        .assert()
        .success();

    let armored = std::fs::read(tmp.child("plain.asc").path()).unwrap();
    assert!(armored.iter().all(|b| b.is_ascii()));

    pwseal(&tmp)
        .args(["decrypt", "plain.asc"])
        .env("PWSEAL_PASSWORD", "armor-config")
        .assert()
        .success()
        .stdout("configured armor");
}

#[test]
fn stdin_round_trip() {
    let tmp = TempDir::new().unwrap();

    let armored = pwseal(&tmp)
        .args(["--iterations", "1000", "encrypt", "-", "--armor"])
        .env("PWSEAL_PASSWORD", "stdin-pass")
        .write_stdin("piped plaintext")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    pwseal(&tmp)
        .args(["--iterations", "1000", "decrypt", "-"])
        .env("PWSEAL_PASSWORD", "stdin-pass")
        .write_stdin(armored)
        .assert()
        .success()
        .stdout("piped plaintext");
}

#[test]
fn binary_output_to_pipe_is_allowed() {
    let tmp = TempDir::new().unwrap();

    // stdout is a pipe here, so raw bytes are written rather than refused.
    let raw = pwseal(&tmp)
        .args(["--iterations", "1000", "encrypt", "-"])
        .env("PWSEAL_PASSWORD", "pipe-pass")
        .write_stdin("raw bytes")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(raw.len(), 12 + 9 + 16);

    pwseal(&tmp)
        .args(["--iterations", "1000", "inspect", "-"])
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("ciphertext"));
}

#[test]
fn short_blob_is_rejected_without_password() {
    let tmp = TempDir::new().unwrap();
    tmp.child("short.bin").write_binary(&[0xFFu8; 10]).unwrap();

    // No PWSEAL_PASSWORD is set, so reaching the prompt would fail with a
    // prompt error instead of the length error.
    pwseal(&tmp)
        .args(["decrypt", "short.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed input"));
}

#[test]
fn inspect_shows_layout() {
    let tmp = TempDir::new().unwrap();
    tmp.child("plain.txt").write_str("12345").unwrap();

    pwseal(&tmp)
        .args(["--iterations", "1000", "encrypt", "plain.txt", "-o", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "inspect-pass")
        .assert()
        .success();

    pwseal(&tmp)
        .args(["inspect", "plain.sealed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nonce"))
        .stdout(predicate::str::contains("ciphertext"))
        .stdout(predicate::str::contains("tag"))
        .stderr(predicate::str::contains("33 bytes"));
}

#[test]
fn embedded_salt_format_from_config_file() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".pwseal.toml")
        .write_str("iterations = 1000\nformat = \"embedded-salt\"\n")
        .unwrap();
    tmp.child("plain.txt").write_str("salted").unwrap();

    pwseal(&tmp)
        .args(["encrypt", "plain.txt", "-o", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "config-pass")
        .assert()
        .success();

    let sealed = std::fs::read(tmp.child("plain.sealed").path()).unwrap();
    assert_eq!(sealed.len(), 16 + 12 + 6 + 16);

    pwseal(&tmp)
        .args(["decrypt", "plain.sealed"])
        .env("PWSEAL_PASSWORD", "config-pass")
        .assert()
        .success()
        .stdout("salted");
}

#[test]
fn invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".pwseal.toml").write_str("iterations = 5\n").unwrap();
    tmp.child("plain.txt").write_str("x").unwrap();

    pwseal(&tmp)
        .args(["encrypt", "plain.txt", "-o", "out.sealed"])
        .env("PWSEAL_PASSWORD", "whatever")
        .assert()
        .failure()
        .stderr(predicate::str::contains("iterations must be at least"));
}

#[test]
fn fingerprint_is_stable_and_password_specific() {
    let tmp = TempDir::new().unwrap();

    let run = |password: &str| {
        let out = pwseal(&tmp)
            .args(["--iterations", "1000", "fingerprint"])
            .env("PWSEAL_PASSWORD", password)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).unwrap()
    };

    let a1 = run("shared secret");
    let a2 = run("shared secret");
    let b = run("other secret");
    assert_eq!(a1, a2);
    assert_ne!(a1, b);
    assert!(!a1.trim().is_empty());
}

#[test]
fn completions_for_unknown_shell_fail() {
    let tmp = TempDir::new().unwrap();
    pwseal(&tmp)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

#[test]
fn completions_for_bash_mention_binary() {
    let tmp = TempDir::new().unwrap();
    pwseal(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pwseal"));
}
