//! Command-line integration tests for the `oracle` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small corpus and image list.
fn test_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bible.txt"),
        "The Lord is my shepherd (Psalm 23:1)\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("images.txt"),
        "https://img.example/field.jpg a field at dusk\n",
    )
    .unwrap();
    dir
}

fn oracle() -> Command {
    let mut cmd = Command::cargo_bin("oracle").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn dir_arg(dir: &TempDir) -> String {
    dir.path().to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// ask
// ---------------------------------------------------------------------------

#[test]
fn ask_prints_card() {
    let dir = test_data();
    oracle()
        .args(["ask", "Where am I going?", "-d", &dir_arg(&dir), "--pause-ms", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Literary Oracle")
                .and(predicate::str::contains("\u{201c}The Lord is my shepherd\u{201d}"))
                .and(predicate::str::contains("PSALM 23:1"))
                .and(predicate::str::contains("https://img.example/field.jpg"))
                .and(predicate::str::contains("a field at dusk").not()),
        );
}

#[test]
fn ask_with_pause_shows_turning_page() {
    let dir = test_data();
    oracle()
        .args(["ask", "Now?", "-d", &dir_arg(&dir), "--pause-ms", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Turning the page"));
}

#[test]
fn ask_empty_question_fails_gently() {
    let dir = test_data();
    oracle()
        .args(["ask", "", "-d", &dir_arg(&dir), "--pause-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("the door does not open"));
}

#[test]
fn ask_empty_corpus_is_data_error() {
    let dir = TempDir::new().unwrap();
    oracle()
        .args(["ask", "Anyone?", "-d", &dir_arg(&dir), "--pause-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data files are empty"));
}

#[test]
fn ask_html_format() {
    let dir = test_data();
    oracle()
        .args(["ask", "<b>bold</b>?", "-d", &dir_arg(&dir), "-f", "html"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<!DOCTYPE html>")
                .and(predicate::str::contains("src=\"https://img.example/field.jpg\""))
                .and(predicate::str::contains("&lt;b&gt;bold&lt;/b&gt;?")),
        );
}

#[test]
fn ask_json_format() {
    let dir = test_data();
    let output = oracle()
        .args(["ask", "Why?", "-d", &dir_arg(&dir), "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["question"], "Why?");
    assert_eq!(value["main_text"], "The Lord is my shepherd");
    assert_eq!(value["source_label"], "Psalm 23:1");
    assert_eq!(value["image_url"], "https://img.example/field.jpg");
}

#[test]
fn ask_writes_output_file() {
    let dir = test_data();
    let out = dir.path().join("card.html");
    oracle()
        .args([
            "ask",
            "Why?",
            "-d",
            &dir_arg(&dir),
            "-f",
            "html",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Written to"));
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("The Lord is my shepherd"));
}

#[test]
fn ask_text_to_file_is_plain_and_immediate() {
    let dir = test_data();
    let out = dir.path().join("card.txt");
    oracle()
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args([
            "ask",
            "Why?",
            "-d",
            &dir_arg(&dir),
            "--pause-ms",
            "10",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Turning the page").not());
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("The Lord is my shepherd"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn ask_rejects_unknown_format() {
    let dir = test_data();
    oracle()
        .args(["ask", "Why?", "-d", &dir_arg(&dir), "-f", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn ask_without_images_uses_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("poetry.txt"), "A line\n").unwrap();
    oracle()
        .args(["ask", "Why?", "-d", &dir_arg(&dir), "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://images.unsplash.com/photo-1518098268026-4e140130aa11?w=800",
        ));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_answers_each_line() {
    let dir = test_data();
    oracle()
        .args(["session", "-d", &dir_arg(&dir), "--pause-ms", "0"])
        .write_stdin("First question\n\nSecond question\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 quotations, 1 images")
                .and(predicate::str::contains("the door does not open"))
                .and(predicate::str::contains("PSALM 23:1").count(2))
                .and(predicate::str::contains("Curated for your serendipity.")),
        );
}

#[test]
fn session_single_letter_q_is_a_question() {
    let dir = test_data();
    oracle()
        .args(["session", "-d", &dir_arg(&dir), "--pause-ms", "0"])
        .write_stdin("q\n   \nQUIT\nnever asked\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("PSALM 23:1")
                .count(2)
                .and(predicate::str::contains("the door does not open").not()),
        );
}

#[test]
fn session_empty_corpus_keeps_going() {
    let dir = TempDir::new().unwrap();
    oracle()
        .args(["session", "-d", &dir_arg(&dir), "--pause-ms", "0"])
        .write_stdin("One\nTwo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("data files are empty").count(2));
}

// ---------------------------------------------------------------------------
// corpus
// ---------------------------------------------------------------------------

#[test]
fn corpus_lists_files() {
    let dir = test_data();
    oracle()
        .args(["corpus", "-d", &dir_arg(&dir)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("bible.txt")
                .and(predicate::str::contains("found"))
                .and(predicate::str::contains("sutra.txt"))
                .and(predicate::str::contains("missing"))
                .and(predicate::str::contains("1 quotations, 1 images")),
        );
}

#[test]
fn corpus_reports_default_image_and_empty_corpus() {
    let dir = TempDir::new().unwrap();
    oracle()
        .args(["corpus", "-d", &dir_arg(&dir)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default image")
                .and(predicate::str::contains("No quotations loaded")),
        );
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_sample_data() {
    let parent = TempDir::new().unwrap();
    oracle()
        .args(["init", "shelf"])
        .current_dir(parent.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created oracle data in shelf/"));

    for file in ["bible.txt", "poetry.txt", "images.txt"] {
        assert!(parent.path().join("shelf").join(file).exists());
    }

    oracle()
        .args(["ask", "Is it ready?", "-d", "shelf", "-f", "json"])
        .current_dir(parent.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"main_text\""));
}

#[test]
fn init_fails_if_dir_exists() {
    let parent = TempDir::new().unwrap();
    fs::create_dir(parent.path().join("shelf")).unwrap();

    oracle()
        .args(["init", "shelf"])
        .current_dir(parent.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
