// tests/cli_tests.rs
mod common;

use common::{corrupt_checksum, populated_save, setup_test_dir, write_raw};
use sm64_save_rs::*;
use std::ffi::OsStr;
use std::process::{Command, Output};

fn run(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sm64-save-convert"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_converts_into_new_file() {
    let dir = setup_test_dir();
    let input = write_raw(&dir, "in.eep", populated_save(Endianness::Big).as_bytes());
    let output = dir.path().join("out.eep");

    let result = run(&[input.as_os_str(), output.as_os_str()]);
    assert_eq!(result.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Validating input save file: OK"));
    assert!(stdout.contains("Input file endianness: big endian"));
    assert!(stdout.contains("Saved little endian save file to:"));

    assert_eq!(read_save(&output).unwrap(), populated_save(Endianness::Little));
    // input untouched
    assert_eq!(read_save(&input).unwrap(), populated_save(Endianness::Big));
}

#[test]
fn test_converts_in_place_without_outfile() {
    let dir = setup_test_dir();
    let input = write_raw(&dir, "in_place.eep", populated_save(Endianness::Little).as_bytes());

    let result = run(&[input.as_os_str()]);
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(read_save(&input).unwrap(), populated_save(Endianness::Big));
}

#[test]
fn test_corrupt_save_exits_one_and_writes_nothing() {
    let dir = setup_test_dir();
    let mut save = populated_save(Endianness::Big);
    corrupt_checksum(&mut save, RecordId::save_file(1, BlockCopy::Primary).unwrap());
    let input = write_raw(&dir, "corrupt.eep", save.as_bytes());
    let output = dir.path().join("never.eep");

    let result = run(&[input.as_os_str(), output.as_os_str()]);
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Failed"));
    assert!(stdout.contains("Try again after loading it once in the game"));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("primary save file 2: bad checksum"));
}

#[test]
fn test_corrupt_save_reported_once() {
    let dir = setup_test_dir();
    let mut save = populated_save(Endianness::Little);
    corrupt_checksum(&mut save, RecordId::save_file(3, BlockCopy::Backup).unwrap());
    let input = write_raw(&dir, "corrupt_once.eep", save.as_bytes());

    let result = run(&[input.as_os_str()]);
    assert_eq!(result.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert_eq!(stderr.matches("backup save file 4").count(), 1, "{}", stderr);
    assert!(!stderr.contains("Save validation failed"), "{}", stderr);
    assert!(!stderr.contains("WARN"), "{}", stderr);
}

#[test]
fn test_short_input_exits_one() {
    let dir = setup_test_dir();
    let input = write_raw(&dir, "short.eep", &[0u8; 64]);

    let result = run(&[input.as_os_str()]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("too small"));
}

#[test]
fn test_missing_arguments_exit_one() {
    let result = run(&[]);
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_check_mode_leaves_file_alone() {
    let dir = setup_test_dir();
    let input = write_raw(&dir, "check.eep", populated_save(Endianness::Little).as_bytes());

    let result = run(&[OsStr::new("--check"), input.as_os_str()]);
    assert_eq!(result.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&result.stdout).contains("Input file endianness: little endian"));
    assert_eq!(read_save(&input).unwrap(), populated_save(Endianness::Little));
}

#[test]
fn test_explicit_target_matching_source_copies_unchanged() {
    let dir = setup_test_dir();
    let input = write_raw(&dir, "same.eep", populated_save(Endianness::Big).as_bytes());
    let output = dir.path().join("same_out.eep");

    let result = run(&[OsStr::new("--to"), OsStr::new("big"), input.as_os_str(), output.as_os_str()]);
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(read_save(&output).unwrap(), populated_save(Endianness::Big));
}
