//! End-to-end tests for the chpdis binary

use std::io::Write;
use std::process::Command;

use chp_core::ChipBuilder;
use tempfile::NamedTempFile;

fn chip_file() -> NamedTempFile {
    let mut b = ChipBuilder::new([0, 1, 0, 0, 0, 0, 0, 0]);
    b.and(0, 1, &[0x0004]).end(&[]);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&b.build()).unwrap();
    file
}

#[test]
fn test_stats_go_to_stderr() {
    let file = chip_file();
    let out = Command::new(env!("CARGO_BIN_EXE_chpdis"))
        .arg(file.path())
        .arg("--stats")
        .env_remove("CHPDIS_FORMAT")
        .env_remove("CHPDIS_INDENT")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stdout.starts_with("chip1 {\n"));
    assert!(stdout.ends_with("}\n"));
    assert!(!stdout.contains("Statistics"));
    assert!(stderr.contains("Statistics:"));
    assert!(stderr.contains("  Gates: 1 (AND 1, OR 0, XOR 0, NOT 0)"));
}

#[test]
fn test_decode_error_exit_status() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0, 0, 0, 0, 0, 0, 0, 0, 0x09]).unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_chpdis"))
        .arg(file.path())
        .env_remove("CHPDIS_FORMAT")
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown bytecode 0x09"));
}
