use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn cargo_bin() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_csv2vcard") {
        return PathBuf::from(path);
    }

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| repo_root().join("target"));
    let executable_name = format!("csv2vcard{}", std::env::consts::EXE_SUFFIX);
    let fallback = target_dir.join("debug").join(executable_name);

    if fallback.exists() {
        return fallback;
    }

    panic!(
        "CARGO_BIN_EXE_csv2vcard is not set and fallback binary was not found at {}",
        fallback.display()
    );
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn run_csv2vcard(dir: &Path, args: &[&str]) -> Output {
    Command::new(cargo_bin())
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run csv2vcard")
}

#[test]
fn test_command_writes_sample_contact() {
    let dir = TempDir::new().expect("temp dir");

    let output = run_csv2vcard(dir.path(), &["test", "-o", "sample"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FN;CHARSET=UTF-8:Forrest Gump"));
    assert!(stdout.contains("Test vCard created successfully"));

    let written =
        fs::read_to_string(dir.path().join("sample").join("gump_forrest.vcf")).expect("sample");
    assert!(written.contains("ORG;CHARSET=UTF-8:Bubba Gump Shrimp Co."));
}

#[test]
fn test_command_honours_version() {
    let dir = TempDir::new().expect("temp dir");

    let output = run_csv2vcard(dir.path(), &["test", "-V", "4.0"]);
    assert!(output.status.success());

    let written =
        fs::read_to_string(dir.path().join("export").join("gump_forrest.vcf")).expect("sample");
    assert!(written.contains("VERSION:4.0"));
    assert!(written.contains("FN:Forrest Gump"));
}

#[test]
fn mapping_command_prints_parseable_json() {
    let dir = TempDir::new().expect("temp dir");

    let output = run_csv2vcard(dir.path(), &["mapping"]);
    assert!(output.status.success());

    let document: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert!(document.get("last_name").is_some());
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().expect("temp dir");

    let output = run_csv2vcard(dir.path(), &["--config", "absent.yaml", "mapping"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.yaml"));
}
