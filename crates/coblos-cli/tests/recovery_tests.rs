use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_coblos(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coblos"))
        .args(args)
        .env("COBLOS_CONFIG_DIR", config_dir)
        .output()
        .expect("failed to execute process")
}

#[test]
fn test_config_corruption_recovery_integration() {
    let tmp_dir = TempDir::new().expect("failed to create temp dir");
    let config_dir = tmp_dir.path().join("coblos-config");
    fs::create_dir_all(&config_dir).expect("failed to create config dir");

    let config_path = config_dir.join("config.toml");
    fs::write(&config_path, "invalid toml content").expect("failed to write corrupted config");

    let output = run_coblos(&["config", "get", "server-url"], &config_dir);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "status: {:?}\nstderr: {}\nstdout: {}",
        output.status.code(),
        stderr,
        stdout
    );
    assert!(stderr.contains("Warning:"), "stderr: {}", stderr);
    assert!(stderr.contains("corrupted"));
    assert!(stderr.contains("config.toml.bak"));
    assert!(stdout.contains("not set"));

    assert!(config_dir.join("config.toml.bak").exists());
    assert!(!config_path.exists());
}

#[test]
fn test_config_set_get_roundtrip_masks_session() {
    let tmp_dir = TempDir::new().expect("failed to create temp dir");
    let config_dir = tmp_dir.path().join("coblos-config");

    let output = run_coblos(
        &["config", "set", "session", "eyJfZnJlc2giOmZhbHNlfQ.Zx"],
        &config_dir,
    );
    assert!(output.status.success());

    let output = run_coblos(&["config", "get", "session"], &config_dir);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "session: eyJfZn...Q.Zx");
}

#[test]
fn test_config_set_rejects_invalid_server_url() {
    let tmp_dir = TempDir::new().expect("failed to create temp dir");

    let output = run_coblos(&["config", "set", "server-url", "not a url"], tmp_dir.path());

    assert!(!output.status.success());
    assert!(!tmp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_path_honours_override() {
    let tmp_dir = TempDir::new().expect("failed to create temp dir");

    let output = run_coblos(&["config", "path"], tmp_dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(
        stdout.trim(),
        tmp_dir.path().join("config.toml").display().to_string()
    );
}
