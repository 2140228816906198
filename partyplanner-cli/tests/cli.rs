use std::io::Write;
use std::process::{Command, Stdio};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "partyplanner-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_partyplanner")
}

#[test]
fn cli_decode_writes_json_summary() {
    let output_path = temp_path("decode");
    let build = format!("https://partyplanner.app/?b=An01{}&s=RY&a=y02", "_".repeat(17));
    let status = Command::new(exe())
        .args(["decode", &build, "--format", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json output");
    assert_eq!(value["notice"]["status"], "success");
    assert_eq!(value["specialization"], "Royal");
    assert_eq!(value["anointment_limit"], 15);
    assert_eq!(value["slots"][0]["uid"], "An01");
}

#[test]
fn cli_decode_fails_on_malformed_build() {
    let output = Command::new(exe())
        .args(["decode", "b=An0", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"error\""));
}

#[test]
fn cli_import_reads_stdin() {
    let mut child = Command::new(exe())
        .args(["import", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"Specialization: Royal\nCreature 2: Blood Frenzy / - / -\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait cli");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["slots"][3]["trait_name"], "Blood Frenzy");
    assert!(
        value["build_code"]
            .as_str()
            .expect("build code")
            .ends_with("&s=RY")
    );
}

#[test]
fn cli_export_writes_party_string() {
    let output_path = temp_path("export");
    let build = format!("b=An01{}", "_".repeat(17));
    let status = Command::new(exe())
        .args(["export", &build, "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Creature 1: Blood Frenzy / - / -"));
    assert!(content.contains("Creature 6: - / - / -"));
}

#[test]
fn cli_check_data_passes_for_bundled_assets() {
    let output = Command::new(exe())
        .args(["check-data", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["problems"], serde_json::json!([]));
    assert!(value["anointments"].as_u64().unwrap_or_default() >= 15);
}

#[test]
fn cli_reports_missing_data_dir() {
    let output = Command::new(exe())
        .args(["check-data", "--data-dir"])
        .arg(temp_path("no-such-dir"))
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load reference data"));
}

#[test]
fn cli_decode_rejects_input_without_build() {
    let output = Command::new(exe())
        .args(["decode", "x=1", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No build parameter"));
}
