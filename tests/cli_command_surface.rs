use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn roleping(home: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_roleping"));
    command
        .args(args)
        .env("HOME", home)
        .env_remove("ROLEPING_API_KEY")
        .env_remove("API_KEY")
        .env_remove("ROLEPING_SUGGEST_API_BASE")
        .env_remove("ROLEPING_WIZARD_SCRIPT_KEYS");
    command
}

fn assert_ok(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn write_fast_config(home: &Path) {
    fs::create_dir_all(home.join(".roleping")).expect("create config dir");
    fs::write(
        home.join(".roleping/config.yaml"),
        "verification:\n  delay_ms: 0\n",
    )
    .expect("write config");
}

#[test]
fn help_and_intervals_print_without_config() {
    let dir = tempdir().expect("tempdir");

    let help = assert_ok(&roleping(dir.path(), &["help"]).output().expect("run help"));
    assert!(help.contains("verify <handle>"));
    assert!(help.contains("ROLEPING_API_KEY"));

    let intervals = assert_ok(
        &roleping(dir.path(), &["intervals"])
            .output()
            .expect("run intervals"),
    );
    let lines: Vec<&str> = intervals.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("Every 30 Minutes"));
    assert!(lines[5].contains("1440"));
    assert!(lines[5].contains("Every Day"));
}

#[test]
fn verify_reports_success_and_failure_with_remediation() {
    let dir = tempdir().expect("tempdir");
    write_fast_config(dir.path());

    let ok = assert_ok(
        &roleping(dir.path(), &["verify", "validuser"])
            .output()
            .expect("run verify"),
    );
    assert!(ok.contains("handle=@validuser"));
    assert!(ok.contains("verification=ok"));

    let failed = assert_ok(
        &roleping(dir.path(), &["verify", "@bob"])
            .output()
            .expect("run verify"),
    );
    assert!(failed.contains("verification=failed"));
    assert!(failed.contains("appears to be invalid"));
    assert!(failed.contains("remediation=The most common issue is not messaging the bot first."));

    let raw = fs::read_to_string(dir.path().join(".roleping/logs/roleping.log")).expect("log");
    assert!(raw.contains("verification.succeeded"));
    assert!(raw.contains("verification.failed"));
}

#[test]
fn verify_without_handle_fails_with_usage() {
    let dir = tempdir().expect("tempdir");
    let output = roleping(dir.path(), &["verify", "@"])
        .output()
        .expect("run verify");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: roleping verify"));
}

#[test]
fn scripted_wizard_runs_headless_to_completion() {
    let dir = tempdir().expect("tempdir");
    let output = roleping(dir.path(), &["wizard"])
        .env(
            "ROLEPING_WIZARD_SCRIPT_KEYS",
            "text:alice,enter,right,enter,enter,q",
        )
        .output()
        .expect("run wizard");
    let stdout = assert_ok(&output);
    assert!(stdout.contains("wizard_exit=quit"));
    assert!(stdout.contains("step=done"));
    assert!(stdout.contains("handle=@alice"));
    assert!(stdout.contains("interval_minutes=120"));
    assert!(stdout.contains("interval=Every 2 Hours"));
    assert!(stdout.contains("roles=9"));
    assert!(stdout.contains("activations=1"));

    let raw = fs::read_to_string(dir.path().join(".roleping/logs/roleping.log")).expect("log");
    assert!(raw.contains("confirm -> activating (confirm)"));
    assert!(raw.contains("wizard.exit"));
}

#[test]
fn scripted_wizard_rejects_unknown_key_tokens() {
    let dir = tempdir().expect("tempdir");
    let output = roleping(dir.path(), &[])
        .env("ROLEPING_WIZARD_SCRIPT_KEYS", "enter,warp")
        .output()
        .expect("run wizard");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("warp"));
}

#[test]
fn unknown_command_fails_with_help() {
    let dir = tempdir().expect("tempdir");
    let output = roleping(dir.path(), &["launch"]).output().expect("run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown command `launch`"));
    assert!(stderr.contains("Commands:"));
}

#[test]
fn suggest_without_credential_returns_no_suggestions() {
    let dir = tempdir().expect("tempdir");
    let stdout = assert_ok(
        &roleping(dir.path(), &["suggest", "Data Engineer"])
            .output()
            .expect("run suggest"),
    );
    assert!(stdout.contains("role=Data Engineer"));
    assert!(stdout.contains("credential=missing"));
    assert!(stdout.contains("suggestions=0"));

    let raw = fs::read_to_string(dir.path().join(".roleping/logs/roleping.log")).expect("log");
    assert_eq!(raw.matches("suggestions.credential_missing").count(), 1, "log was:\n{raw}");
    assert!(!raw.contains("suggestions.fetch_failed"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join(".roleping")).expect("create config dir");
    fs::write(
        dir.path().join(".roleping/config.yaml"),
        "suggestions:\n  max_suggestions: 0\n",
    )
    .expect("write config");
    let output = roleping(dir.path(), &["verify", "validuser"])
        .output()
        .expect("run verify");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_suggestions"));
}
