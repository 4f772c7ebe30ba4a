use std::process::Command;

fn tessel_bin() -> String {
    std::env::var("CARGO_BIN_EXE_tessel").unwrap_or_else(|_| {
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/debug/tessel")
            .to_string_lossy()
            .to_string()
    })
}

#[test]
fn mix_json_stdout_is_pure_json() {
    let output = Command::new(tessel_bin())
        .args(["mix", "000000", "FFFFFF", "--steps", "2", "--json"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to spawn tessel mix");

    assert!(output.status.success(), "mix failed: {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).expect("stdout not utf-8");
    assert!(
        !stdout.contains('\u{1b}'),
        "stdout contaminated with ANSI escape codes: {stdout:?}"
    );

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is not valid JSON");
    let stops = value.as_array().expect("expected a JSON array");
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[0]["hex"], "#000000");
    assert_eq!(stops[1]["hex"], "#808080");
    assert_eq!(stops[2]["hex"], "#FFFFFF");
    assert_eq!(stops[1]["color"]["red"], 0.5);
}

#[test]
fn info_rejects_malformed_hex() {
    let output = Command::new(tessel_bin())
        .args(["info", "#GG0000"])
        .output()
        .expect("failed to spawn tessel info");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("stderr not utf-8");
    assert!(stderr.contains("neither a palette name nor a hex color"), "{stderr}");
}
