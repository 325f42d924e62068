use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_phasescrub")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "phasescrub.exe"
            } else {
                "phasescrub"
            });
            p
        })
}

#[test]
fn cli_run_settles_into_the_next_phase() {
    let out = std::process::Command::new(exe())
        .args(["run", "--phases", "2", "--script", "next,settle,next"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let last = stdout.lines().last().unwrap();
    assert!(last.starts_with("final phase=2"), "{last}");
    assert!(last.contains("AtUpperBound"), "{last}");
}

#[test]
fn cli_json_reports_parse() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let cfg_path = dir.join("scrub.json");
    std::fs::write(&cfg_path, r#"{ "base_duration_ms": 100, "tick_interval_ms": 25 }"#).unwrap();

    let out = std::process::Command::new(exe())
        .args(["run", "--phases", "2", "--json", "--script", "next settle prev"])
        .arg("--config")
        .arg(&cfg_path)
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let reports: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    // 4 forward frames, 4 reverse frames, plus the final report.
    assert_eq!(reports.len(), 9);
    let last = reports.last().unwrap();
    assert_eq!(last["active_phase"], 0);
    assert_eq!(last["state"], "AtLowerBound");
    assert_eq!(last["phases"], serde_json::json!([0.0, 0.0]));
}

#[test]
fn cli_rejects_bad_script() {
    let out = std::process::Command::new(exe())
        .args(["run", "--script", "next,jump"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown command 'jump'"), "{stderr}");
}
