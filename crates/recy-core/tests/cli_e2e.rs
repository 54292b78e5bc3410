//! End-to-end CLI tests for recy.
//!
//! Every test runs the real binary inside a [`Sandbox`] so configuration and
//! history never touch the developer's machine.

#[path = "support/sandbox.rs"]
mod sandbox;

use predicates::prelude::*;
use sandbox::{Sandbox, SAMPLE_SCAN};
use serde_json::Value;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ============================================================================
// resolve
// ============================================================================

mod resolve {
    use super::*;

    #[test]
    fn specific_item_in_json() {
        let sb = Sandbox::new();
        let output = sb
            .recy()
            .args(["resolve", "Plastic Bottle"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json[0]["label"], "Plastic Bottle");
        assert_eq!(json[0]["resolution"]["kind"], "specific_item");
        assert_eq!(json[0]["resolution"]["key"], "Bottle");
        assert_eq!(json[0]["recycling_info"]["category"], "Recyclable");
    }

    #[test]
    fn material_class_and_fallback() {
        let sb = Sandbox::new();
        let output = sb
            .recy()
            .args(["resolve", "Glass Jar", "Zebra"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json[0]["resolution"]["kind"], "material_class");
        assert_eq!(json[0]["resolution"]["key"], "Glass");
        assert_eq!(json[1]["resolution"]["kind"], "fallback");
        assert_eq!(json[1]["recycling_info"]["category"], "Unknown");
    }

    #[test]
    fn only_excluded_labels_exit_one() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["resolve", "Person", "Selfie"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\"excluded\""));
    }

    #[test]
    fn summary_format() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["-f", "summary", "resolve", "Battery", "Face"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "resolve: Battery=Special Disposal, Face=excluded",
            ));
    }
}

// ============================================================================
// scan
// ============================================================================

mod scan {
    use super::*;

    #[test]
    fn scan_file_ranks_labels() {
        let sb = Sandbox::new();
        let input = sb.write("scan.json", SAMPLE_SCAN);
        let output = sb
            .recy()
            .args(["scan", input.to_str().unwrap()])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        let names: Vec<&str> = json["labels"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Plastic Bottle", "Food Waste", "Battery", "Person"]);
        assert!(json["labels"][3]["recycling_info"].is_null());
        assert_eq!(json["summary"]["detected"], 4);
        assert_eq!(json["summary"]["excluded"], 1);
        assert!(json["scan_id"].as_str().unwrap().starts_with("scan-"));
    }

    #[test]
    fn scan_from_stdin_appends_history() {
        let sb = Sandbox::new();
        sb.recy()
            .arg("scan")
            .write_stdin(SAMPLE_SCAN)
            .assert()
            .success();

        let history = std::fs::read_to_string(sb.history_file()).unwrap();
        assert_eq!(history.lines().count(), 1);
        let record: Value = serde_json::from_str(history.lines().next().unwrap()).unwrap();
        assert_eq!(record["labels"][0]["name"], "Plastic Bottle");
        assert_eq!(record["catalog_fingerprint"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn no_history_flag_skips_append() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["--no-history", "scan"])
            .write_stdin(SAMPLE_SCAN)
            .assert()
            .success();
        assert!(!sb.history_file().exists());
    }

    #[test]
    fn bare_array_payload_is_accepted() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["--no-history", "-f", "summary", "scan"])
            .write_stdin(r#"[{"name": "Pizza Box", "confidence": 0.7}]"#)
            .assert()
            .success()
            .stdout(predicate::str::contains("scan: 1 labels"));
    }

    #[test]
    fn malformed_payload_exits_with_scan_input_error() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["--no-history", "scan"])
            .write_stdin(r#"{"labels": [{"name": "Cup", "confidence": 1.5}]}"#)
            .assert()
            .code(12)
            .stderr(predicate::str::contains("scan_input"));
    }

    #[test]
    fn only_excluded_labels_exit_one() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["--no-history", "scan"])
            .write_stdin(r#"[{"name": "Person", "confidence": 0.9}]"#)
            .assert()
            .code(1);
    }

    #[test]
    fn missing_input_file_exits_with_io_error() {
        let sb = Sandbox::new();
        let missing = sb.root().join("missing.json");
        sb.recy()
            .args(["scan", missing.to_str().unwrap()])
            .assert()
            .code(21);
    }

    #[test]
    fn min_confidence_from_settings() {
        let sb = Sandbox::new();
        sb.write("config/settings.json", r#"{"scan": {"min_confidence": 0.8}}"#);
        let output = sb
            .recy()
            .args(["--no-history", "scan"])
            .write_stdin(SAMPLE_SCAN)
            .output()
            .unwrap();
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["labels"].as_array().unwrap().len(), 3);
        assert_eq!(json["summary"]["below_confidence"], 1);
    }
}

// ============================================================================
// share
// ============================================================================

mod share {
    use super::*;

    #[test]
    fn share_to_stdout() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["share", "Battery"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Item: Battery"))
            .stdout(predicate::str::contains("Category: Special Disposal"))
            .stdout(predicate::str::contains("• "));
    }

    #[test]
    fn share_to_file_with_name() {
        let sb = Sandbox::new();
        let out = sb.root().join("share.txt");
        let output = sb
            .recy()
            .args(["share", "Plastic Bottle", "--name", "Soda bottle", "--out"])
            .arg(&out)
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(stdout_json(&output)["status"], "shared");

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("Item: Soda bottle\nCategory: Recyclable\n"));
    }

    #[test]
    fn share_to_unwritable_path_fails() {
        let sb = Sandbox::new();
        let out = sb.root().join("no-such-dir").join("share.txt");
        sb.recy()
            .args(["share", "Battery", "--out"])
            .arg(&out)
            .assert()
            .code(14);
    }

    #[test]
    fn share_excluded_label_exits_one() {
        let sb = Sandbox::new();
        sb.recy().args(["share", "Person"]).assert().code(1);
    }
}

// ============================================================================
// history
// ============================================================================

mod history {
    use super::*;

    #[test]
    fn list_returns_scans_oldest_first() {
        let sb = Sandbox::new();
        let dir = sb.root().join("custom-history");
        for payload in [
            r#"[{"name": "Battery", "confidence": 0.9}]"#,
            r#"[{"name": "Laptop", "confidence": 0.9}]"#,
        ] {
            sb.recy()
                .arg("--history-dir")
                .arg(&dir)
                .arg("scan")
                .write_stdin(payload)
                .assert()
                .success();
        }

        let output = sb
            .recy()
            .arg("--history-dir")
            .arg(&dir)
            .args(["history", "list"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json = stdout_json(&output);
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["labels"][0]["name"], "Battery");
        assert_eq!(records[1]["labels"][0]["name"], "Laptop");

        let limited = sb
            .recy()
            .arg("--history-dir")
            .arg(&dir)
            .args(["history", "list", "--limit", "1"])
            .output()
            .unwrap();
        let json = stdout_json(&limited);
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["labels"][0]["name"], "Laptop");
    }

    #[test]
    fn empty_history_lists_nothing() {
        let sb = Sandbox::new();
        let output = sb.recy().args(["history", "list"]).output().unwrap();
        assert!(output.status.success());
        assert_eq!(stdout_json(&output), serde_json::json!([]));
    }

    #[test]
    fn path_uses_data_dir() {
        let sb = Sandbox::new();
        let output = sb.recy().args(["history", "path"]).output().unwrap();
        assert!(output.status.success());
        assert_eq!(
            stdout_json(&output)["path"],
            sb.history_file().display().to_string()
        );
    }

    #[test]
    fn corrupted_history_exits_with_history_error() {
        let sb = Sandbox::new();
        sb.write("data/history/history.jsonl", "not json\n");
        sb.recy()
            .args(["history", "list"])
            .assert()
            .code(13)
            .stderr(predicate::str::contains("history"));
    }
}

// ============================================================================
// catalog and config
// ============================================================================

mod catalog {
    use super::*;

    #[test]
    fn check_builtin_catalog() {
        let sb = Sandbox::new();
        let output = sb.recy().args(["catalog", "check"]).output().unwrap();
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["specific_items"], 86);
        assert_eq!(json["material_classes"], 7);
    }

    #[test]
    fn list_materials_in_order() {
        let sb = Sandbox::new();
        let output = sb
            .recy()
            .args(["catalog", "list", "--materials"])
            .output()
            .unwrap();
        let json = stdout_json(&output);
        let materials = json["material_classes"].as_array().unwrap();
        assert_eq!(materials[0]["key"], "Plastic");
        assert!(json.get("specific_items").is_none());
    }

    #[test]
    fn overlay_replaces_and_extends() {
        let sb = Sandbox::new();
        sb.write(
            "config/catalog.json",
            r#"{
              "specific_items": [
                {"key": "Battery", "category": "Landfill", "instructions": "Local rule"},
                {"key": "Egg Carton", "category": "Compost", "instructions": "Tear up"}
              ],
              "exclusions": ["Robot"]
            }"#,
        );

        let output = sb
            .recy()
            .args(["resolve", "Battery", "Egg Carton", "Robot"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json[0]["recycling_info"]["category"], "Landfill");
        assert_eq!(json[1]["resolution"]["key"], "Egg Carton");
        assert!(json[2]["recycling_info"].is_null());
    }

    #[test]
    fn invalid_overlay_exits_with_config_error() {
        let sb = Sandbox::new();
        sb.write(
            "config/catalog.json",
            r#"{"specific_items": [{"key": "Thing", "category": "Trash", "instructions": "x"}]}"#,
        );
        sb.recy()
            .args(["resolve", "Battery"])
            .assert()
            .code(11)
            .stderr(predicate::str::contains("ERR_CONFIG"));
    }
}

mod config {
    use super::*;

    #[test]
    fn show_defaults() {
        let sb = Sandbox::new();
        let output = sb.recy().args(["config", "show"]).output().unwrap();
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json["settings"]["history"]["enabled"], true);
        assert!(json["snapshot"]["settings_path"].is_null());
    }

    #[test]
    fn validate_settings_file() {
        let sb = Sandbox::new();
        let path = sb.write("settings.json", r#"{"history": {"enabled": false}}"#);
        sb.recy()
            .args(["config", "validate"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"valid\""));
    }

    #[test]
    fn validate_rejects_bad_confidence() {
        let sb = Sandbox::new();
        let path = sb.write("settings.json", r#"{"scan": {"min_confidence": 2.0}}"#);
        sb.recy()
            .args(["config", "validate"])
            .arg(&path)
            .assert()
            .code(11);
    }

    #[test]
    fn validate_missing_file_is_args_error() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["config", "validate"])
            .arg(sb.root().join("catalog.json"))
            .assert()
            .code(10);
    }

    #[test]
    fn disabled_history_in_settings() {
        let sb = Sandbox::new();
        sb.write("config/settings.json", r#"{"history": {"enabled": false}}"#);
        sb.recy()
            .arg("scan")
            .write_stdin(SAMPLE_SCAN)
            .assert()
            .success();
        assert!(!sb.history_file().exists());
    }
}

// ============================================================================
// schema and version
// ============================================================================

mod schema {
    use super::*;

    #[test]
    fn list_includes_scan_report() {
        let sb = Sandbox::new();
        sb.recy()
            .args(["schema", "--list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ScanReport"));
    }

    #[test]
    fn single_schema_is_json() {
        let sb = Sandbox::new();
        let output = sb
            .recy()
            .args(["schema", "DetectedLabel"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert!(json["properties"]["name"].is_object());
    }

    #[test]
    fn unknown_schema_is_args_error() {
        let sb = Sandbox::new();
        sb.recy().args(["schema", "Plan"]).assert().code(10);
    }

    #[test]
    fn version_json() {
        let sb = Sandbox::new();
        let output = sb.recy().arg("version").output().unwrap();
        let json = stdout_json(&output);
        assert_eq!(json["recy_version"], env!("CARGO_PKG_VERSION"));
    }
}
