//! Isolated environment for driving the `recy` binary.
//!
//! Each sandbox owns a temp directory used for config lookup and history so
//! tests never read the developer's real configuration.

#![allow(dead_code)]
// Shared by several test binaries; not every test uses every helper.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        fs::create_dir_all(dir.path().join("data")).expect("create data dir");
        Sandbox { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join("data")
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir().join("history").join("history.jsonl")
    }

    /// Write a file relative to the sandbox root and return its path.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write sandbox file");
        path
    }

    /// A `recy` command with config and data lookups confined to the sandbox.
    pub fn recy(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("recy");
        cmd.env_remove("RECY_SETTINGS")
            .env_remove("RECY_CATALOG")
            .env_remove("RECY_LOG")
            .env_remove("RECY_LOG_FORMAT")
            .env_remove("RUST_LOG")
            .env("RECY_CONFIG_DIR", self.config_dir())
            .env("RECY_DATA", self.data_dir())
            .env("XDG_CONFIG_HOME", self.root().join("xdg-config"))
            .env("XDG_DATA_HOME", self.root().join("xdg-data"));
        cmd
    }
}

pub const SAMPLE_SCAN: &str = r#"{
  "labels": [
    {"name": "Person", "confidence": 0.99},
    {"name": "Food Waste", "confidence": 0.91},
    {"name": "Plastic Bottle", "confidence": 0.875},
    {"name": "Battery", "confidence": 0.62}
  ]
}"#;
