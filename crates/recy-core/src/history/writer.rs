//! History log writer and reader with size-based rotation.

use super::record::ScanRecord;
use super::{resolve_history_dir, HistoryError, HISTORY_FILENAME};
use chrono::Utc;
use recy_common::schema::is_compatible;
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for the history writer.
#[derive(Debug, Clone)]
pub struct HistoryLogConfig {
    /// Rotate once the file reaches this many bytes.
    pub max_size_bytes: u64,
    /// Directory for history files; resolved from the environment when None.
    pub dir: Option<PathBuf>,
}

impl Default for HistoryLogConfig {
    fn default() -> Self {
        HistoryLogConfig {
            max_size_bytes: recy_config::settings::DEFAULT_HISTORY_MAX_BYTES,
            dir: None,
        }
    }
}

/// Append-only scan history.
pub struct HistoryLog {
    dir: PathBuf,
    path: PathBuf,
    max_size_bytes: u64,
    writer: Option<BufWriter<File>>,
}

impl HistoryLog {
    /// Open the history in the resolved directory, creating it if needed.
    pub fn open(config: HistoryLogConfig) -> Result<Self, HistoryError> {
        let dir = resolve_history_dir(config.dir.as_deref())?;

        std::fs::create_dir_all(&dir).map_err(|e| HistoryError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let path = dir.join(HISTORY_FILENAME);
        Ok(HistoryLog {
            dir,
            path,
            max_size_bytes: config.max_size_bytes,
            writer: None,
        })
    }

    /// Path of the active history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Append one record, rotating first if the file is full.
    pub fn append(&mut self, record: &ScanRecord) -> Result<(), HistoryError> {
        if self.should_rotate()? {
            self.rotate()?;
        }

        let line = record
            .to_jsonl()
            .map_err(|source| HistoryError::Serialization { source })?;

        self.ensure_writer_open()?;
        if let Some(ref mut writer) = self.writer {
            writeln!(writer, "{}", line).map_err(|e| HistoryError::Io {
                path: self.path.clone(),
                source: e,
            })?;
            writer.flush().map_err(|e| HistoryError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        }

        debug!(scan_id = %record.scan_id, path = %self.path.display(), "appended scan record");
        Ok(())
    }

    /// Rename the active file to `history.<timestamp>.jsonl`.
    pub fn rotate(&mut self) -> Result<PathBuf, HistoryError> {
        self.writer = None;

        let timestamp = Utc::now().format("%Y%m%d-%H%M%S").to_string();
        let mut rotated_path = self.dir.join(format!("history.{}.jsonl", timestamp));
        let mut n = 1;
        while rotated_path.exists() {
            rotated_path = self.dir.join(format!("history.{}-{}.jsonl", timestamp, n));
            n += 1;
        }

        std::fs::rename(&self.path, &rotated_path).map_err(|e| HistoryError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        info!(rotated = %rotated_path.display(), "rotated scan history");
        Ok(rotated_path)
    }

    /// Records in the active file, oldest first.
    pub fn read_current(&self) -> Result<Vec<ScanRecord>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_records(&self.path)
    }

    /// Records from rotated files and the active file, oldest first.
    pub fn read_all(&self) -> Result<Vec<ScanRecord>, HistoryError> {
        let mut records = Vec::new();
        for path in self.rotated_files()? {
            records.extend(read_records(&path)?);
        }
        records.extend(self.read_current()?);
        Ok(records)
    }

    /// Rotated history files, oldest first.
    pub fn rotated_files(&self) -> Result<Vec<PathBuf>, HistoryError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| HistoryError::Io {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| HistoryError::Io {
                path: self.dir.clone(),
                source: e,
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name != HISTORY_FILENAME && name.starts_with("history.") && name.ends_with(".jsonl")
            {
                files.push(entry.path());
            }
        }
        files.sort_by_key(|path| rotation_order(path));
        Ok(files)
    }

    fn should_rotate(&self) -> Result<bool, HistoryError> {
        if !self.path.exists() {
            return Ok(false);
        }

        let metadata = std::fs::metadata(&self.path).map_err(|e| HistoryError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(metadata.len() >= self.max_size_bytes)
    }

    fn ensure_writer_open(&mut self) -> Result<(), HistoryError> {
        if self.writer.is_some() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| HistoryError::Io {
                path: self.path.clone(),
                source: e,
            })?;

        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    /// Flush and drop the writer.
    pub fn close(&mut self) {
        if let Some(ref mut writer) = self.writer {
            let _ = writer.flush();
        }
        self.writer = None;
    }
}

impl Drop for HistoryLog {
    fn drop(&mut self) {
        self.close();
    }
}

/// Sort key for `history.<YYYYMMDD-HHMMSS>[-N].jsonl`.
fn rotation_order(path: &Path) -> (String, u32) {
    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix("history."))
        .and_then(|n| n.strip_suffix(".jsonl"))
        .unwrap_or_default();
    match stem.get(..15) {
        Some(timestamp) => {
            let n = stem
                .get(16..)
                .and_then(|n| n.parse().ok())
                .unwrap_or(0);
            (timestamp.to_string(), n)
        }
        None => (stem.to_string(), 0),
    }
}

#[derive(Deserialize)]
struct RecordHeader {
    schema_version: String,
}

/// Read every record in one history file. Blank lines are skipped; a record
/// from another major schema version is an error.
pub fn read_records(path: &Path) -> Result<Vec<ScanRecord>, HistoryError> {
    let file = File::open(path).map_err(|e| HistoryError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| HistoryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let parse_error = |e| HistoryError::Parse {
            path: path.to_path_buf(),
            line: line_num + 1,
            source: e,
        };

        // Version first: a newer layout may not parse as a ScanRecord.
        let header: RecordHeader = serde_json::from_str(&line).map_err(parse_error)?;
        if !is_compatible(&header.schema_version) {
            return Err(HistoryError::IncompatibleVersion {
                path: path.to_path_buf(),
                line: line_num + 1,
                version: header.schema_version,
            });
        }

        let record: ScanRecord = serde_json::from_str(&line).map_err(parse_error)?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use crate::scan::{ScanOptions, ScanPipeline};
    use recy_common::DetectedLabel;
    use tempfile::TempDir;

    fn record(name: &str) -> ScanRecord {
        let resolver = Resolver::builtin();
        let report = ScanPipeline::new(&resolver, ScanOptions::default())
            .run_labels(vec![DetectedLabel::new(name, 0.9)]);
        ScanRecord::from_report(&report, "fp")
    }

    fn open(dir: &Path, max_size_bytes: u64) -> HistoryLog {
        HistoryLog::open(HistoryLogConfig {
            max_size_bytes,
            dir: Some(dir.to_path_buf()),
        })
        .unwrap()
    }

    #[test]
    fn test_append_and_read_back() {
        let temp = TempDir::new().unwrap();
        let mut log = open(temp.path(), 1024 * 1024);
        log.append(&record("Bottle")).unwrap();
        log.append(&record("Battery")).unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].labels[0].name(), "Bottle");
        assert_eq!(records[1].labels[0].name(), "Battery");
        assert_eq!(records[0].catalog_fingerprint, "fp");
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let log = open(temp.path(), 1024);
        assert!(log.read_current().unwrap().is_empty());
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_rotation_keeps_all_records_in_order() {
        let temp = TempDir::new().unwrap();
        // Any non-empty file triggers rotation.
        let mut log = open(temp.path(), 1);
        log.append(&record("Bottle")).unwrap();
        log.append(&record("Glass")).unwrap();
        log.append(&record("Paper")).unwrap();

        assert_eq!(log.rotated_files().unwrap().len(), 2);
        assert_eq!(log.read_current().unwrap().len(), 1);

        let names: Vec<String> = log
            .read_all()
            .unwrap()
            .iter()
            .map(|r| r.labels[0].name().to_string())
            .collect();
        assert_eq!(names, vec!["Bottle", "Glass", "Paper"]);
    }

    #[test]
    fn test_rotation_order_handles_same_second_suffix() {
        let mut files = vec![
            PathBuf::from("history.20260101-120000-1.jsonl"),
            PathBuf::from("history.20260101-120000.jsonl"),
            PathBuf::from("history.20251231-235959.jsonl"),
        ];
        files.sort_by_key(|p| rotation_order(p));
        assert_eq!(
            files,
            vec![
                PathBuf::from("history.20251231-235959.jsonl"),
                PathBuf::from("history.20260101-120000.jsonl"),
                PathBuf::from("history.20260101-120000-1.jsonl"),
            ]
        );
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let temp = TempDir::new().unwrap();
        let mut log = open(temp.path(), 1024 * 1024);
        log.append(&record("Bottle")).unwrap();
        log.close();

        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{{ not json").unwrap();

        match read_records(log.path()).unwrap_err() {
            HistoryError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_newer_major_version_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut log = open(temp.path(), 1024 * 1024);
        log.append(&record("Bottle")).unwrap();
        log.close();

        let mut future = serde_json::to_value(record("Glass")).unwrap();
        future["schema_version"] = serde_json::json!("2.0.0");
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file, "{future}").unwrap();

        match read_records(log.path()).unwrap_err() {
            HistoryError::IncompatibleVersion { line, version, .. } => {
                assert_eq!(line, 2);
                assert_eq!(version, "2.0.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_major_newer_minor_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.jsonl");
        let mut minor = serde_json::to_value(record("Glass")).unwrap();
        minor["schema_version"] = serde_json::json!("1.3.0");
        std::fs::write(&path, format!("{minor}\n")).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].schema_version, "1.3.0");
    }
}
