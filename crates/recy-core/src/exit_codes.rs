//! Exit codes for the `recy` CLI.
//!
//! Exit code ranges:
//! - 0-1: Operational outcomes (parse outcome from code, not output)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use recy_common::Error;

/// Exit codes for `recy` operations.
///
/// These codes are a stable contract for scripts. Changes require a major
/// version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    // ========================================================================
    // Operational Outcomes (0-1)
    // ========================================================================
    /// At least one label received guidance.
    Clean = 0,

    /// Every label was excluded, or there were no labels.
    NothingResolvable = 1,

    // ========================================================================
    // User / Environment Errors (10-19)
    // ========================================================================
    /// Invalid arguments
    ArgsError = 10,

    /// Settings or catalog overlay invalid
    ConfigError = 11,

    /// Vision payload malformed
    ScanInputError = 12,

    /// History unreadable or unwritable
    HistoryError = 13,

    /// Share sink failed
    ShareFailed = 14,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Labels resolved and nothing went wrong.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Not an error; communicates outcome only.
    pub fn is_operational(self) -> bool {
        (self as i32) < 10
    }

    /// Resolvable by the user (codes 10-19).
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (10..20).contains(&code)
    }

    /// Bug or environment failure (codes 20-29).
    pub fn is_internal_error(self) -> bool {
        let code = self as i32;
        code >= 20
    }

    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }

    /// Stable name for JSON output.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::NothingResolvable => "OK_NOTHING_RESOLVABLE",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::ScanInputError => "ERR_SCAN_INPUT",
            ExitCode::HistoryError => "ERR_HISTORY",
            ExitCode::ShareFailed => "ERR_SHARE",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }

    /// Exit code for a library error.
    pub fn for_error(err: &Error) -> ExitCode {
        match err {
            Error::InvalidCatalog(_) | Error::DuplicateCatalogKey { .. } => ExitCode::ConfigError,
            Error::InvalidScanInput { .. } => ExitCode::ScanInputError,
            Error::HistoryCorrupted(_) => ExitCode::HistoryError,
            Error::ShareFailed(_) => ExitCode::ShareFailed,
            Error::Io(_) => ExitCode::IoError,
            Error::Json(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
