//! Structured error reporting.
//!
//! Validation failures surface as an [`ErrorReport`]: a fixed-shape record
//! identifying the reporting package, a numeric code, a symbolic name, a
//! message and a JSON params payload. Its string form is the contract —
//! seven `key: value` lines joined by newlines — and downstream tooling
//! matches on it, so the format must not drift.

use serde_json::Value;

/// Version of the report format itself, independent of any package version.
pub const LOGGER_VERSION: &str = "1.0.0";

/// A structured, self-identifying error record.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub logger_version: &'static str,
    pub package_name: &'static str,
    pub package_version: &'static str,
    pub code: u32,
    pub name: &'static str,
    pub msg: String,
    pub params: Value,
}

impl ErrorReport {
    /// Build a report attributed to `package_name`/`package_version`.
    pub fn new(
        package_name: &'static str,
        package_version: &'static str,
        code: u32,
        name: &'static str,
        msg: impl Into<String>,
        params: Value,
    ) -> Self {
        Self {
            logger_version: LOGGER_VERSION,
            package_name,
            package_version,
            code,
            name,
            msg: msg.into(),
            params,
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // serde_json::Value renders as compact JSON, same as the params
        // payload is expected on the last line.
        write!(
            f,
            "loggerVersion: {}\npackageName: {}\npackageVersion: {}\ncode: {}\nname: {}\nmsg: {}\nparams: {}",
            self.logger_version,
            self.package_name,
            self.package_version,
            self.code,
            self.name,
            self.msg,
            self.params,
        )
    }
}
