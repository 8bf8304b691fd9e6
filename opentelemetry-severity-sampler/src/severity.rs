//! Severity levels used to gate span sampling.
//!
//! The scale follows the [severity numbers] of the OpenTelemetry log data
//! model. Only the first number of each range is named here; the gaps leave
//! room for the `2..4` sub-levels without renumbering.
//!
//! [severity numbers]: https://github.com/open-telemetry/opentelemetry-specification/blob/main/specification/logs/data-model.md#field-severitynumber
use std::fmt;
use std::str::FromStr;

/// A numeric severity attached to a span.
///
/// Severities are compared numerically. Any `i64` is a valid severity, values
/// outside the named levels simply sit between (or beyond) them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(i64);

impl Severity {
    /// Severity was not set.
    pub const UNDEFINED: Severity = Severity(0);
    /// Fine-grained debugging information.
    pub const TRACE: Severity = Severity(1);
    /// Debugging information.
    pub const DEBUG: Severity = Severity(5);
    /// Informational events. Spans without a severity are treated as `INFO`.
    pub const INFO: Severity = Severity(9);
    /// Warnings.
    pub const WARN: Severity = Severity(13);
    /// Errors.
    pub const ERROR: Severity = Severity(17);
    /// Fatal errors.
    pub const FATAL: Severity = Severity(21);

    /// Create a severity from its numeric value.
    pub const fn new(value: i64) -> Self {
        Severity(value)
    }

    /// The numeric value of this severity.
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// The level name, if this severity is one of the named levels.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("UNDEFINED"),
            1 => Some("TRACE"),
            5 => Some("DEBUG"),
            9 => Some("INFO"),
            13 => Some("WARN"),
            17 => Some("ERROR"),
            21 => Some("FATAL"),
            _ => None,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::INFO
    }
}

impl From<i64> for Severity {
    fn from(value: i64) -> Self {
        Severity(value)
    }
}

impl From<Severity> for i64 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

#[cfg(feature = "logs")]
impl From<opentelemetry::logs::Severity> for Severity {
    fn from(severity: opentelemetry::logs::Severity) -> Self {
        // log record severity numbers share this scale
        Severity(severity as i64)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Error returned when a string is neither a level name nor an integer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid severity '{input}', expected a level name (trace, debug, info, warn, error, fatal) or an integer")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let named = match trimmed.to_ascii_lowercase().as_str() {
            "undefined" => Some(Severity::UNDEFINED),
            "trace" => Some(Severity::TRACE),
            "debug" => Some(Severity::DEBUG),
            "info" => Some(Severity::INFO),
            "warn" | "warning" => Some(Severity::WARN),
            "error" => Some(Severity::ERROR),
            "fatal" => Some(Severity::FATAL),
            _ => None,
        };
        if let Some(severity) = named {
            return Ok(severity);
        }
        trimmed
            .parse::<i64>()
            .map(Severity)
            .map_err(|_| ParseSeverityError {
                input: s.to_string(),
            })
    }
}
