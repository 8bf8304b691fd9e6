//! Environment configuration for the severity sampler.
use crate::Severity;
use opentelemetry::otel_warn;
use std::env;

/// Environment variable holding the default severity threshold.
///
/// Accepts a level name (`trace`, `debug`, `info`, `warn`, `error`, `fatal`)
/// or an integer.
pub const OTEL_TRACES_SEVERITY_THRESHOLD: &str = "OTEL_TRACES_SEVERITY_THRESHOLD";

/// Reads the threshold from [`OTEL_TRACES_SEVERITY_THRESHOLD`].
///
/// Returns `None` if the variable is unset or cannot be parsed.
pub fn threshold_from_env() -> Option<Severity> {
    let raw = env::var(OTEL_TRACES_SEVERITY_THRESHOLD).ok()?;
    match raw.parse::<Severity>() {
        Ok(threshold) => Some(threshold),
        Err(err) => {
            otel_warn!(
                name: "SeveritySampler.Config.InvalidThreshold",
                message = format!(
                    "{} could not be parsed: {}. Falling back to default threshold: {}",
                    OTEL_TRACES_SEVERITY_THRESHOLD,
                    err,
                    crate::attributes::DEFAULT_SEVERITY
                ),
            );
            None
        }
    }
}
