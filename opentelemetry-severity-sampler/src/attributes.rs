//! Span attributes carrying a [`Severity`].
//!
//! Producers attach a severity to a span by adding one of the key-values
//! built here to the attributes the span is started with:
//!
//! ```
//! use opentelemetry::trace::{Tracer, TracerProvider as _};
//! use opentelemetry_sdk::trace::SdkTracerProvider;
//! use opentelemetry_severity_sampler::attributes;
//!
//! let provider = SdkTracerProvider::builder().build();
//! let tracer = provider.tracer("example");
//! let _span = tracer
//!     .span_builder("charge card")
//!     .with_attributes([attributes::warn()])
//!     .start(&tracer);
//! ```
use crate::Severity;
use opentelemetry::{KeyValue, Value};

/// The attribute key holding a span's severity.
pub const SEVERITY: &str = "severity";

/// Severity assumed for spans that carry no usable severity attribute.
pub const DEFAULT_SEVERITY: Severity = Severity::INFO;

/// Builds the severity attribute for an arbitrary level.
pub fn severity(level: impl Into<Severity>) -> KeyValue {
    KeyValue::new(SEVERITY, level.into().as_i64())
}

/// Builds the severity attribute for [`Severity::TRACE`].
pub fn trace() -> KeyValue {
    severity(Severity::TRACE)
}

/// Builds the severity attribute for [`Severity::DEBUG`].
pub fn debug() -> KeyValue {
    severity(Severity::DEBUG)
}

/// Builds the severity attribute for [`Severity::INFO`].
pub fn info() -> KeyValue {
    severity(Severity::INFO)
}

/// Builds the severity attribute for [`Severity::WARN`].
pub fn warn() -> KeyValue {
    severity(Severity::WARN)
}

/// Builds the severity attribute for [`Severity::ERROR`].
pub fn error() -> KeyValue {
    severity(Severity::ERROR)
}

/// Builds the severity attribute for [`Severity::FATAL`].
pub fn fatal() -> KeyValue {
    severity(Severity::FATAL)
}

/// Returns the severity carried by `attributes`.
///
/// Only the first attribute keyed [`SEVERITY`] is considered. If it holds an
/// integer that integer is the severity. Any other value type, or no severity
/// attribute at all, yields [`DEFAULT_SEVERITY`].
pub fn effective_severity(attributes: &[KeyValue]) -> Severity {
    match attributes.iter().find(|kv| kv.key.as_str() == SEVERITY) {
        Some(KeyValue {
            value: Value::I64(level),
            ..
        }) => Severity::new(*level),
        _ => DEFAULT_SEVERITY,
    }
}
