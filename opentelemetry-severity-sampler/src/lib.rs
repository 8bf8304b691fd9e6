//! # OpenTelemetry Severity Sampler
//!
//! A [`ShouldSample`] implementation that gates spans on a numeric severity
//! attached to them when they are started.
//!
//! Spans carry their severity in the [`severity`](attributes::SEVERITY)
//! attribute. When a span starts, [`SeveritySampler`] compares that severity
//! with its threshold:
//!
//! * at or above the threshold, the decision is delegated to the wrapped
//!   sampler (`AlwaysOn` unless configured otherwise);
//! * below the threshold, the span is dropped.
//!
//! Spans without a severity, or whose severity is not an integer, count as
//! [`Severity::INFO`].
//!
//! ```
//! use opentelemetry::trace::{Span, Tracer, TracerProvider as _};
//! use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
//! use opentelemetry_severity_sampler::{attributes, Severity, SeveritySampler};
//!
//! let provider = SdkTracerProvider::builder()
//!     .with_sampler(SeveritySampler::new(Severity::WARN, Sampler::AlwaysOn))
//!     .build();
//! let tracer = provider.tracer("checkout");
//!
//! // dropped: info is below warn
//! let span = tracer.start("load cart");
//! assert!(!span.is_recording());
//!
//! // handed to AlwaysOn
//! let span = tracer
//!     .span_builder("payment declined")
//!     .with_attributes([attributes::error()])
//!     .start(&tracer);
//! assert!(span.is_recording());
//! ```
//!
//! ## Configuration
//!
//! [`SeveritySampler::builder`] takes its default threshold from the
//! `OTEL_TRACES_SEVERITY_THRESHOLD` environment variable, see [`config`].
//!
//! ## Crate Feature Flags
//!
//! * `internal-logs` (enabled by default): emit internal diagnostics through
//!   OpenTelemetry's internal logging.
//! * `logs`: convert `opentelemetry::logs::Severity` into [`Severity`].
//!
//! [`ShouldSample`]: opentelemetry_sdk::trace::ShouldSample
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(
    docsrs,
    feature(doc_cfg, doc_auto_cfg),
    deny(rustdoc::broken_intra_doc_links)
)]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/open-telemetry/opentelemetry-rust/main/assets/logo.svg"
)]
#![cfg_attr(test, deny(warnings))]

pub mod attributes;
pub mod config;
mod sampler;
mod severity;

pub use sampler::{SeveritySampler, SeveritySamplerBuilder};
pub use severity::{ParseSeverityError, Severity};
