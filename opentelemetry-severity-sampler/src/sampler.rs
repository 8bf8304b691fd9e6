use crate::{attributes, config, Severity};
use opentelemetry::{
    otel_debug,
    trace::{
        Link, SamplingDecision, SamplingResult, SpanKind, TraceContextExt, TraceId, TraceState,
    },
    Context, KeyValue,
};
use opentelemetry_sdk::trace::{Sampler, ShouldSample};
use std::fmt;

/// A sampler that gates spans on their [`Severity`].
///
/// The severity of a span is read from the [`severity`](attributes::SEVERITY)
/// attribute it is started with, defaulting to [`Severity::INFO`] when the
/// attribute is missing or not an integer. Spans at or above the threshold are
/// handed to the delegate sampler, which makes the actual sampling decision.
/// Spans below the threshold are dropped without consulting the delegate.
///
/// The gate never samples a span on its own authority, so it composes with
/// any [`ShouldSample`] implementation, including another `SeveritySampler`.
///
/// ## Examples
/// ```
/// use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
/// use opentelemetry_severity_sampler::{Severity, SeveritySampler};
///
/// // keep warnings and above, and of those only a tenth of the traces
/// let sampler = SeveritySampler::new(Severity::WARN, Sampler::TraceIdRatioBased(0.1));
/// let provider = SdkTracerProvider::builder()
///     .with_sampler(Sampler::ParentBased(Box::new(sampler)))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct SeveritySampler {
    threshold: Severity,
    delegate: Box<dyn ShouldSample>,
}

impl SeveritySampler {
    /// Create a sampler delegating spans at or above `threshold` to `delegate`.
    pub fn new<T>(threshold: impl Into<Severity>, delegate: T) -> Self
    where
        T: ShouldSample + 'static,
    {
        SeveritySampler::builder()
            .with_threshold(threshold)
            .with_delegate(delegate)
            .build()
    }

    /// Create a [`SeveritySamplerBuilder`] to configure a sampler.
    pub fn builder() -> SeveritySamplerBuilder {
        SeveritySamplerBuilder::default()
    }

    /// The lowest severity handed to the delegate.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// The sampler deciding on spans that pass the threshold.
    pub fn delegate(&self) -> &dyn ShouldSample {
        self.delegate.as_ref()
    }

    /// Human readable summary of this sampler, for diagnostics.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl Default for SeveritySampler {
    fn default() -> Self {
        SeveritySampler::builder().build()
    }
}

impl fmt::Display for SeveritySampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SeveritySampler(threshold={}, delegate={:?})",
            self.threshold.as_i64(),
            self.delegate
        )
    }
}

impl ShouldSample for SeveritySampler {
    fn should_sample(
        &self,
        parent_context: Option<&Context>,
        trace_id: TraceId,
        name: &str,
        span_kind: &SpanKind,
        attributes: &[KeyValue],
        links: &[Link],
    ) -> SamplingResult {
        if attributes::effective_severity(attributes) >= self.threshold {
            return self.delegate.should_sample(
                parent_context,
                trace_id,
                name,
                span_kind,
                attributes,
                links,
            );
        }

        SamplingResult {
            decision: SamplingDecision::Drop,
            attributes: Vec::new(),
            // dropping a span leaves the trace state as the parent had it
            trace_state: match parent_context {
                Some(ctx) => ctx.span().span_context().trace_state().clone(),
                None => TraceState::default(),
            },
        }
    }
}

/// Builder for [`SeveritySampler`].
///
/// The threshold starts out as [`OTEL_TRACES_SEVERITY_THRESHOLD`] when that is
/// set to a valid severity and as [`Severity::INFO`] otherwise. Without an
/// explicit delegate, spans passing the threshold are always sampled.
///
/// [`OTEL_TRACES_SEVERITY_THRESHOLD`]: crate::config::OTEL_TRACES_SEVERITY_THRESHOLD
#[derive(Debug)]
pub struct SeveritySamplerBuilder {
    threshold: Severity,
    delegate: Option<Box<dyn ShouldSample>>,
}

impl Default for SeveritySamplerBuilder {
    fn default() -> Self {
        SeveritySamplerBuilder {
            threshold: config::threshold_from_env().unwrap_or(attributes::DEFAULT_SEVERITY),
            delegate: None,
        }
    }
}

impl SeveritySamplerBuilder {
    /// Set the lowest severity handed to the delegate.
    pub fn with_threshold(mut self, threshold: impl Into<Severity>) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Set the sampler deciding on spans that pass the threshold.
    pub fn with_delegate<T: ShouldSample + 'static>(mut self, delegate: T) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Create the [`SeveritySampler`].
    pub fn build(self) -> SeveritySampler {
        let delegate = self
            .delegate
            .unwrap_or_else(|| Box::new(Sampler::AlwaysOn));
        otel_debug!(
            name: "SeveritySampler.Built",
            threshold = self.threshold.as_i64(),
            delegate = format!("{:?}", delegate),
        );
        SeveritySampler {
            threshold: self.threshold,
            delegate,
        }
    }
}
