use opentelemetry::{
    global,
    trace::{Span, Tracer},
    KeyValue,
};
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use opentelemetry_severity_sampler::{attributes, Severity, SeveritySampler};
use std::error::Error;

fn init_tracer_provider() -> SdkTracerProvider {
    // Only warnings and above reach the ratio sampler.
    let sampler = SeveritySampler::builder()
        .with_threshold(Severity::WARN)
        .with_delegate(Sampler::TraceIdRatioBased(1.0))
        .build();
    println!("Using {}", sampler.description());

    SdkTracerProvider::builder()
        .with_sampler(Sampler::ParentBased(Box::new(sampler)))
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .build()
}

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let tracer_provider = init_tracer_provider();
    global::set_tracer_provider(tracer_provider.clone());

    let tracer = global::tracer("severity-gate-example");

    // Dropped: no severity means info.
    tracer.in_span("load config", |_cx| {});

    // Dropped: debug is below warn.
    let mut span = tracer
        .span_builder("cache lookup")
        .with_attributes([attributes::debug()])
        .start(&tracer);
    span.end();

    // Exported.
    let mut span = tracer
        .span_builder("upstream timeout")
        .with_attributes([
            attributes::warn(),
            KeyValue::new("upstream", "inventory-service"),
        ])
        .start(&tracer);
    span.end();

    tracer_provider.shutdown()?;
    Ok(())
}
