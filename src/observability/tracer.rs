//! Tracer provider backed by a local OTLP JSON file.
//!
//! The plugin runs inside Zellij's WASM sandbox without network access, so
//! spans are exported synchronously to a rotating file on the host instead of
//! a collector.

use super::otlp_json::OtlpJson;
use super::rotating_file::{RotatingFile, RotationPolicy};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Instrumentation scope written into every batch.
pub const SCOPE_NAME: &str = "bookcase";

/// Span exporter writing one OTLP JSON document per batch.
#[derive(Debug)]
struct OtlpFileExporter {
    file: RotatingFile,
    encoder: OtlpJson,
    is_shutdown: bool,
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.encoder = OtlpJson::new(resource.clone(), SCOPE_NAME);
    }
}

/// Creates a tracer provider exporting every finished span to `file_path`.
///
/// Uses the simple (unbatched) span processor: the sandbox has no background
/// runtime to drive a batch processor.
#[must_use]
pub fn create_tracer_provider(
    file_path: PathBuf,
    policy: RotationPolicy,
    resource: Resource,
) -> TracerProvider {
    let exporter = OtlpFileExporter {
        file: RotatingFile::new(file_path, policy),
        encoder: OtlpJson::new(resource.clone(), SCOPE_NAME),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookcase-otlp.json");
        let provider = create_tracer_provider(
            path.clone(),
            RotationPolicy::default(),
            Resource::new(vec![KeyValue::new("service.name", "Bookcase")]),
        );

        provider.tracer(SCOPE_NAME).in_span("add_book", |_cx| {});
        drop(provider);

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "add_book");
        assert_eq!(span["spanId"].as_str().map(str::len), Some(16));
    }
}
