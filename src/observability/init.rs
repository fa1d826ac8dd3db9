//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros through `tracing-opentelemetry` into the file
//! exporter:
//!
//! ```text
//! tracing spans → OpenTelemetryLayer → TracerProvider → OtlpFileExporter → JSON lines
//! ```

use super::rotating_file::RotationPolicy;
use super::tracer::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "bookcase-otlp.json";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (e.g. `"debug"` or
/// `"bookcase=trace"`); an unparsable directive falls back to `info`. Traces
/// go to `~/.local/share/zellij/bookcase/bookcase-otlp.json` on the host.
///
/// Tracing is optional: if the data directory cannot be created nothing is
/// installed, and calling this twice leaves the first subscriber in place.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "Bookcase"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        RotationPolicy::default(),
        resource,
    );

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
