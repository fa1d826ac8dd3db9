//! OpenTelemetry-based observability with file-based trace export.
//!
//! The plugin has no console and no network, so spans from the `tracing`
//! instrumentation are written as OTLP JSON lines to a rotating file under the
//! plugin's data directory.
//!
//! # Features
//!
//! - **File-Based Export**: `~/.local/share/zellij/bookcase/bookcase-otlp.json`
//! - **Automatic Rotation**: 10 MB per file, 3 numbered backups
//! - **OTLP Format**: One `resourceSpans` document per exported batch
//!
//! # Configuration
//!
//! The filter is the `trace_level` plugin option, default `"info"`. Store
//! mutations and dispatched intents log at `debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and span exporter
//! - [`otlp_json`]: OTLP JSON encoding
//! - [`rotating_file`]: Size-rotated trace file

mod init;
mod otlp_json;
mod rotating_file;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
pub use rotating_file::{RotatingFile, RotationPolicy};
