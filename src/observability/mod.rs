//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces land in `~/.local/share/zellij/photoseek/photoseek-otlp.json`
//! - The file rotates at 10 MiB, keeping 3 numbered backups
//! - Each line is a standalone OTLP JSON document
//! - The filter comes from the `trace_level` config option (default `info`)
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file span exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
