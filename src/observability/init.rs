//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to exported spans.
pub const SERVICE_NAME: &str = "photoseek";

/// File name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "photoseek-otlp.json";

/// Installs the global subscriber: `EnvFilter` from `config.trace_level`
/// feeding an OpenTelemetry layer that exports to
/// `~/.local/share/zellij/photoseek/photoseek-otlp.json`.
///
/// Does nothing if the data directory cannot be created. Only the first call
/// takes effect.
///
/// An unparseable `trace_level` falls back to `info`.
///
/// # Example
///
/// ```rust,no_run
/// use photoseek::observability::init_tracing;
/// use photoseek::Config;
///
/// let config = Config { trace_level: "photoseek=debug".to_string(), ..Default::default() };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
