use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{
    fmt::MakeWriter, prelude::__tracing_subscriber_SubscriberExt, EnvFilter, Registry,
};

/// Install the global tracing subscriber: bunyan-formatted JSON into `sink`,
/// filtered by `RUST_LOG` with `default_filter` as the fallback. `log`
/// events from dependencies are bridged into tracing.
pub fn init<Sink>(name: &str, default_filter: &str, sink: Sink) -> Result<(), String>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    LogTracer::init().map_err(|e| e.to_string())?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.into(), sink));
    set_global_default(subscriber).map_err(|e| e.to_string())
}
