// SPDX-License-Identifier: MIT
//! Console subscriber wiring for the stdout log exporter.
//!
//! This module turns an exporter [`Config`] into a `tracing` subscriber layer:
//!
//! * [`TelemetryConfig`] – filter directives plus the exporter configuration.
//! * [`layer`] – a formatting layer writing to the configured destination.
//! * [`init_telemetry`] – installs the layer as the global default subscriber.
//! * [`TelemetryHandle`] – flushes the destination on shutdown.
//!
//! Pretty-printing selects the multi-line `tracing_subscriber` pretty format;
//! otherwise events are written compactly, one per line.
//!
//! # Example
//! ```no_run
//! use otel_stdout_logs::config::with_pretty_print;
//! use otel_stdout_logs::telemetry::{init_telemetry, TelemetryConfig};
//! fn main() -> anyhow::Result<()> {
//!     let cfg = TelemetryConfig::default().with_options([with_pretty_print()])?;
//!     let handle = init_telemetry(cfg)?;
//!     // ... application logic ...
//!     handle.shutdown()?;
//!     Ok(())
//! }
//! ```
use std::io::IsTerminal;

use anyhow::{Context, Result};
use tracing::{info, Subscriber};
use tracing_subscriber::fmt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::config::{new_config_from, Config, ExportOption};
use crate::writer::Destination;

/// Configuration used when initializing telemetry.
///
/// The filter is sourced from `RUST_LOG` when set, otherwise `info`.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives, e.g. `info,my_crate=debug`.
    pub filter: String,
    /// Exporter configuration driving the console layer.
    pub exporter: Config,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_string()),
            exporter: Config::default(),
        }
    }
}

impl TelemetryConfig {
    /// Replace the filter directives.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Apply exporter options on top of the current exporter configuration.
    pub fn with_options<I>(mut self, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ExportOption>,
    {
        self.exporter = new_config_from(self.exporter, options)?;
        Ok(self)
    }
}

/// Handle allowing explicit flush of the console destination.
///
/// Dropping the handle without calling [`TelemetryHandle::shutdown`] leaves
/// whatever the sink buffers unflushed.
#[derive(Debug)]
pub struct TelemetryHandle {
    destination: Destination,
}

impl TelemetryHandle {
    /// Flush the destination the subscriber writes to.
    ///
    /// # Errors
    /// Returns the sink's I/O error if flushing fails.
    pub fn shutdown(self) -> Result<()> {
        self.destination
            .flush()
            .with_context(|| format!("flushing {}", self.destination))
    }
}

/// Build a formatting layer for `config`.
///
/// Console settings match a compact service log: no target, thread ids,
/// file and line. Colours are only used on an interactive stdout.
pub fn layer<S>(config: &Config) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let destination = config.destination().clone();
    let ansi = destination.is_stdout() && std::io::stdout().is_terminal();
    let base = fmt::layer()
        .with_writer(destination)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    if config.pretty_print() {
        base.pretty().boxed()
    } else {
        base.compact().boxed()
    }
}

/// Install the console layer as the global default subscriber.
///
/// # Errors
/// Fails if the filter directives do not parse or a global subscriber is
/// already installed.
///
/// # Examples
/// ```no_run
/// use otel_stdout_logs::telemetry::{init_telemetry, TelemetryConfig};
/// let handle = init_telemetry(TelemetryConfig::default()).expect("init");
/// // ... run logic ...
/// handle.shutdown().expect("shutdown");
/// ```
pub fn init_telemetry(cfg: TelemetryConfig) -> Result<TelemetryHandle> {
    let filter = EnvFilter::try_new(&cfg.filter)
        .with_context(|| format!("invalid log filter `{}`", cfg.filter))?;

    Registry::default()
        .with(filter)
        .with(layer(&cfg.exporter))
        .try_init()
        .context("installing global subscriber")?;

    info!(
        pretty_print = cfg.exporter.pretty_print(),
        destination = %cfg.exporter.destination(),
        "telemetry initialized"
    );

    Ok(TelemetryHandle {
        destination: cfg.exporter.destination().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{new_config, with_pretty_print, with_writer};
    use std::sync::{Arc, Mutex};

    fn capture(pretty: bool) -> String {
        let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
        let mut options = vec![with_writer(buf.clone())];
        if pretty {
            options.push(with_pretty_print());
        }
        let cfg = new_config(options).expect("config");
        let subscriber = Registry::default().with(layer(&cfg));
        tracing::subscriber::with_default(subscriber, || {
            info!(answer = 42, "captured event");
        });
        let bytes = buf.lock().expect("lock").clone();
        String::from_utf8(bytes).expect("utf8")
    }

    #[test]
    fn compact_layer_writes_one_line() {
        let out = capture(false);
        assert!(out.contains("captured event"), "{out}");
        assert!(out.contains("answer=42"), "{out}");
        assert_eq!(out.lines().count(), 1, "{out}");
    }

    #[test]
    fn pretty_layer_spans_multiple_lines() {
        let out = capture(true);
        assert!(out.contains("captured event"), "{out}");
        assert!(out.lines().count() > 1, "{out}");
    }

    #[test]
    fn options_layer_on_top_of_existing_exporter_config() {
        let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
        let cfg = TelemetryConfig::default()
            .with_filter("debug")
            .with_options([with_writer(buf.clone())])
            .expect("writer")
            .with_options([with_pretty_print()])
            .expect("pretty");
        assert_eq!(cfg.filter, "debug");
        assert_eq!(cfg.exporter.destination(), &Destination::from(buf));
        assert!(cfg.exporter.pretty_print());
    }

    #[test]
    fn invalid_filter_is_rejected_before_install() {
        let cfg = TelemetryConfig::default().with_filter("otel_stdout_logs=loudest");
        let err = init_telemetry(cfg).expect_err("bad filter");
        assert!(err.to_string().contains("invalid log filter"), "{err}");
    }

    #[test]
    fn shutdown_flushes_destination() {
        let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
        let handle = TelemetryHandle {
            destination: Destination::from(buf),
        };
        handle.shutdown().expect("shutdown");
    }
}
