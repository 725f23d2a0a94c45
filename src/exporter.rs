// SPDX-License-Identifier: MIT
//! The exporter that owns a resolved [`Config`].
use anyhow::Result;
use tracing::debug;

use crate::config::{new_config, Config, ExportOption};
use crate::writer::Destination;

/// Stdout log exporter.
///
/// Holds the configuration it was built with for its whole lifetime; the
/// configuration is dropped together with the exporter.
#[derive(Clone, Debug, Default)]
pub struct StdoutLogExporter {
    config: Config,
}

impl StdoutLogExporter {
    /// Build an exporter from the default configuration plus `options`.
    ///
    /// # Examples
    /// ```
    /// use otel_stdout_logs::config::with_pretty_print;
    /// use otel_stdout_logs::exporter::StdoutLogExporter;
    ///
    /// let exporter = StdoutLogExporter::new([with_pretty_print()])?;
    /// assert!(exporter.is_pretty_print());
    /// assert!(exporter.destination().is_stdout());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ExportOption>,
    {
        Ok(Self::from_config(new_config(options)?))
    }

    /// Wrap an already resolved configuration.
    pub fn from_config(config: Config) -> Self {
        debug!(
            pretty_print = config.pretty_print(),
            destination = %config.destination(),
            "stdout log exporter configured"
        );
        Self { config }
    }

    /// Configuration this exporter was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sink the exporter writes to.
    pub fn destination(&self) -> &Destination {
        self.config.destination()
    }

    /// Whether output is pretty-printed.
    pub fn is_pretty_print(&self) -> bool {
        self.config.pretty_print()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{with_pretty_print, with_writer};
    use std::sync::{Arc, Mutex};

    #[test]
    fn default_exporter_is_compact_stdout() {
        let exporter = StdoutLogExporter::default();
        assert!(exporter.destination().is_stdout());
        assert!(!exporter.is_pretty_print());
        assert_eq!(exporter.config(), &Config::default());
    }

    #[test]
    fn new_applies_options_in_order() {
        let first = Arc::new(Mutex::new(Vec::<u8>::new()));
        let second = Arc::new(Mutex::new(Vec::<u8>::new()));
        let exporter = StdoutLogExporter::new([
            with_writer(first),
            with_pretty_print(),
            with_writer(second.clone()),
        ])
        .expect("exporter");
        assert_eq!(exporter.destination(), &Destination::from(second));
        assert!(exporter.is_pretty_print());
    }

    #[test]
    fn construction_logs_resolved_config() {
        let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(Destination::from(buf.clone()))
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            StdoutLogExporter::new([with_pretty_print()]).expect("exporter");
        });
        let out = String::from_utf8(buf.lock().expect("lock").clone()).expect("utf8");
        assert!(out.contains("stdout log exporter configured"), "{out}");
        assert!(out.contains("pretty_print=true"), "{out}");
        assert!(out.contains("destination=stdout"), "{out}");
    }
}
