// SPDX-License-Identifier: MIT
//! Configuration for the stdout log exporter.
//!
//! A [`Config`] is assembled from a default value plus an ordered list of
//! [`ExportOption`]s. Options are folded left to right, so when two options
//! touch the same field the later one wins.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use otel_stdout_logs::config::{new_config, with_pretty_print, with_writer};
//! use otel_stdout_logs::writer::Destination;
//!
//! let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
//! let cfg = new_config([with_pretty_print(), with_writer(buf.clone())])?;
//! assert!(cfg.pretty_print());
//! assert_eq!(cfg.destination(), &Destination::from(buf));
//! # Ok::<(), anyhow::Error>(())
//! ```
use anyhow::Result;

use crate::writer::Destination;

/// Resolved exporter configuration.
///
/// Every field always holds a value; there is no "unset" state. Instances are
/// read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    destination: Destination,
    pretty_print: bool,
}

impl Config {
    /// Sink that exported logs are written to. Defaults to stdout.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Whether output is indented for humans instead of compact.
    pub fn pretty_print(&self) -> bool {
        self.pretty_print
    }
}

/// A single configuration override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOption {
    /// Replace the destination.
    Writer(Destination),
    /// Turn pretty-printing on. There is no way to turn it back off.
    PrettyPrint,
}

impl ExportOption {
    /// Produce the next configuration from `cfg`.
    pub fn apply(&self, cfg: Config) -> Config {
        match self {
            Self::Writer(destination) => Config {
                destination: destination.clone(),
                ..cfg
            },
            Self::PrettyPrint => Config {
                pretty_print: true,
                ..cfg
            },
        }
    }
}

/// Sets the export stream destination.
///
/// Accepts stdout, stderr, a [`std::fs::File`], any boxed writer, a shared
/// `Arc<Mutex<W>>`, or a [`Destination`] built with [`Destination::new`].
/// No validation is done here; a sink that cannot be written to only fails
/// when the exporter writes to it.
pub fn with_writer(destination: impl Into<Destination>) -> ExportOption {
    ExportOption::Writer(destination.into())
}

/// Sets the export stream format to pretty-printed output.
pub fn with_pretty_print() -> ExportOption {
    ExportOption::PrettyPrint
}

/// Build a configuration from the defaults (stdout, compact) and `options`.
///
/// # Errors
/// None today. The `Result` is kept so validation can be added without
/// breaking callers.
pub fn new_config<I>(options: I) -> Result<Config>
where
    I: IntoIterator<Item = ExportOption>,
{
    new_config_from(Config::default(), options)
}

/// Like [`new_config`], but folds `options` over an explicit starting value.
pub fn new_config_from<I>(base: Config, options: I) -> Result<Config>
where
    I: IntoIterator<Item = ExportOption>,
{
    Ok(options.into_iter().fold(base, |cfg, opt| opt.apply(cfg)))
}
