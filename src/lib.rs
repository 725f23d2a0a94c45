// SPDX-License-Identifier: MIT
//! Configuration for an exporter that writes logs to an output stream.
//!
//! The exporter writes to standard output by default, compact unless
//! pretty-printing is switched on. Configuration is built from defaults plus an
//! ordered list of options:
//! * [`config`] – [`config::Config`], [`config::new_config`] and the option
//!   constructors [`config::with_writer`] / [`config::with_pretty_print`].
//! * [`writer`] – [`writer::Destination`], the sink handle (stdout or a shared
//!   custom writer).
//! * [`exporter`] – [`exporter::StdoutLogExporter`], which owns a resolved config.
//! * [`telemetry`] – wires a config into a `tracing` console subscriber.
//!
//! # Quick Start
//! ```no_run
//! use otel_stdout_logs::config::with_pretty_print;
//! use otel_stdout_logs::telemetry::{init_telemetry, TelemetryConfig};
//! fn main() -> anyhow::Result<()> {
//!     let cfg = TelemetryConfig::default().with_options([with_pretty_print()])?;
//!     let handle = init_telemetry(cfg)?;
//!     // business logic
//!     handle.shutdown()?;
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod exporter;
pub mod telemetry;
pub mod writer;

pub use config::{
    new_config, new_config_from, with_pretty_print, with_writer, Config, ExportOption,
};
pub use exporter::StdoutLogExporter;
pub use writer::Destination;

#[cfg(test)]
mod tests {
    use super::telemetry::{init_telemetry, TelemetryConfig};

    #[test]
    fn telemetry_init_works() {
        let handle = init_telemetry(TelemetryConfig::default().with_filter("info"))
            .expect("telemetry init");
        handle.shutdown().expect("shutdown");
    }
}
