// SPDX-License-Identifier: MIT
use anyhow::Result;
use otel_stdout_logs::telemetry::{init_telemetry, TelemetryConfig};
use otel_stdout_logs::{with_pretty_print, StdoutLogExporter};
use tracing::{info, instrument};

#[instrument]
fn simulated_work() {
    info!(task = "simulated_work", "starting task");
    std::thread::sleep(std::time::Duration::from_millis(150));
    info!(task = "simulated_work", "completed task");
}

fn main() -> Result<()> {
    let exporter = StdoutLogExporter::new([with_pretty_print()])?;
    let telemetry = init_telemetry(TelemetryConfig {
        exporter: exporter.config().clone(),
        ..TelemetryConfig::default()
    })?;
    info!("application started");

    simulated_work();

    info!("shutting down");
    telemetry.shutdown()?;
    Ok(())
}
