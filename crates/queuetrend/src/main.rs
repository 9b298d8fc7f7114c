//! Main entry point for queuetrend.

use std::io;
use std::process::ExitCode;

use queuetrend::Pipeline;
use queuetrend_common::{init_logging, LoggingConfig};
use queuetrend_config::ConfigLoader;
use tracing::{error, info};

fn main() -> ExitCode {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            // Configuration never loaded, so log with the defaults.
            let _ = init_logging(&LoggingConfig::default());
            error!(stage = %e.stage(), "{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("queuetrend: {e}");
        return ExitCode::FAILURE;
    }

    let pipeline = Pipeline::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match pipeline.run(&mut out) {
        Ok(aggregate) => {
            info!(
                points = aggregate.series.total_points(),
                times = aggregate.distinct_times.len(),
                "Analysis complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(stage = %e.stage(), "{e}");
            ExitCode::FAILURE
        }
    }
}
