use std::{fs, process::ExitCode};

use graphical_interface::AppConfig;
use logger::{Logger, LoggerError};
use tracing::{error, info};

const LOG_FILE_STEM: &str = "flight_reservation";

fn init_logging(config: &AppConfig) -> Result<(), LoggerError> {
    fs::create_dir_all(&config.log_dir)?;
    let logger = Logger::new(&config.log_dir, LOG_FILE_STEM)?;
    logger.install(&config.log_level)
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to start logging: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        points_per_booking = config.loyalty.points_per_booking,
        redeem_cost = config.loyalty.redeem_cost,
        "starting {}",
        config.window_title
    );

    match graphical_interface::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "reservation window failed");
            ExitCode::FAILURE
        }
    }
}
