//! Process entry point.
//!
//! # Responsibility
//! - Load configuration, start logging, and run the startup sequence once.
//! - Map the outcome to the process exit code.
//!
//! Command-line arguments are accepted and ignored.

use log::{error, info};
use ls_core::{init_logging, run_startup, AppConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ls_app: invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Seeding still runs when the log directory is unusable.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("ls_app: logging disabled: {err}");
    }

    info!(
        "event=startup module=cli status=start version={}",
        ls_core::core_version()
    );

    let code = match run_startup(&config) {
        Ok(()) => {
            info!("event=startup module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=startup module=cli status=error error={err}");
            eprintln!("ls_app: {err}");
            ExitCode::FAILURE
        }
    };

    // Buffered file writes are not flushed when statics are torn down.
    log::logger().flush();
    code
}
