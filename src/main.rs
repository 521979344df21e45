use std::process::ExitCode;
use taskforge::{commands::Cli, libs::messages::macros::is_debug_mode, msg_error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskforge=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            msg_error!(error);
            ExitCode::FAILURE
        }
    }
}
