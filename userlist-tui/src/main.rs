mod app;
mod config;
mod error;
mod keys;
mod paths;
mod screen;
mod ui;

use std::fs::{self, File};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::info;
use simplelog::{Config, WriteLogger};
use userlist_lib::{ListView, UserListClient};

use config::Args;
use error::AppError;
use screen::Screen;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // The screen is restored before this prints.
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(args: Args) -> Result<(), AppError> {
    init_logging(&args)?;

    let client = UserListClient::builder()
        .url(&args.endpoint)
        .timeout(args.timeout())
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?;
    info!(
        "Starting against {} (quiet period {}ms, {} per page)",
        client.endpoint(),
        args.debounce_ms,
        args.limit
    );

    let view = ListView::new(Arc::new(client), args.view_config());
    let mut screen = Screen::new()?;
    app::run(view, &mut screen).await
}

/// Logs go to a file; stdout belongs to the UI.
fn init_logging(args: &Args) -> Result<(), AppError> {
    let path = match &args.log_file {
        Some(path) => path.clone(),
        None => {
            let dir = paths::cache_dir().ok_or(AppError::NoLogLocation)?;
            fs::create_dir_all(&dir)?;
            paths::rotate_logs(&dir);
            paths::log_file().ok_or(AppError::NoLogLocation)?
        }
    };

    let log_file = File::create(&path)?;
    WriteLogger::init(args.log_level, Config::default(), log_file)?;
    Ok(())
}
