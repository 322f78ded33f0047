//! Clique binary entry point. All logic lives in the library and crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use clique::cli::{Cli, Command};
use clique::commands;
use clique_app::config::load_settings;
use tracing::error;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    clique_core::logging::init()?;

    let project = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let mut settings = load_settings(&project);
    cli.apply_overrides(&mut settings);

    match &cli.command {
        None | Some(Command::Tui { .. }) => {
            let result = clique_tui::run(settings).await;
            if let Err(e) = &result {
                error!("Application error: {:?}", e);
                if let Ok(log_file) = clique_core::logging::get_current_log_file() {
                    eprintln!("Details in {}", log_file.display());
                }
            }
            result?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Submit(args)) => {
            let result = commands::submit(&settings, args).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(if result.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(Command::Posts) => {
            let posts = commands::posts(&settings).await?;
            println!("{}", serde_json::to_string_pretty(&posts)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Init) => {
            let path = commands::init(&project)?;
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
