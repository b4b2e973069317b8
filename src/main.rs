use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod clipboard;
mod core;
mod generators;
mod logging;
mod models;
mod ui;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::ui::FormState;

fn to_io_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    let message = format!("{}: {}", context, e);
    log::error!("{}", message);
    io::Error::new(io::ErrorKind::Other, message)
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    match logging::init(&config.log_directory, config.log_level) {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("⚠️ Logging disabled: {}", e),
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let generator_config = args.generator_config(&config);

    match args.command.as_ref() {
        Some(CliCommand::Generate { count, copy, json }) => {
            let mut stdout = io::stdout();
            let reports = cli::handlers::handle_generate(
                &generator_config,
                *count,
                *json,
                &mut rand::thread_rng(),
                &mut stdout,
            )
            .map_err(|e| to_io_error("Generation failed", e))?;

            if *copy {
                if let Some(last) = reports.last() {
                    let mut clipboard = SystemClipboard::new();
                    if cli::handlers::handle_copy(&mut clipboard, &last.password) {
                        eprintln!("🚀 Password Copied!");
                    } else {
                        eprintln!("⚠️ Could not copy to clipboard");
                    }
                }
            }
            return Ok(());
        }
        Some(CliCommand::Strength { json }) => {
            return cli::handlers::handle_strength(&generator_config, *json, &mut io::stdout())
                .map_err(|e| to_io_error("Strength estimate failed", e));
        }
        Some(CliCommand::Interactive) | None => {}
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        if let Err(e) = ctrlc::set_handler(move || {
            log::info!("Ctrl+C received. Closing form...");
            should_exit.store(true, Ordering::SeqCst);
        }) {
            log::warn!("Failed to set Ctrl+C handler: {}", e);
        }
    }

    let state = FormState::new(
        generator_config,
        args.theme(&config),
        config.toast_duration,
        Box::new(SystemClipboard::new()),
    );

    cli::menu::run_cli_menu(state, should_exit)
        .await
        .map_err(|e| to_io_error("Form error", e))?;

    Ok(())
}
