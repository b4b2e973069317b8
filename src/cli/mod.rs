// src/cli/mod.rs
use clap::Parser;

use crate::core::config::Config;
use crate::models::{GeneratorConfig, ThemeMode, MAX_LENGTH, MIN_LENGTH};

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interior - random password form", long_about = None)]
pub struct Args {
    /// Password length
    #[arg(long, short, global = true, value_parser = clap::value_parser!(u16).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    pub length: Option<u16>,

    /// Leave digits out of the character set
    #[arg(long, global = true)]
    pub no_digits: bool,

    /// Leave symbols out of the character set
    #[arg(long, global = true)]
    pub no_symbols: bool,

    /// Start in light mode
    #[arg(long, global = true)]
    pub light: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Generator options: config defaults overridden by flags.
    pub fn generator_config(&self, config: &Config) -> GeneratorConfig {
        let defaults = config.generator_defaults();
        GeneratorConfig {
            length: self.length.map_or(defaults.length, usize::from),
            include_digits: defaults.include_digits && !self.no_digits,
            include_symbols: defaults.include_symbols && !self.no_symbols,
        }
    }

    pub fn theme(&self, config: &Config) -> ThemeMode {
        if self.light {
            ThemeMode::Light
        } else {
            config.theme
        }
    }
}
