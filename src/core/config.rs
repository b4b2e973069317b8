// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{GeneratorConfig, ThemeMode};
use crate::ui::toast::DEFAULT_TOAST_DURATION;

// Configuration for the password form
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_digits: bool,
    pub default_include_symbols: bool,

    // Presentation
    pub theme: ThemeMode,
    pub toast_duration: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            // Password Generation
            default_password_length: generator.length,
            default_include_digits: generator.include_digits,
            default_include_symbols: generator.include_symbols,

            // Presentation
            theme: ThemeMode::Dark,
            toast_duration: DEFAULT_TOAST_DURATION,

            // Logging
            log_level: LevelFilter::Info,
            log_directory: PathBuf::from("./logs"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());

        if env::var("LOG_DIRECTORY").is_err() {
            if let Some(dir) = crate::utils::get_app_data_dir() {
                config.log_directory = dir.join("logs");
            }
        }

        config
    }

    // Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) => config.default_password_length = GeneratorConfig::clamp_length(length),
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}", val, config.default_password_length),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_DIGITS") {
            if let Some(include) = parse_bool(&val) {
                config.default_include_digits = include;
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SYMBOLS") {
            if let Some(include) = parse_bool(&val) {
                config.default_include_symbols = include;
            }
        }

        // Presentation
        if let Some(theme) = lookup("THEME") {
            match theme.to_lowercase().as_str() {
                "dark" => config.theme = ThemeMode::Dark,
                "light" => config.theme = ThemeMode::Light,
                _ => log::warn!("Unknown theme '{}', using {}", theme, config.theme),
            }
        }

        if let Some(val) = lookup("TOAST_DURATION_MS") {
            if let Ok(ms) = val.trim().parse::<u64>() {
                config.toast_duration = Duration::from_millis(ms);
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(dir) = lookup("LOG_DIRECTORY") {
            config.log_directory = PathBuf::from(dir);
        }

        config
    }

    pub fn generator_defaults(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.default_password_length,
            include_digits: self.default_include_digits,
            include_symbols: self.default_include_symbols,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
