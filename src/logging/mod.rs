// src/logging/mod.rs
use std::path::{Path, PathBuf};
use std::fs::{self, OpenOptions};
use std::io;
use chrono::Utc;
use log::LevelFilter;
use thiserror::Error;

const LOG_FILE_NAME: &str = "interior.log";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

pub struct LogFiles {
    log_dir: PathBuf,
    current_log_file: PathBuf,
    max_log_size: u64,        // Maximum size of a log file before rotation (in bytes)
    max_log_files: usize,     // Rotated files to keep alongside the current one
}

impl LogFiles {
    pub fn new(log_dir: PathBuf) -> Result<Self> {
        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        let current_log_file = log_dir.join(LOG_FILE_NAME);

        Ok(Self {
            log_dir,
            current_log_file,
            max_log_size: 1024 * 1024, // 1 MB
            max_log_files: 3,
        })
    }

    #[cfg(test)]
    pub fn with_limits(mut self, max_log_size: u64, max_log_files: usize) -> Self {
        self.max_log_size = max_log_size;
        self.max_log_files = max_log_files;
        self
    }

    pub fn current_log_file(&self) -> &Path {
        &self.current_log_file
    }

    // Rotate the current file if it has grown too large
    pub fn check_rotation(&self) -> Result<()> {
        let size = match fs::metadata(&self.current_log_file) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        if size > self.max_log_size {
            self.rotate_logs()?;
        }

        Ok(())
    }

    fn rotate_logs(&self) -> Result<()> {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S%3f");
        let rotated_log_file = self.log_dir.join(format!("interior-{}.log", timestamp));

        fs::rename(&self.current_log_file, &rotated_log_file)?;
        self.cleanup_old_logs()?;

        Ok(())
    }

    // Keep only the most recent rotated files
    fn cleanup_old_logs(&self) -> Result<()> {
        let mut rotated = Vec::new();

        for entry in fs::read_dir(&self.log_dir)? {
            let path = entry?.path();
            let is_rotated = path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.starts_with("interior-") && name.ends_with(".log"));

            if path.is_file() && is_rotated {
                rotated.push(path);
            }
        }

        // Timestamped names sort chronologically; newest first
        rotated.sort();
        rotated.reverse();

        for file in rotated.iter().skip(self.max_log_files) {
            fs::remove_file(file)?;
        }

        Ok(())
    }
}

/// Route the `log` facade to the log file. The terminal belongs to the form.
pub fn init(log_dir: &Path, level: LevelFilter) -> Result<PathBuf> {
    let files = LogFiles::new(log_dir.to_path_buf())?;
    files.check_rotation()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(files.current_log_file())?;

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(files.current_log_file().to_path_buf())
}
