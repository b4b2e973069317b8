// src/cli/handlers.rs
use rand::Rng;
use std::error::Error;
use std::io::Write;

use crate::clipboard::ClipboardWriter;
use crate::generators::{entropy_bits, estimate_strength, generate_with};
use crate::models::{GenerationReport, GeneratorConfig};

// Handlers for one-shot CLI commands

pub fn build_report<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> GenerationReport {
    GenerationReport {
        password: generate_with(config, rng),
        length: config.length,
        strength: estimate_strength(config),
        entropy_bits: entropy_bits(config),
    }
}

pub fn handle_generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    count: usize,
    json: bool,
    rng: &mut R,
    out: &mut dyn Write,
) -> Result<Vec<GenerationReport>, Box<dyn Error>> {
    let reports: Vec<GenerationReport> = (0..count.max(1)).map(|_| build_report(config, rng)).collect();

    if json {
        if reports.len() == 1 {
            writeln!(out, "{}", serde_json::to_string_pretty(&reports[0])?)?;
        } else {
            writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
        }
    } else {
        for report in &reports {
            writeln!(out, "{}", report.password)?;
        }
    }

    log::info!("Generated {} password(s) of length {}", reports.len(), config.length);
    Ok(reports)
}

/// Copy one-shot output. Failure is reported but never fatal.
pub fn handle_copy(clipboard: &mut dyn ClipboardWriter, password: &str) -> bool {
    match clipboard.write_text(password) {
        Ok(()) => {
            log::info!("Password copied to clipboard");
            true
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            false
        }
    }
}

pub fn handle_strength(config: &GeneratorConfig, json: bool, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let strength = estimate_strength(config);
    let bits = entropy_bits(config);

    if json {
        let value = serde_json::json!({
            "length": config.length,
            "include_digits": config.include_digits,
            "include_symbols": config.include_symbols,
            "strength": strength,
            "entropy_bits": bits,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "{} ({} bits)", strength, bits)?;
    }

    Ok(())
}
