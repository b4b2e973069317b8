// src/ui/state.rs
use rand::{RngCore, SeedableRng};
use std::time::Duration;

use crate::clipboard::ClipboardWriter;
use crate::generators::{entropy_bits, estimate_strength, generate_with};
use crate::models::{GeneratorConfig, StrengthLabel, ThemeMode, LENGTH_STEP};
use crate::ui::toast::{HideHook, ToastState, ToastTimer};

/// Everything the form shows. All mutations go through the named
/// transitions below; every change to the generator options regenerates
/// the password before returning.
pub struct FormState {
    config: GeneratorConfig,
    password: String,
    theme: ThemeMode,
    toast: ToastTimer,
    clipboard: Box<dyn ClipboardWriter>,
    rng: Box<dyn RngCore + Send>,
}

impl FormState {
    pub fn new(
        config: GeneratorConfig,
        theme: ThemeMode,
        toast_duration: Duration,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        Self::with_rng(
            config,
            theme,
            toast_duration,
            clipboard,
            Box::new(rand::rngs::StdRng::from_entropy()),
        )
    }

    pub fn with_rng(
        config: GeneratorConfig,
        theme: ThemeMode,
        toast_duration: Duration,
        clipboard: Box<dyn ClipboardWriter>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        let mut state = Self {
            config: GeneratorConfig {
                length: GeneratorConfig::clamp_length(config.length),
                ..config
            },
            password: String::new(),
            theme,
            toast: ToastTimer::new(toast_duration),
            clipboard,
            rng,
        };
        state.regenerate();
        state
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn strength(&self) -> StrengthLabel {
        estimate_strength(&self.config)
    }

    pub fn entropy_bits(&self) -> u32 {
        entropy_bits(&self.config)
    }

    pub fn toast_state(&self) -> ToastState {
        self.toast.state()
    }

    pub fn set_length(&mut self, length: usize) {
        let clamped = GeneratorConfig::clamp_length(length);
        if clamped != length {
            log::debug!("Requested length {} clamped to {}", length, clamped);
        }
        self.config.length = clamped;
        self.regenerate();
    }

    /// Move the length by whole slider steps.
    pub fn nudge_length(&mut self, steps: isize) {
        let target = self.config.length.saturating_add_signed(steps * LENGTH_STEP as isize);
        self.set_length(target);
    }

    pub fn toggle_digits(&mut self) {
        self.config.include_digits = !self.config.include_digits;
        self.regenerate();
    }

    pub fn toggle_symbols(&mut self) {
        self.config.include_symbols = !self.config.include_symbols;
        self.regenerate();
    }

    pub fn regenerate(&mut self) {
        self.password = generate_with(&self.config, &mut self.rng);
        log::debug!(
            "Generated password (length={}, digits={}, symbols={})",
            self.config.length,
            self.config.include_digits,
            self.config.include_symbols
        );
    }

    /// Register a callback run when the toast hides on its own.
    pub fn on_toast_hidden(&mut self, hook: HideHook) {
        self.toast.set_on_hide(hook);
    }

    /// Show the toast right away, then hand the value to the clipboard.
    /// A failed write is logged and otherwise ignored.
    ///
    /// The auto-hide countdown runs on the current tokio runtime; without
    /// one the toast is shown but stays up until the next copy.
    pub fn copy(&mut self) {
        self.toast.arm();

        match self.clipboard.write_text(&self.password) {
            Ok(()) => log::info!("Password copied to clipboard"),
            Err(e) => log::warn!("Clipboard copy failed: {}", e),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("Theme switched to {}", self.theme);
    }
}
