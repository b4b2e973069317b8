// src/cli/menu.rs
use console::Term;
use inquire::error::InquireResult;
use inquire::{CustomType, InquireError, Select};
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::{ThemeMode, MAX_LENGTH, MIN_LENGTH};
use crate::ui::{render_form, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Copy,
    Regenerate,
    SetLength(usize),
    Shorter,
    Longer,
    ToggleDigits(bool),
    ToggleSymbols(bool),
    ToggleTheme(ThemeMode),
    Exit,
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Copy => write!(f, "📋  Copy to clipboard"),
            MenuAction::Regenerate => write!(f, "🔄  Regenerate"),
            MenuAction::SetLength(length) => write!(f, "📏  Key length ({})", length),
            MenuAction::Shorter => write!(f, "➖  Shorter"),
            MenuAction::Longer => write!(f, "➕  Longer"),
            MenuAction::ToggleDigits(enabled) => write!(f, "0-9 Numbers: {}", on_off(*enabled)),
            MenuAction::ToggleSymbols(enabled) => write!(f, "#&% Symbols: {}", on_off(*enabled)),
            MenuAction::ToggleTheme(ThemeMode::Dark) => write!(f, "☀️  Light mode"),
            MenuAction::ToggleTheme(ThemeMode::Light) => write!(f, "🌙  Dark mode"),
            MenuAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

/// Menu entries reflecting the current form.
pub fn menu_actions(state: &FormState) -> Vec<MenuAction> {
    let config = state.config();
    let mut actions = vec![
        MenuAction::Copy,
        MenuAction::Regenerate,
        MenuAction::SetLength(config.length),
    ];
    if config.length > MIN_LENGTH {
        actions.push(MenuAction::Shorter);
    }
    if config.length < MAX_LENGTH {
        actions.push(MenuAction::Longer);
    }
    actions.extend([
        MenuAction::ToggleDigits(config.include_digits),
        MenuAction::ToggleSymbols(config.include_symbols),
        MenuAction::ToggleTheme(state.theme()),
        MenuAction::Exit,
    ]);
    actions
}

/// Apply an action that needs no further input. Returns false on exit.
pub fn apply_action(state: &mut FormState, action: MenuAction) -> bool {
    match action {
        MenuAction::Copy => state.copy(),
        MenuAction::Regenerate => state.regenerate(),
        MenuAction::SetLength(length) => state.set_length(length),
        MenuAction::Shorter => state.nudge_length(-1),
        MenuAction::Longer => state.nudge_length(1),
        MenuAction::ToggleDigits(_) => state.toggle_digits(),
        MenuAction::ToggleSymbols(_) => state.toggle_symbols(),
        MenuAction::ToggleTheme(_) => state.toggle_theme(),
        MenuAction::Exit => return false,
    }
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthAnswer {
    Set(usize),
    Keep,
    Quit,
}

/// Esc keeps the current length, Ctrl+C closes the form.
pub fn length_answer(result: InquireResult<Option<usize>>) -> Result<LengthAnswer, InquireError> {
    match result {
        Ok(Some(length)) => Ok(LengthAnswer::Set(length)),
        Ok(None) | Err(InquireError::OperationCanceled) => Ok(LengthAnswer::Keep),
        Err(InquireError::OperationInterrupted) => Ok(LengthAnswer::Quit),
        Err(e) => Err(e),
    }
}

async fn prompt_length(current: usize) -> Result<LengthAnswer, Box<dyn Error>> {
    let result = tokio::task::spawn_blocking(move || {
        CustomType::<usize>::new("Key length:")
            .with_default(current)
            .with_help_message(&format!("{} to {}", MIN_LENGTH, MAX_LENGTH))
            .with_error_message("Please type a whole number")
            .prompt_skippable()
    })
    .await?;

    let answer = length_answer(result)?;
    if let LengthAnswer::Set(length) = answer {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            println!("⚠️ Length must be between {} and {}; using the nearest allowed value.", MIN_LENGTH, MAX_LENGTH);
        }
    }
    Ok(answer)
}

// The toast sits on the first row of the form; wipe it without disturbing the prompt.
fn erase_toast_line(term: &Term) -> io::Result<()> {
    term.write_str("\x1b7")?; // save cursor
    term.move_cursor_to(0, 0)?;
    term.clear_line()?;
    term.write_str("\x1b8") // restore cursor
}

fn draw(term: &Term, state: &FormState) {
    if let Err(e) = term.clear_screen() {
        log::debug!("Could not clear screen: {}", e);
    }
    println!("{}\n", render_form(state));
}

pub async fn run_cli_menu(mut state: FormState, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    let term = Term::stdout();
    log::info!("Interactive form opened");

    state.on_toast_hidden(Arc::new(|| {
        if let Err(e) = erase_toast_line(&Term::stdout()) {
            log::debug!("Could not erase toast: {}", e);
        }
    }));

    while !should_exit.load(Ordering::SeqCst) {
        draw(&term, &state);

        let options = menu_actions(&state);
        let selection_result = tokio::task::spawn_blocking(move || {
            Select::new("Choose an action:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
                .with_page_size(12)
                .prompt_skippable()
        })
        .await?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let action = match selection_result {
            Ok(Some(action)) => action,
            Ok(None) | Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => break,
            Err(e) => return Err(Box::new(e)),
        };

        let action = match action {
            MenuAction::SetLength(current) => match prompt_length(current).await? {
                LengthAnswer::Set(length) => MenuAction::SetLength(length),
                LengthAnswer::Keep => continue,
                LengthAnswer::Quit => break,
            },
            other => other,
        };

        if !apply_action(&mut state, action) {
            break;
        }
    }

    // Dropping the form cancels a pending toast timer.
    drop(state);
    log::info!("Interactive form closed");
    Ok(())
}
