// src/ui/render.rs
use console::{style, Color, Style};

use crate::models::{StrengthLabel, ThemeMode};
use crate::ui::state::FormState;
use crate::ui::toast::ToastState;

pub const SEGMENTS: usize = 4;
const SEGMENT: &str = "━━━━━━━━";
const TOAST_TEXT: &str = "🚀 Password Copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFill {
    Alert,
    Caution,
    Success,
    Inactive,
}

/// Fill pattern of the strength bar for a label.
pub fn segment_fills(label: StrengthLabel) -> [SegmentFill; SEGMENTS] {
    let (filled, fill) = match label {
        StrengthLabel::Weak => (1, SegmentFill::Alert),
        StrengthLabel::Strong => (3, SegmentFill::Caution),
        StrengthLabel::Secure => (SEGMENTS, SegmentFill::Success),
    };

    let mut fills = [SegmentFill::Inactive; SEGMENTS];
    for slot in fills.iter_mut().take(filled) {
        *slot = fill;
    }
    fills
}

struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
    inactive: Color,
}

impl Palette {
    fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            // indigo-400 on slate-900
            ThemeMode::Dark => Palette {
                accent: Color::Color256(105),
                text: Color::White,
                muted: Color::Color256(245),
                inactive: Color::Color256(238),
            },
            // indigo-600 on white
            ThemeMode::Light => Palette {
                accent: Color::Color256(62),
                text: Color::Black,
                muted: Color::Color256(244),
                inactive: Color::Color256(252),
            },
        }
    }

    fn segment_color(&self, fill: SegmentFill) -> Color {
        match fill {
            SegmentFill::Alert => Color::Red,
            SegmentFill::Caution => Color::Yellow,
            SegmentFill::Success => Color::Green,
            SegmentFill::Inactive => self.inactive,
        }
    }
}

fn theme_icon(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Dark => "☀️",
        ThemeMode::Light => "🌙",
    }
}

fn feature_button(palette: &Palette, icon: &str, label: &str, active: bool) -> String {
    let text = format!("[ {} {} ]", icon, label.to_uppercase());
    if active {
        style(text).fg(palette.accent).bold().to_string()
    } else {
        style(text).fg(palette.muted).dim().to_string()
    }
}

pub fn strength_bar(theme: ThemeMode, label: StrengthLabel) -> String {
    let palette = Palette::for_theme(theme);
    segment_fills(label)
        .iter()
        .map(|fill| Style::new().fg(palette.segment_color(*fill)).apply_to(SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole form as a block of text for the terminal.
pub fn render_form(state: &FormState) -> String {
    let palette = Palette::for_theme(state.theme());
    let config = state.config();
    let label = state.strength();
    let mut out = Vec::new();

    if state.toast_state() == ToastState::Showing {
        out.push(style(format!("  {}  ", TOAST_TEXT)).white().on_color256(62).bold().to_string());
    } else {
        out.push(String::new());
    }
    out.push(String::new());

    out.push(format!(
        "{}    {}",
        style("Interior").fg(palette.text).bold(),
        theme_icon(state.theme())
    ));
    out.push(style("ADVANCED ENCRYPTION").fg(palette.accent).bold().to_string());
    out.push(String::new());

    out.push(format!("    {}    🔄", style(state.password()).fg(palette.accent).bold()));
    out.push(String::new());

    out.push(format!(
        "{}  {}",
        style("KEY LENGTH").fg(palette.muted).bold(),
        style(format!(" {} ", config.length)).fg(palette.accent).bold()
    ));
    out.push(format!(
        "{}  {}",
        feature_button(&palette, "0-9", "Numbers", config.include_digits),
        feature_button(&palette, "#&%", "Symbols", config.include_symbols)
    ));
    out.push(String::new());

    out.push(format!(
        "{}  {} ({} bits)",
        style("SECURITY STRENGTH").fg(palette.muted),
        style(label.to_string().to_uppercase()).fg(palette.muted).bold(),
        state.entropy_bits()
    ));
    out.push(strength_bar(state.theme(), label));

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::models::GeneratorConfig;
    use crate::ui::toast::DEFAULT_TOAST_DURATION;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use SegmentFill::{Alert, Caution, Inactive, Success};

    fn form(theme: ThemeMode) -> FormState {
        FormState::with_rng(
            GeneratorConfig::default(),
            theme,
            DEFAULT_TOAST_DURATION,
            Box::new(RecordingClipboard::default()),
            Box::new(ChaCha8Rng::seed_from_u64(5)),
        )
    }

    #[test]
    fn segment_patterns_follow_label() {
        assert_eq!(segment_fills(StrengthLabel::Weak), [Alert, Inactive, Inactive, Inactive]);
        assert_eq!(segment_fills(StrengthLabel::Strong), [Caution, Caution, Caution, Inactive]);
        assert_eq!(segment_fills(StrengthLabel::Secure), [Success; SEGMENTS]);
    }

    #[test]
    fn form_shows_password_length_and_label() {
        console::set_colors_enabled(false);
        let state = form(ThemeMode::Dark);
        let text = render_form(&state);

        assert!(text.contains(state.password()));
        assert!(text.contains("Interior"));
        assert!(text.contains(" 16 "));
        assert!(text.contains("SECURE (99 bits)"));
        assert!(text.contains("[ 0-9 NUMBERS ]"));
        assert!(text.contains("[ #&% SYMBOLS ]"));
        assert!(!text.contains(TOAST_TEXT));
    }

    #[test]
    fn theme_icon_flips_with_theme() {
        console::set_colors_enabled(false);
        assert!(render_form(&form(ThemeMode::Dark)).contains("☀️"));
        assert!(render_form(&form(ThemeMode::Light)).contains("🌙"));
    }

    #[test]
    fn bar_has_one_block_per_segment() {
        console::set_colors_enabled(false);
        let bar = strength_bar(ThemeMode::Light, StrengthLabel::Weak);
        assert_eq!(bar.matches(SEGMENT).count(), SEGMENTS);
    }

    #[tokio::test(start_paused = true)]
    async fn toast_line_appears_after_copy() {
        console::set_colors_enabled(false);
        let mut state = form(ThemeMode::Dark);
        state.copy();
        assert!(render_form(&state).contains(TOAST_TEXT));
    }
}
