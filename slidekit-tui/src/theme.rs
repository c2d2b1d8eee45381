//! Neon-on-charcoal theme tokens for the slidekit TUI.
//!
//! # Color Palette
//! - **Accent**: electric cyan (filled track, handle, focus)
//! - **Positive**: neon green (committed `change` events)
//! - **Warning**: neon orange (cancelled drags, corrected config)
//! - **Negative**: hot pink (errors)
//! - **Neutral**: cool purple (tooltip, `input` events)
//! - **Muted**: steel blue (empty track, disabled state, hints)

use ratatui::style::{Color, Modifier, Style};

/// Color set used by every widget.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub const fn neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Track fill color; muted while the slider is disabled.
    pub fn track_fill(&self, disabled: bool) -> Color {
        if disabled {
            self.muted
        } else {
            self.accent
        }
    }
}

const THEME: Theme = Theme::neon();

/// Frame fill behind every row.
pub fn surface() -> Style {
    Style::default().bg(THEME.background)
}

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn secondary() -> Style {
    Style::default().fg(THEME.text_secondary)
}

pub fn handle(disabled: bool, dragging: bool) -> Style {
    let style = Style::default().fg(THEME.track_fill(disabled));
    if dragging {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    panel_border(active).add_modifier(Modifier::BOLD)
}
