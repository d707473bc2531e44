//! Centralized theme constants and style functions for consistent UI styling.

use ratatui::style::{Color, Modifier, Style};

use atm_core::Mode;

// =============================================================================
// Colors
// =============================================================================

/// Color for money coming in (deposits, valid states)
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for money going out (cash back, errors)
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Color for inactive or disabled elements
pub const COLOR_MUTED: Color = Color::DarkGray;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for warnings and status messages
pub const COLOR_WARNING: Color = Color::Yellow;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background for the amount field while typing
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of the balance banner
pub const STATUS_HEIGHT: u16 = 3;

/// Height of the mode selector (three options plus borders)
pub const SELECTOR_HEIGHT: u16 = 5;

/// Width of the left column holding the selector and form
pub const FORM_COLUMN_WIDTH: u16 = 40;

// =============================================================================
// Style Functions
// =============================================================================

pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn warning_style() -> Style {
    Style::default().fg(COLOR_WARNING)
}

pub fn error_style() -> Style {
    Style::default().fg(COLOR_NEGATIVE)
}

pub fn success_style() -> Style {
    Style::default().fg(COLOR_POSITIVE)
}

pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Submit button, enabled or greyed out
pub fn submit_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(COLOR_POSITIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_MUTED)
    }
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Deposits read green, cash back red
pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Deposit => COLOR_POSITIVE,
        Mode::CashBack => COLOR_NEGATIVE,
        Mode::Unselected => COLOR_MUTED,
    }
}
