//! Bottom help bar shared by every screen.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render the bordered key hint bar at the bottom of a screen.
///
/// While a multi-key sequence is in progress (e.g. the `g` of `g l`), the
/// pending key is shown ahead of the hints in the warning color so the
/// user knows the next key completes a command.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str, pending_key: Option<char>) {
    let mut spans = Vec::with_capacity(2);
    if let Some(key) = pending_key {
        spans.push(Span::styled(format!("{}-  ", key), theme::warning_style()));
    }
    spans.push(Span::styled(text, theme::help_text_style()));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}
