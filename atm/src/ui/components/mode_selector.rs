use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::theme;
use atm_core::Mode;

/// Render the action selector with the current mode highlighted
pub fn render_mode_selector(f: &mut Frame, area: Rect, current: Mode) {
    let items: Vec<ListItem> = Mode::OPTIONS
        .iter()
        .map(|mode| {
            let selected = *mode == current;
            let marker = if selected { "▸ " } else { "  " };
            let label = if mode.is_selected() {
                mode.label()
            } else {
                "(none)"
            };

            let style = if selected {
                theme::selection_style().fg(theme::mode_color(*mode))
            } else {
                Style::default()
            };

            ListItem::new(format!("{}{}", marker, label)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select an action below to continue "),
    );

    f.render_widget(list, area);
}
