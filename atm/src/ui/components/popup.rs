//! Shared popup/modal base component.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::layouts;

/// Render a centered popup frame over `parent_area` and return the inner
/// area for content.
///
/// Whatever was drawn underneath is cleared first so the popup reads as a
/// modal layer.
///
/// # Arguments
/// * `size` - (width_percent, height_percent) of the parent area
/// * `title` - Border title, e.g. `" Help "`
/// * `border_style` - Usually `theme::accent_border_style()`
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
) -> Rect {
    let area = layouts::centered_popup(size.0, size.1, parent_area);

    // Wipe the screen content behind the popup
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}
