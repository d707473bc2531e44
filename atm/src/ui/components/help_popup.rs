use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Account(..) => {
            items.push(("↑/k", "Previous action"));
            items.push(("↓/j", "Next action"));
            items.push(("d", "Select Deposit"));
            items.push(("c", "Select Cash Back"));
            items.push(("x", "Clear the selected action"));
            items.push(("Enter/i", "Type an amount for the selected action"));
            items.push(("", ""));
            items.push(("--- Amount ---", ""));
            items.push(("0-9 . -", "Type the amount"));
            items.push(("Backspace", "Delete last character"));
            items.push(("Ctrl+L", "Clear the amount"));
            items.push(("Enter", "Submit (only when the amount is valid)"));
            items.push(("Esc", "Stop editing"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
            items.push(("h/←/Esc", "Back to the account"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("g then l", "Go to logs"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));
    items.push(("Ctrl+C", "Quit from anywhere"));

    items
}
