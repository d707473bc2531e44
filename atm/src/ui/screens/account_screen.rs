use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::state::{AccountScreenState, AppState, InputMode};
use crate::ui::{
    components::{amount_form, empty_state, help_bar, mode_selector},
    layouts, theme, utils,
};
use atm_core::Account;

/// Rows of history shown, newest first
const HISTORY_LIMIT: usize = 50;

pub fn render(f: &mut Frame, state: &AppState, screen: &AccountScreenState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());
    let areas = layouts::account_layout(content_area);
    let account = &state.account;

    render_title(f, title_area);
    render_status(f, areas.status, account, &state.currency_symbol);
    mode_selector::render_mode_selector(f, areas.selector, account.mode());
    amount_form::render_amount_form(f, areas.form, account, screen, &state.currency_symbol);
    render_history(f, areas.history, account, &state.currency_symbol);
    help_bar::render_help_bar(f, help_area, help_text(screen), state.pending_key);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("ATM Application").style(theme::title_style());
    f.render_widget(title, area);
}

fn render_status(f: &mut Frame, area: Rect, account: &Account, currency_symbol: &str) {
    let status = Paragraph::new(account.status_line(currency_symbol))
        .style(theme::header_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}

fn render_history(f: &mut Frame, area: Rect, account: &Account, currency_symbol: &str) {
    let history = account.history();
    if history.is_empty() {
        empty_state::render_empty_state(f, area, "Transactions", "No transactions yet", None);
        return;
    }

    let rows: Vec<Row> = history
        .iter()
        .rev()
        .take(HISTORY_LIMIT)
        .map(|receipt| {
            Row::new(vec![
                receipt.sequence.to_string(),
                receipt.mode.label().to_string(),
                utils::fmt_receipt_amount(receipt, currency_symbol),
                utils::fmt_currency(receipt.balance_after, currency_symbol),
            ])
            .style(Style::default().fg(theme::mode_color(receipt.mode)))
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(10),
        Constraint::Min(12),
        Constraint::Min(12),
    ];

    let table = Table::new(rows, widths)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Transactions ({}) ", history.len())),
        )
        .header(
            Row::new(vec!["#", "Type", "Amount", "Balance"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

fn help_text(screen: &AccountScreenState) -> &'static str {
    match screen.input_mode {
        InputMode::AmountEntry => "Enter: submit | Backspace: delete | Ctrl+L: clear | Esc: done",
        InputMode::Normal => "j/k: action | d: deposit | c: cash back | Enter: amount | ?: help | q: quit",
    }
}
