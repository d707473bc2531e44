use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AccountScreenState, InputMode, Notice};
use crate::ui::{components::empty_state, theme, utils};
use atm_core::Account;

const PLACEHOLDER: &str = "Enter amount";
const FIELD_LABEL: &str = "Amount: ";

/// Render the transaction form for the selected mode.
///
/// The form is hidden until a mode is chosen. The submit button is drawn
/// disabled whenever the account reports the staged amount as invalid.
pub fn render_amount_form(
    f: &mut Frame,
    area: Rect,
    account: &Account,
    screen: &AccountScreenState,
    currency_symbol: &str,
) {
    if !account.form_visible() {
        empty_state::render_empty_state(
            f,
            area,
            "Transaction",
            "No action selected",
            Some("d: Deposit  c: Cash Back"),
        );
        return;
    }

    let editing = screen.input_mode == InputMode::AmountEntry;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", account.action_label()))
        .title_style(Style::default().fg(theme::mode_color(account.mode())))
        .border_style(if editing {
            theme::accent_border_style()
        } else {
            Style::default()
        });
    let inner = block.inner(area);

    let field = if screen.amount_input.is_empty() {
        Span::styled(PLACEHOLDER, theme::help_text_style())
    } else if editing {
        Span::styled(screen.amount_input.clone(), theme::form_field_focused_style())
    } else {
        Span::styled(screen.amount_input.clone(), theme::form_field_style())
    };

    let valid = account.is_valid();
    let mut lines = vec![
        Line::from(vec![Span::raw(FIELD_LABEL), field]),
        Line::from(""),
        Line::from(Span::styled(" Submit ", theme::submit_style(valid))),
        Line::from(""),
    ];

    if let Some(line) = feedback_line(account, screen, currency_symbol) {
        lines.push(line);
    }

    if !editing {
        lines.push(Line::from(Span::styled(
            "Enter: type an amount",
            theme::help_text_style(),
        )));
    }

    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);

    if editing {
        let typed = if screen.amount_input.is_empty() {
            0
        } else {
            screen.amount_input.chars().count() as u16
        };
        let x = inner.x + FIELD_LABEL.len() as u16 + typed;
        if x < inner.x + inner.width && inner.height > 0 {
            f.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

/// Outcome of the last submit, else a hint about the amount being typed
fn feedback_line(
    account: &Account,
    screen: &AccountScreenState,
    currency_symbol: &str,
) -> Option<Line<'static>> {
    match &screen.notice {
        Some(Notice::Applied(receipt)) => Some(Line::from(Span::styled(
            format!(
                "{} of {} applied",
                receipt.mode.label(),
                utils::fmt_currency(receipt.amount, currency_symbol)
            ),
            theme::success_style(),
        ))),
        Some(Notice::Rejected(validity)) => Some(Line::from(Span::styled(
            format!("Not submitted: {}", validity.message()),
            theme::error_style(),
        ))),
        None if !screen.amount_input.is_empty() => {
            let validity = account.validity();
            let style = if validity.is_valid() {
                theme::success_style()
            } else {
                theme::warning_style()
            };
            Some(Line::from(Span::styled(validity.message(), style)))
        }
        None => None,
    }
}
