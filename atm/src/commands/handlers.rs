use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;
use atm_core::Mode;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+C always quits; raw mode swallows the signal
    if event.is_ctrl('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: amount entry captures everything typed
    if let Screen::Account(account_state) = state.current_screen() {
        if account_state.input_mode == InputMode::AmountEntry {
            return handle_amount_entry_keys(event);
        }
    }

    // Priority 2: help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, state.current_screen(), key) {
            ('g', _, Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            ('g', Screen::Logs(..), Key::Char('g')) => Some(AppCommand::ScrollLogsToTop),
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),
        (_, Key::Char('q')) => Some(AppCommand::Quit),
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Account screen: mode selector
        (Screen::Account(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNextMode),
        (Screen::Account(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPreviousMode),
        (Screen::Account(..), Key::Char('d')) => {
            Some(AppCommand::SelectMode(Mode::Deposit.selector_value()))
        }
        (Screen::Account(..), Key::Char('c')) => {
            Some(AppCommand::SelectMode(Mode::CashBack.selector_value()))
        }
        (Screen::Account(..), Key::Char('x')) => {
            Some(AppCommand::SelectMode(Mode::Unselected.selector_value()))
        }

        // Account screen: open the amount form once a mode is chosen
        (Screen::Account(..), Key::Enter | Key::Char('i') | Key::Right | Key::Char('l'))
            if state.account.form_visible() =>
        {
            Some(AppCommand::EnterAmountEntry)
        }

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),
        (Screen::Logs(..), Key::Char('G')) => Some(AppCommand::ScrollLogsToBottom),
        (Screen::Logs(..), Key::Left | Key::Char('h') | Key::Esc) => {
            Some(AppCommand::NavigateBack)
        }

        _ => None,
    }
}

/// Keys accepted by the amount field, mirroring a numeric input
fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

fn handle_amount_entry_keys(event: KeyEvent) -> Option<AppCommand> {
    if event.is_ctrl('l') || event.is_ctrl('u') {
        return Some(AppCommand::ClearAmount);
    }

    match event.key {
        Key::Enter => Some(AppCommand::SubmitTransaction),
        Key::Esc => Some(AppCommand::ExitAmountEntry),
        Key::Backspace => Some(AppCommand::DeleteAmountChar),
        Key::Char(c) if !event.modifiers.ctrl && is_amount_char(c) => {
            Some(AppCommand::AppendAmountChar(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LogsState;

    fn press(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    fn in_amount_entry() -> AppState {
        let mut state = AppState::new();
        state.account.set_mode(Mode::Deposit);
        state.account_screen_mut().unwrap().input_mode = InputMode::AmountEntry;
        state
    }

    #[test]
    fn test_mode_shortcuts() {
        let state = AppState::new();
        assert_eq!(
            press(&state, Key::Char('d')),
            Some(AppCommand::SelectMode(Mode::Deposit.selector_value()))
        );
        assert_eq!(
            press(&state, Key::Char('c')),
            Some(AppCommand::SelectMode(Mode::CashBack.selector_value()))
        );
        assert_eq!(press(&state, Key::Down), Some(AppCommand::SelectNextMode));
        assert_eq!(press(&state, Key::Char('k')), Some(AppCommand::SelectPreviousMode));
    }

    #[test]
    fn test_enter_ignored_without_mode() {
        let state = AppState::new();
        assert_eq!(press(&state, Key::Enter), None);
    }

    #[test]
    fn test_enter_opens_form_with_mode() {
        let mut state = AppState::new();
        state.account.set_mode(Mode::CashBack);
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::EnterAmountEntry));
    }

    #[test]
    fn test_amount_entry_filters_characters() {
        let state = in_amount_entry();
        assert_eq!(
            press(&state, Key::Char('7')),
            Some(AppCommand::AppendAmountChar('7'))
        );
        assert_eq!(
            press(&state, Key::Char('.')),
            Some(AppCommand::AppendAmountChar('.'))
        );
        assert_eq!(press(&state, Key::Char('z')), None);
    }

    #[test]
    fn test_amount_entry_captures_command_keys() {
        let state = in_amount_entry();
        // 'q' and 'd' are plain text while typing, and neither is numeric
        assert_eq!(press(&state, Key::Char('q')), None);
        assert_eq!(press(&state, Key::Char('d')), None);
        assert_eq!(press(&state, Key::Enter), Some(AppCommand::SubmitTransaction));
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ExitAmountEntry));
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('l')), &state),
            Some(AppCommand::ClearAmount)
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let state = in_amount_entry();
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_g_sequences() {
        let mut state = AppState::new();
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::SetPendingKey('g')));

        state.pending_key = Some('g');
        assert_eq!(press(&state, Key::Char('l')), Some(AppCommand::NavigateToLogs));
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::ClearPendingKey));

        state.navigate_to(Screen::Logs(LogsState::default()));
        assert_eq!(press(&state, Key::Char('g')), Some(AppCommand::ScrollLogsToTop));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let mut state = AppState::new();
        state.help_visible = true;
        assert_eq!(press(&state, Key::Char('d')), None);
        assert_eq!(press(&state, Key::Esc), Some(AppCommand::ToggleHelp));
    }
}
