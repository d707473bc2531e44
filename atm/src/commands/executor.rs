use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;
use atm_core::{AccountEvent, Mode};

/// Longest amount text the form will hold
pub const MAX_AMOUNT_INPUT_LEN: usize = 24;

const LOG_PAGE_SIZE: usize = 20;

/// Apply a command to the app state.
///
/// Commands that reach the account return the transition it reported, after
/// the view state has been reduced against it.
pub fn execute_command(command: AppCommand, state: &mut AppState) -> Option<AccountEvent> {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    let event = match command {
        AppCommand::SelectMode(value) => match value.parse::<Mode>() {
            Ok(mode) => Some(select_mode(state, mode)),
            Err(e) => {
                tracing::warn!("Ignoring selector value: {}", e);
                None
            }
        },
        AppCommand::SelectNextMode => {
            let mode = state.account.mode().next();
            Some(select_mode(state, mode))
        }
        AppCommand::SelectPreviousMode => {
            let mode = state.account.mode().previous();
            Some(select_mode(state, mode))
        }

        AppCommand::EnterAmountEntry => {
            let form_visible = state.account.form_visible();
            if let Screen::Account(screen) = state.current_screen_mut() {
                if form_visible {
                    screen.input_mode = InputMode::AmountEntry;
                }
            }
            None
        }
        AppCommand::ExitAmountEntry => {
            if let Screen::Account(screen) = state.current_screen_mut() {
                screen.input_mode = InputMode::Normal;
            }
            None
        }
        AppCommand::AppendAmountChar(c) => edit_amount(state, |input| {
            if input.len() < MAX_AMOUNT_INPUT_LEN {
                input.push(c);
            }
        }),
        AppCommand::DeleteAmountChar => edit_amount(state, |input| {
            input.pop();
        }),
        AppCommand::ClearAmount => edit_amount(state, String::clear),
        AppCommand::SubmitTransaction => {
            tracing::info!(
                "Submitting {} of {}",
                state.account.mode(),
                state.account.pending_amount()
            );
            Some(state.account.submit())
        }

        AppCommand::NavigateBack => {
            state.navigate_back();
            None
        }
        AppCommand::NavigateToLogs => {
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
            None
        }

        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                // Scroll up means going back in time (increase offset)
                if logs_state.scroll_offset < logs_state.total_entries.saturating_sub(1) {
                    logs_state.scroll_offset += 1;
                }
            }
            None
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = (logs_state.scroll_offset + LOG_PAGE_SIZE)
                    .min(logs_state.total_entries.saturating_sub(1));
            }
            None
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
            None
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = logs_state.total_entries.saturating_sub(1);
            }
            None
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(logs_state) = state.current_screen_mut() {
                logs_state.scroll_offset = 0;
            }
            None
        }

        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
            None
        }
        AppCommand::ClearPendingKey => {
            state.pending_key = None;
            None
        }
        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
            None
        }
        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
    };

    if let Some(ref event) = event {
        crate::state::reducer::reduce_account_event(state, event);
    }

    // Any command other than SetPendingKey ends a key sequence
    if !is_setting_pending_key {
        state.pending_key = None;
    }

    event
}

fn select_mode(state: &mut AppState, mode: Mode) -> AccountEvent {
    tracing::debug!("Selecting mode {:?}", mode);
    state.account.set_mode(mode)
}

/// Edit the amount field in place and report the new text to the account
fn edit_amount<F>(state: &mut AppState, edit: F) -> Option<AccountEvent>
where
    F: FnOnce(&mut String),
{
    let Screen::Account(screen) = state.current_screen_mut() else {
        return None;
    };
    if screen.input_mode != InputMode::AmountEntry {
        return None;
    }

    edit(&mut screen.amount_input);
    let raw = screen.amount_input.clone();
    Some(state.account.update_amount(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atm_core::{Money, Validity};

    fn typing(mode: Mode) -> AppState {
        let mut state = AppState::new();
        execute_command(AppCommand::SelectMode(mode.selector_value()), &mut state);
        execute_command(AppCommand::EnterAmountEntry, &mut state);
        state
    }

    fn type_amount(state: &mut AppState, text: &str) {
        for c in text.chars() {
            execute_command(AppCommand::AppendAmountChar(c), state);
        }
    }

    #[test]
    fn test_select_mode_returns_transition() {
        let mut state = AppState::new();
        let event = execute_command(AppCommand::SelectMode("Cash Back"), &mut state);
        assert_eq!(
            event,
            Some(AccountEvent::ModeChanged {
                from: Mode::Unselected,
                to: Mode::CashBack
            })
        );
        assert_eq!(state.account.mode(), Mode::CashBack);
    }

    #[test]
    fn test_unknown_selector_value_ignored() {
        let mut state = AppState::new();
        execute_command(AppCommand::SelectMode("Deposit"), &mut state);

        let event = execute_command(AppCommand::SelectMode("Transfer"), &mut state);

        assert_eq!(event, None);
        assert_eq!(state.account.mode(), Mode::Deposit);
    }

    #[test]
    fn test_empty_selector_value_clears_mode() {
        let mut state = AppState::new();
        execute_command(AppCommand::SelectMode("Cash Back"), &mut state);
        execute_command(AppCommand::SelectMode(""), &mut state);
        assert_eq!(state.account.mode(), Mode::Unselected);
    }

    #[test]
    fn test_cycle_modes() {
        let mut state = AppState::new();
        execute_command(AppCommand::SelectNextMode, &mut state);
        assert_eq!(state.account.mode(), Mode::Deposit);
        execute_command(AppCommand::SelectNextMode, &mut state);
        assert_eq!(state.account.mode(), Mode::CashBack);
        execute_command(AppCommand::SelectPreviousMode, &mut state);
        assert_eq!(state.account.mode(), Mode::Deposit);
    }

    #[test]
    fn test_enter_amount_entry_requires_mode() {
        let mut state = AppState::new();
        execute_command(AppCommand::EnterAmountEntry, &mut state);
        assert_eq!(state.account_screen().unwrap().input_mode, InputMode::Normal);
    }

    #[test]
    fn test_typing_updates_pending_amount() {
        let mut state = typing(Mode::Deposit);
        type_amount(&mut state, "12.75");

        assert_eq!(state.account_screen().unwrap().amount_input, "12.75");
        assert_eq!(state.account.pending_amount(), Money::parse("12.75").unwrap());
        assert!(state.account.is_valid());

        execute_command(AppCommand::DeleteAmountChar, &mut state);
        assert_eq!(state.account.pending_amount(), Money::parse("12.7").unwrap());
    }

    #[test]
    fn test_typing_ignored_outside_amount_entry() {
        let mut state = AppState::new();
        execute_command(AppCommand::SelectMode("Deposit"), &mut state);
        let event = execute_command(AppCommand::AppendAmountChar('5'), &mut state);

        assert_eq!(event, None);
        assert!(state.account_screen().unwrap().amount_input.is_empty());
    }

    #[test]
    fn test_amount_input_is_capped() {
        let mut state = typing(Mode::Deposit);
        type_amount(&mut state, &"9".repeat(MAX_AMOUNT_INPUT_LEN + 5));
        assert_eq!(
            state.account_screen().unwrap().amount_input.len(),
            MAX_AMOUNT_INPUT_LEN
        );
    }

    #[test]
    fn test_clear_amount_invalidates() {
        let mut state = typing(Mode::Deposit);
        type_amount(&mut state, "40");
        execute_command(AppCommand::ClearAmount, &mut state);

        assert!(state.account_screen().unwrap().amount_input.is_empty());
        assert_eq!(state.account.validity(), Validity::NotPositive);
    }

    #[test]
    fn test_submit_applies_and_clears_field() {
        let mut state = typing(Mode::Deposit);
        type_amount(&mut state, "50");

        let event = execute_command(AppCommand::SubmitTransaction, &mut state);

        assert!(matches!(event, Some(AccountEvent::Applied(_))));
        assert_eq!(state.account.balance(), Money::from(50));
        assert!(state.account_screen().unwrap().amount_input.is_empty());
    }

    #[test]
    fn test_log_scrolling_is_bounded() {
        let mut state = AppState::new();
        execute_command(AppCommand::NavigateToLogs, &mut state);
        state.set_log_entry_count(30);

        execute_command(AppCommand::ScrollLogsPageUp, &mut state);
        execute_command(AppCommand::ScrollLogsPageUp, &mut state);
        let Screen::Logs(logs) = state.current_screen() else {
            panic!("expected logs screen");
        };
        assert_eq!(logs.scroll_offset, 29);

        execute_command(AppCommand::ScrollLogsToBottom, &mut state);
        execute_command(AppCommand::ScrollLogsDown, &mut state);
        let Screen::Logs(logs) = state.current_screen() else {
            panic!("expected logs screen");
        };
        assert_eq!(logs.scroll_offset, 0);
    }

    #[test]
    fn test_navigate_to_logs_once() {
        let mut state = AppState::new();
        execute_command(AppCommand::NavigateToLogs, &mut state);
        execute_command(AppCommand::NavigateToLogs, &mut state);
        assert_eq!(state.history.len(), 2);

        execute_command(AppCommand::NavigateBack, &mut state);
        execute_command(AppCommand::NavigateBack, &mut state);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_pending_key_cleared_by_other_commands() {
        let mut state = AppState::new();
        execute_command(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));

        execute_command(AppCommand::ToggleHelp, &mut state);
        assert_eq!(state.pending_key, None);
    }
}
