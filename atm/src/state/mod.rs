pub mod reducer;

use crate::ui::screens::Screen;
use atm_core::{Account, Receipt, Validity};

/// Represents input mode for the account screen
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    AmountEntry,
}

/// Feedback from the most recent submit
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Applied(Receipt),
    Rejected(Validity),
}

/// View state for the account screen. The account itself lives on `AppState`.
#[derive(Default, Debug, Clone)]
pub struct AccountScreenState {
    pub input_mode: InputMode,
    /// Raw text of the amount field, reported to the account on every edit
    pub amount_input: String,
    pub notice: Option<Notice>,
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    pub account: Account,
    pub currency_symbol: String,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_account(Account::new(), "$")
    }

    pub fn with_account(account: Account, currency_symbol: &str) -> Self {
        Self {
            history: vec![Screen::Account(AccountScreenState::default())],

            account,
            currency_symbol: currency_symbol.to_string(),

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// The account screen's view state, wherever it sits in the stack
    pub fn account_screen(&self) -> Option<&AccountScreenState> {
        self.history.iter().find_map(|screen| match screen {
            Screen::Account(state) => Some(state),
            _ => None,
        })
    }

    pub fn account_screen_mut(&mut self) -> Option<&mut AccountScreenState> {
        self.history.iter_mut().find_map(|screen| match screen {
            Screen::Account(state) => Some(state),
            _ => None,
        })
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// Keep the logs screen's scroll bounds in step with the buffer
    pub fn set_log_entry_count(&mut self, total: usize) {
        if let Screen::Logs(logs_state) = self.current_screen_mut() {
            logs_state.total_entries = total;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
