use crate::commands::{executor, handlers};
use crate::input::KeyEvent;
use crate::state::AppState;
use atm_core::{Account, AccountEvent};

/// Receives every account transition after the view state has caught up.
///
/// Rendering re-queries `AppState` on each frame; observers are for
/// anything that wants the transitions themselves.
pub trait TransitionObserver {
    fn on_transition(&mut self, event: &AccountEvent, account: &Account);
}

/// Production observer: one structured log line per transition
#[derive(Debug, Default)]
pub struct TracingObserver;

impl TransitionObserver for TracingObserver {
    fn on_transition(&mut self, event: &AccountEvent, account: &Account) {
        match event {
            AccountEvent::ModeChanged { from, to } => {
                tracing::info!(from = ?from, to = ?to, "Mode changed");
            }
            AccountEvent::AmountUpdated { amount, validity } => {
                tracing::debug!(%amount, ?validity, "Amount updated");
            }
            AccountEvent::Applied(receipt) => {
                tracing::info!(
                    sequence = receipt.sequence,
                    mode = ?receipt.mode,
                    amount = %receipt.amount,
                    balance = %account.balance(),
                    "Transaction applied"
                );
            }
            AccountEvent::Rejected { validity } => {
                tracing::info!(?validity, balance = %account.balance(), "Transaction rejected");
            }
        }
    }
}

/// Testable application core without terminal dependencies
///
/// Generic over O (observer). The terminal app logs transitions; tests
/// record them for assertions.
pub struct AppCore<O: TransitionObserver> {
    ui_state: AppState,
    observer: O,
}

impl<O: TransitionObserver> AppCore<O> {
    pub fn new(observer: O) -> Self {
        Self::with_state(AppState::new(), observer)
    }

    pub fn with_state(ui_state: AppState, observer: O) -> Self {
        Self { ui_state, observer }
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            if let Some(transition) = executor::execute_command(command, &mut self.ui_state) {
                self.observer
                    .on_transition(&transition, &self.ui_state.account);
            }
        }
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn set_log_entry_count(&mut self, total: usize) {
        self.ui_state.set_log_entry_count(total);
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
