use crate::app_core::{AppCore, TransitionObserver};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;
use atm_core::{Account, AccountEvent};

/// Observer that keeps every transition for later inspection
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<AccountEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransitionObserver for RecordingObserver {
    fn on_transition(&mut self, event: &AccountEvent, _account: &Account) {
        self.events.push(event.clone());
    }
}

pub struct TestApp {
    core: AppCore<RecordingObserver>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            core: AppCore::new(RecordingObserver::new()),
        }
    }

    /// Start from a specific account (e.g. with an opening balance)
    pub fn with_account(account: Account) -> Self {
        Self {
            core: AppCore::with_state(AppState::with_account(account, "$"), RecordingObserver::new()),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text as individual character keys
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn account(&self) -> &Account {
        &self.core.state().account
    }

    /// Transitions reported so far, oldest first
    pub fn transitions(&self) -> &[AccountEvent] {
        &self.core.observer().events
    }

    pub fn set_log_entry_count(&mut self, total: usize) {
        self.core.set_log_entry_count(total);
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
