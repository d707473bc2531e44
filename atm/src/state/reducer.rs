use super::{AppState, InputMode, Notice};
use atm_core::AccountEvent;

/// Bring the view state in line with a transition the account just made
pub fn reduce_account_event(state: &mut AppState, event: &AccountEvent) {
    let Some(screen) = state.account_screen_mut() else {
        return;
    };

    match event {
        AccountEvent::ModeChanged { to, .. } => {
            // The account dropped its staged amount, so the field follows
            screen.amount_input.clear();
            screen.notice = None;
            if !to.is_selected() {
                screen.input_mode = InputMode::Normal;
            }
        }

        AccountEvent::AmountUpdated { .. } => {
            screen.notice = None;
        }

        AccountEvent::Applied(receipt) => {
            screen.amount_input.clear();
            screen.notice = Some(Notice::Applied(receipt.clone()));
        }

        AccountEvent::Rejected { validity } => {
            tracing::warn!("Transaction not applied: {}", validity.message());
            screen.notice = Some(Notice::Rejected(*validity));
        }
    }
}
