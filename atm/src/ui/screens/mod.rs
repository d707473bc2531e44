pub mod account_screen;
pub mod logs_screen;

use crate::state::{AccountScreenState, LogsState};

#[derive(Debug, Clone)]
pub enum Screen {
    Account(AccountScreenState),
    Logs(LogsState),
}
