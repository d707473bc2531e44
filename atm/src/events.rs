/// Commands produced from key presses and applied to the app state
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Mode selector; `SelectMode` carries the option's selector value
    SelectMode(&'static str),
    SelectNextMode,
    SelectPreviousMode,

    // Amount form
    EnterAmountEntry,
    ExitAmountEntry,
    AppendAmountChar(char),
    DeleteAmountChar,
    ClearAmount,
    SubmitTransaction,

    // Navigation
    NavigateBack,
    NavigateToLogs,

    // Log screen
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    ToggleHelp,

    // System
    Quit,
}
