use std::str::FromStr;

use crate::error::AtmError;

/// Transaction mode chosen in the selector
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Unselected,
    Deposit,
    CashBack,
}

impl Mode {
    /// Selector options in display order
    pub const OPTIONS: [Mode; 3] = [Mode::Unselected, Mode::Deposit, Mode::CashBack];

    /// Heading shown above the amount form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => "",
            Self::Deposit => "Deposit",
            Self::CashBack => "Cash Back",
        }
    }

    /// Value reported by the selector for this option
    pub fn selector_value(&self) -> &'static str {
        self.label()
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Unselected => 0,
            Self::Deposit => 1,
            Self::CashBack => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::OPTIONS[index % Self::OPTIONS.len()]
    }

    /// Cycle to the next selector option
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Cycle to the previous selector option
    pub fn previous(&self) -> Self {
        Self::from_index(self.index() + Self::OPTIONS.len() - 1)
    }
}

impl FromStr for Mode {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            Ok(Self::Unselected)
        } else if value.eq_ignore_ascii_case("deposit") {
            Ok(Self::Deposit)
        } else if value.eq_ignore_ascii_case("cash back") || value.eq_ignore_ascii_case("cashback")
        {
            Ok(Self::CashBack)
        } else {
            Err(AtmError::UnknownMode(s.to_string()))
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unselected => write!(f, "(none)"),
            mode => write!(f, "{}", mode.label()),
        }
    }
}
