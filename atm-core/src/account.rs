use crate::error::AtmError;
use crate::mode::Mode;
use crate::money::Money;

/// Outcome of checking a pending amount against the account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    NoModeSelected,
    NotNumeric,
    NotPositive,
    ExceedsBalance,
    Overflow,
    /// The new balance cannot hold every digit of the amount
    Imprecise,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Short hint suitable for showing next to the amount field
    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid => "Ready to submit",
            Self::NoModeSelected => "Select an action first",
            Self::NotNumeric => "Amount must be a number",
            Self::NotPositive => "Amount must be greater than zero",
            Self::ExceedsBalance => "Amount exceeds account balance",
            Self::Overflow => "Amount is too large",
            Self::Imprecise => "Amount has too many decimal places",
        }
    }
}

/// A transaction that was applied to the balance
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// 1-based position of this transaction within the session
    pub sequence: u64,
    pub mode: Mode,
    pub amount: Money,
    pub balance_after: Money,
}

/// What a transition did, reported to whoever drives the account
#[derive(Debug, Clone, PartialEq)]
pub enum AccountEvent {
    ModeChanged { from: Mode, to: Mode },
    AmountUpdated { amount: Money, validity: Validity },
    Applied(Receipt),
    Rejected { validity: Validity },
}

/// Single account with a staged, not yet applied transaction.
///
/// All three transitions are infallible. Bad input never surfaces as an
/// error; it leaves the account in an invalid state and `submit` refuses
/// to apply it.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: Money,
    mode: Mode,
    pending_amount: Money,
    validity: Validity,
    history: Vec<Receipt>,
}

impl Account {
    pub fn new() -> Self {
        Self {
            balance: Money::ZERO,
            mode: Mode::Unselected,
            pending_amount: Money::ZERO,
            validity: Validity::NoModeSelected,
            history: Vec::new(),
        }
    }

    pub fn with_balance(balance: Money) -> Result<Self, AtmError> {
        if balance.is_negative() {
            return Err(AtmError::NegativeBalance(balance));
        }

        Ok(Self {
            balance,
            ..Self::new()
        })
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending_amount(&self) -> Money {
        self.pending_amount
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    pub fn history(&self) -> &[Receipt] {
        &self.history
    }

    /// The amount form is only offered once a mode has been picked
    pub fn form_visible(&self) -> bool {
        self.mode.is_selected()
    }

    pub fn action_label(&self) -> &'static str {
        self.mode.label()
    }

    pub fn status_line(&self, currency_symbol: &str) -> String {
        format!("Account Balance: {}{}", currency_symbol, self.balance)
    }

    /// Switch transaction mode, discarding whatever amount was staged
    pub fn set_mode(&mut self, mode: Mode) -> AccountEvent {
        let from = self.mode;
        self.mode = mode;
        self.pending_amount = Money::ZERO;
        self.validity = self.evaluate(Money::ZERO);

        tracing::debug!("Mode changed: {} -> {}", from, mode);

        AccountEvent::ModeChanged { from, to: mode }
    }

    /// Stage raw text from the amount field.
    ///
    /// Text that does not parse as a number stages zero and marks the
    /// account invalid.
    pub fn update_amount(&mut self, raw: &str) -> AccountEvent {
        match Money::parse(raw) {
            Ok(amount) => self.update_amount_value(amount),
            Err(e) => {
                tracing::debug!("Rejecting amount input: {}", e);
                self.pending_amount = Money::ZERO;
                self.validity = Validity::NotNumeric;
                AccountEvent::AmountUpdated {
                    amount: Money::ZERO,
                    validity: Validity::NotNumeric,
                }
            }
        }
    }

    pub fn update_amount_value(&mut self, amount: Money) -> AccountEvent {
        self.pending_amount = amount;
        self.validity = self.evaluate(amount);

        AccountEvent::AmountUpdated {
            amount,
            validity: self.validity,
        }
    }

    /// Apply the staged amount if it is still valid.
    ///
    /// The check is repeated here because callers may not have disabled
    /// their submit control.
    pub fn submit(&mut self) -> AccountEvent {
        if !self.validity.is_valid() {
            return self.reject(self.validity);
        }

        let recheck = self.evaluate(self.pending_amount);
        if !recheck.is_valid() {
            return self.reject(recheck);
        }

        let Some(next_balance) = self.next_balance(self.pending_amount) else {
            return self.reject(Validity::Overflow);
        };

        let receipt = Receipt {
            sequence: self.history.len() as u64 + 1,
            mode: self.mode,
            amount: self.pending_amount,
            balance_after: next_balance,
        };

        tracing::info!(
            "{} of {} applied, balance {} -> {}",
            self.mode,
            self.pending_amount,
            self.balance,
            next_balance
        );

        self.balance = next_balance;
        self.history.push(receipt.clone());
        self.pending_amount = Money::ZERO;
        self.validity = self.evaluate(Money::ZERO);

        AccountEvent::Applied(receipt)
    }

    fn reject(&self, validity: Validity) -> AccountEvent {
        tracing::debug!("Submit ignored: {}", validity.message());
        AccountEvent::Rejected { validity }
    }

    fn next_balance(&self, amount: Money) -> Option<Money> {
        match self.mode {
            Mode::Deposit => self.balance.checked_add(amount),
            Mode::CashBack => self.balance.checked_sub(amount),
            Mode::Unselected => None,
        }
    }

    fn evaluate(&self, amount: Money) -> Validity {
        match self.mode {
            Mode::Unselected => return Validity::NoModeSelected,
            _ if !amount.is_positive() => return Validity::NotPositive,
            Mode::CashBack if amount > self.balance => return Validity::ExceedsBalance,
            _ => {}
        }

        let Some(next) = self.next_balance(amount) else {
            return Validity::Overflow;
        };

        // Decimal arithmetic rounds past 28 significant digits
        let moved = match self.mode {
            Mode::CashBack => self.balance.checked_sub(next),
            _ => next.checked_sub(self.balance),
        };
        if moved == Some(amount) {
            Validity::Valid
        } else {
            Validity::Imprecise
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}
