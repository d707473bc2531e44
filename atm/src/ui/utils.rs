use atm_core::{Mode, Money, Receipt};

/// Format an amount with the currency symbol after any minus sign, e.g. `-$5.00`
pub fn fmt_currency(amount: Money, currency_symbol: &str) -> String {
    if amount.is_negative() {
        let magnitude = Money::ZERO.checked_sub(amount).unwrap_or(amount);
        format!("-{}{}", currency_symbol, magnitude)
    } else {
        format!("{}{}", currency_symbol, amount)
    }
}

/// Amount of a receipt signed by its direction, e.g. `+$50.00` for a deposit
pub fn fmt_receipt_amount(receipt: &Receipt, currency_symbol: &str) -> String {
    let sign = match receipt.mode {
        Mode::CashBack => "-",
        _ => "+",
    };
    format!("{}{}", sign, fmt_currency(receipt.amount, currency_symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_currency() {
        assert_eq!(fmt_currency(Money::from(50), "$"), "$50.00");
        assert_eq!(fmt_currency(Money::from(-5), "$"), "-$5.00");
        assert_eq!(fmt_currency(Money::parse("0.5").unwrap(), "€"), "€0.50");
    }

    #[test]
    fn test_fmt_receipt_amount() {
        let mut receipt = Receipt {
            sequence: 1,
            mode: Mode::Deposit,
            amount: Money::from(20),
            balance_after: Money::from(20),
        };
        assert_eq!(fmt_receipt_amount(&receipt, "$"), "+$20.00");

        receipt.mode = Mode::CashBack;
        assert_eq!(fmt_receipt_amount(&receipt, "$"), "-$20.00");
    }
}
