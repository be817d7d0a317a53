use crate::domain::{
    Account, Cents, LogEntry, Outcome, format_dollars, parse_cents, parse_rate,
};

use super::AppError;

/// Application service wrapping a single [`Account`]. This is the primary
/// interface for any client (CLI, TUI, tests): it takes the raw text a user
/// typed, validates it, and drives the account. Rejections surface as
/// [`AppError`] here; the account itself never errors.
pub struct AccountService {
    account: Account,
}

impl AccountService {
    /// Open an account with a starting balance already expressed in cents.
    pub fn new(initial_balance: Cents) -> Self {
        Self {
            account: Account::new(initial_balance),
        }
    }

    /// Open an account from user-entered starting balance text.
    pub fn open(input: &str) -> Result<Self, AppError> {
        let initial_balance = parse_cents(input)?;
        Ok(Self::new(initial_balance))
    }

    /// Deposit from user-entered amount text. A non-positive amount parses
    /// fine and is silently ignored by the account, mirroring the original
    /// contract; only unparseable text is an error.
    pub fn deposit(&mut self, input: &str) -> Result<Outcome, AppError> {
        let amount = parse_cents(input)?;
        Ok(self.account.try_deposit(amount))
    }

    /// Withdraw from user-entered amount text. Returns the amount withdrawn;
    /// a non-positive amount or one exceeding the balance is reported as
    /// [`AppError::WithdrawalRejected`] with nothing changed.
    pub fn withdraw(&mut self, input: &str) -> Result<Cents, AppError> {
        let amount = parse_cents(input)?;
        if self.account.withdraw(amount) {
            Ok(amount)
        } else {
            Err(AppError::WithdrawalRejected {
                requested: amount,
                balance: self.account.balance(),
            })
        }
    }

    /// Accrue interest from user-entered rate text (percent). Returns the
    /// interest credited, negative when the rate is negative.
    pub fn accrue_interest(&mut self, input: &str) -> Result<Cents, AppError> {
        let rate = parse_rate(input)?;
        Ok(self.account.accrue_interest(rate))
    }

    pub fn balance(&self) -> Cents {
        self.account.balance()
    }

    /// Balance rendered for display, two decimal places. The internal value
    /// is exact cents, so no rounding loss occurs.
    pub fn balance_display(&self) -> String {
        format_dollars(self.account.balance())
    }

    /// Snapshot of the transaction log.
    pub fn history(&self) -> Vec<LogEntry> {
        self.account.history()
    }

    /// The full receipt: every history line, newline-joined, oldest first.
    pub fn receipt(&self) -> String {
        self.account.history_lines().join("\n")
    }
}
