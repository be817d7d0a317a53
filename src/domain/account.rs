use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cents, format_dollars};

/// Kind of mutation recorded by a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Created,
    Deposit,
    Withdrawal,
    Interest,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Created => "created",
            EntryKind::Deposit => "deposit",
            EntryKind::Withdrawal => "withdrawal",
            EntryKind::Interest => "interest",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable record of a single accepted mutation. Timestamp-free on
/// purpose: the log describes a session, not a durable audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub amount_cents: Cents,
}

impl LogEntry {
    pub fn new(kind: EntryKind, amount_cents: Cents) -> Self {
        Self { kind, amount_cents }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = format_dollars(self.amount_cents);
        match self.kind {
            EntryKind::Created => {
                write!(f, "Account created with initial balance: {}", amount)
            }
            EntryKind::Deposit => write!(f, "Deposited: {}", amount),
            EntryKind::Withdrawal => write!(f, "Withdrawn: {}", amount),
            EntryKind::Interest => write!(f, "Interest added: {}", amount),
        }
    }
}

/// Result of applying a guarded mutation.
///
/// The public surface keeps the original silent-no-op contract (`deposit`
/// returns nothing, `withdraw` a bool); this richer discriminant is what the
/// guards actually produce, so callers and tests can distinguish an accepted
/// mutation from an ignored or rejected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation was applied and logged.
    Applied,
    /// Non-positive amount: silently ignored, nothing changed.
    Ignored,
    /// Withdrawal exceeding the balance: refused, nothing changed.
    Rejected,
}

/// A single bank account: a balance plus an ordered, append-only
/// transaction log. Every accepted mutation appends exactly one entry.
#[derive(Debug, Clone)]
pub struct Account {
    balance: Cents,
    history: Vec<LogEntry>,
}

impl Account {
    /// Open an account with the given starting balance. Any value is
    /// accepted, including negative; the opening itself is logged.
    pub fn new(initial_balance: Cents) -> Self {
        let mut account = Self {
            balance: initial_balance,
            history: Vec::new(),
        };
        account.log(EntryKind::Created, initial_balance);
        account
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Add `amount` to the balance. Non-positive amounts are silently
    /// ignored: no mutation, no log entry, no error.
    pub fn deposit(&mut self, amount: Cents) {
        let _ = self.try_deposit(amount);
    }

    pub fn try_deposit(&mut self, amount: Cents) -> Outcome {
        if amount <= 0 {
            return Outcome::Ignored;
        }
        self.balance += amount;
        self.log(EntryKind::Deposit, amount);
        Outcome::Applied
    }

    /// Subtract `amount` from the balance. Returns false, leaving balance
    /// and log untouched, when the amount is non-positive or exceeds the
    /// balance; the balance never goes negative through a withdrawal.
    pub fn withdraw(&mut self, amount: Cents) -> bool {
        self.try_withdraw(amount) == Outcome::Applied
    }

    pub fn try_withdraw(&mut self, amount: Cents) -> Outcome {
        if amount <= 0 {
            return Outcome::Ignored;
        }
        if amount > self.balance {
            return Outcome::Rejected;
        }
        self.balance -= amount;
        self.log(EntryKind::Withdrawal, amount);
        Outcome::Applied
    }

    /// Apply interest at `rate_percent` percent of the current balance,
    /// rounded to the nearest cent. The rate is unbounded; a negative rate
    /// reduces the balance.
    pub fn accrue_interest(&mut self, rate_percent: f64) -> Cents {
        let interest = (self.balance as f64 * rate_percent / 100.0).round() as Cents;
        self.balance += interest;
        self.log(EntryKind::Interest, interest);
        interest
    }

    /// Snapshot of the log, oldest first. The returned vector is
    /// independent of the account's internal state.
    pub fn history(&self) -> Vec<LogEntry> {
        self.history.clone()
    }

    /// Snapshot of the log rendered as human-readable lines.
    pub fn history_lines(&self) -> Vec<String> {
        self.history.iter().map(LogEntry::to_string).collect()
    }

    fn log(&mut self, kind: EntryKind, amount_cents: Cents) {
        self.history.push(LogEntry::new(kind, amount_cents));
    }
}
