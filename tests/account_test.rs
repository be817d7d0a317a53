use passbook::domain::{Account, EntryKind, LogEntry, Outcome};

#[test]
fn test_creation_logs_initial_balance() {
    let account = Account::new(100000);

    assert_eq!(account.balance(), 100000);
    assert_eq!(
        account.history_lines(),
        vec!["Account created with initial balance: $1000.00"]
    );
}

#[test]
fn test_positive_deposit_adds_exactly_the_amount() {
    let mut account = Account::new(100000);

    account.deposit(50000);

    assert_eq!(account.balance(), 150000);
    let lines = account.history_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Deposited: $500.00");
}

#[test]
fn test_non_positive_deposit_changes_nothing() {
    let mut account = Account::new(100000);

    account.deposit(0);
    account.deposit(-1);

    assert_eq!(account.balance(), 100000);
    assert_eq!(account.history().len(), 1);
}

#[test]
fn test_overdraft_withdrawal_is_refused() {
    let mut account = Account::new(100000);
    account.deposit(50000);

    assert!(!account.withdraw(200000));

    assert_eq!(account.balance(), 150000);
    assert_eq!(account.history().len(), 2);
}

#[test]
fn test_accepted_withdrawal_subtracts_and_logs() {
    let mut account = Account::new(150000);

    assert!(account.withdraw(20000));

    assert_eq!(account.balance(), 130000);
    assert_eq!(account.history_lines()[1], "Withdrawn: $200.00");
}

#[test]
fn test_interest_multiplies_balance() {
    let mut account = Account::new(130000);

    let interest = account.accrue_interest(10.0);

    assert_eq!(interest, 13000);
    assert_eq!(account.balance(), 143000);
    assert_eq!(account.history_lines()[1], "Interest added: $130.00");
}

#[test]
fn test_zero_rate_interest_still_logs_one_entry() {
    let mut account = Account::new(100000);

    assert_eq!(account.accrue_interest(0.0), 0);

    assert_eq!(account.balance(), 100000);
    assert_eq!(account.history().len(), 2);
}

#[test]
fn test_history_length_tracks_accepted_mutations_in_order() {
    let mut account = Account::new(100000);

    account.deposit(50000); // accepted
    account.deposit(-5); // ignored
    assert!(!account.withdraw(999999)); // rejected
    assert!(account.withdraw(20000)); // accepted
    account.accrue_interest(10.0); // accepted

    let kinds: Vec<EntryKind> = account.history().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::Created,
            EntryKind::Deposit,
            EntryKind::Withdrawal,
            EntryKind::Interest,
        ]
    );
}

#[test]
fn test_demo_scenario_end_to_end() {
    // The walkthrough from the original demo: open with 1000, deposit 500,
    // bounce a 2000 withdrawal, withdraw 200, then 10% interest.
    let mut account = Account::new(100000);

    account.deposit(50000);
    assert_eq!(account.balance(), 150000);

    assert!(!account.withdraw(200000));
    assert_eq!(account.balance(), 150000);
    assert_eq!(account.history().len(), 2);

    assert!(account.withdraw(20000));
    assert_eq!(account.balance(), 130000);

    account.accrue_interest(10.0);
    assert_eq!(account.balance(), 143000);

    assert_eq!(
        account.history_lines(),
        vec![
            "Account created with initial balance: $1000.00",
            "Deposited: $500.00",
            "Withdrawn: $200.00",
            "Interest added: $130.00",
        ]
    );
}

#[test]
fn test_snapshots_are_isolated_from_the_account() {
    let mut account = Account::new(100000);

    let mut entries = account.history();
    entries.push(LogEntry::new(EntryKind::Deposit, 1));
    entries.remove(0);

    let mut lines = account.history_lines();
    lines.clear();

    assert_eq!(account.history().len(), 1);
    assert_eq!(account.history_lines().len(), 1);
}

#[test]
fn test_outcome_discriminants() {
    let mut account = Account::new(1000);

    assert_eq!(account.try_deposit(500), Outcome::Applied);
    assert_eq!(account.try_deposit(0), Outcome::Ignored);
    assert_eq!(account.try_withdraw(-3), Outcome::Ignored);
    assert_eq!(account.try_withdraw(5000), Outcome::Rejected);
    assert_eq!(account.try_withdraw(1500), Outcome::Applied);
    assert_eq!(account.balance(), 0);
}
