use std::fs::File;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::application::AccountService;
use crate::io::Exporter;

/// Passbook - Single-Account Bank Ledger
#[derive(Parser)]
#[command(name = "passbook")]
#[command(about = "An interactive bank ledger for a single account")]
#[command(version)]
pub struct Cli {
    /// Starting balance (e.g., "1000.00" or "1000")
    #[arg(short, long, default_value = "1000.00")]
    pub balance: String,

    /// Suppress the transaction history dump when the session ends
    #[arg(short, long)]
    pub quiet: bool,
}

const HELP: &str = "\
Commands:
  deposit <amount>         Deposit an amount (e.g. 'deposit 50.00')
  withdraw <amount>        Withdraw an amount
  interest <rate>          Apply interest at <rate> percent of the balance
  balance                  Show the current balance
  receipt                  Show the transaction receipt
  export <csv|json> <path> Write the receipt to a file
  help                     Show this help
  quit                     End the session";

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_session(stdin.lock(), stdout.lock())
    }

    /// Drive one interactive session: read commands line by line until
    /// `quit` or end of input, then dump the transaction history unless
    /// `--quiet` was given. Generic over reader/writer so tests can script
    /// a session.
    pub fn run_session<R: BufRead, W: Write>(self, input: R, mut out: W) -> Result<()> {
        let mut service = AccountService::open(&self.balance)
            .context("Invalid starting balance. Use '1000.00' or '1000'")?;

        writeln!(out, "Balance: {}", service.balance_display())?;
        writeln!(out, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let args: Vec<&str> = words.collect();

            match command {
                "deposit" => {
                    run_amount_command(&mut service, &args, &mut out, "deposit <amount>", |s, a| {
                        s.deposit(a).map(|_| ())
                    })?
                }

                "withdraw" => {
                    run_amount_command(&mut service, &args, &mut out, "withdraw <amount>", |s, a| {
                        s.withdraw(a).map(|_| ())
                    })?
                }

                "interest" => {
                    run_amount_command(&mut service, &args, &mut out, "interest <rate>", |s, a| {
                        s.accrue_interest(a).map(|_| ())
                    })?
                }

                "balance" => writeln!(out, "Balance: {}", service.balance_display())?,

                "receipt" => {
                    writeln!(out, "Transaction Receipt:")?;
                    writeln!(out, "{}", service.receipt())?;
                }

                "export" => run_export_command(&service, &args, &mut out)?,

                "help" => writeln!(out, "{}", HELP)?,

                "quit" | "exit" => break,

                unknown => {
                    writeln!(out, "Unknown command: {:?}. Type 'help' for commands.", unknown)?
                }
            }
        }

        if !self.quiet {
            writeln!(out, "Transaction History:")?;
            writeln!(out, "{}", service.receipt())?;
        }
        Ok(())
    }
}

/// Shared shape of deposit/withdraw/interest: one text argument, apply it,
/// re-render the balance. Rejections and parse failures print a blocking
/// error line and leave the account untouched.
fn run_amount_command<W: Write>(
    service: &mut AccountService,
    args: &[&str],
    out: &mut W,
    usage: &str,
    apply: impl FnOnce(&mut AccountService, &str) -> Result<(), crate::application::AppError>,
) -> Result<()> {
    let [arg] = args else {
        writeln!(out, "Usage: {}", usage)?;
        return Ok(());
    };

    match apply(service, arg) {
        Ok(()) => writeln!(out, "Balance: {}", service.balance_display())?,
        Err(err) => writeln!(out, "Error: {}", err)?,
    }
    Ok(())
}

fn run_export_command<W: Write>(
    service: &AccountService,
    args: &[&str],
    out: &mut W,
) -> Result<()> {
    let [format, path] = args else {
        writeln!(out, "Usage: export <csv|json> <path>")?;
        return Ok(());
    };

    // Export failures end the command, not the session.
    match export_receipt(service, format, path) {
        Ok(count) => writeln!(out, "Exported {} entries to {}", count, path)?,
        Err(err) => writeln!(out, "Error: {:#}", err)?,
    }
    Ok(())
}

fn export_receipt(service: &AccountService, format: &str, path: &str) -> Result<usize> {
    let exporter = Exporter::new(service);
    match format {
        "csv" => {
            let file = File::create(path).with_context(|| format!("Cannot create {}", path))?;
            exporter.export_csv(file)
        }
        "json" => {
            let file = File::create(path).with_context(|| format!("Cannot create {}", path))?;
            exporter.export_json(file)
        }
        other => bail!("Unknown export format: {:?}. Use 'csv' or 'json'.", other),
    }
}
