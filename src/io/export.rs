use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::AccountService;
use crate::domain::{Cents, LogEntry};

/// Receipt document for JSON export. This is a rendering of the session's
/// log, not persisted ledger state; nothing ever reads it back into an
/// account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub balance_cents: Cents,
    pub entries: Vec<LogEntry>,
}

/// Exporter for writing the transaction receipt in various formats.
pub struct Exporter<'a> {
    service: &'a AccountService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a AccountService) -> Self {
        Self { service }
    }

    /// Export the receipt to CSV format. Returns the number of entries
    /// written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["kind", "amount_cents", "description"])?;

        let entries = self.service.history();
        for entry in &entries {
            csv_writer.write_record([
                entry.kind.as_str().to_string(),
                entry.amount_cents.to_string(),
                entry.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(entries.len())
    }

    /// Export the receipt to pretty-printed JSON. Returns the number of
    /// entries written.
    pub fn export_json<W: Write>(&self, writer: W) -> Result<usize> {
        let snapshot = ReceiptSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            balance_cents: self.service.balance(),
            entries: self.service.history(),
        };

        serde_json::to_writer_pretty(writer, &snapshot)?;
        Ok(snapshot.entries.len())
    }
}
