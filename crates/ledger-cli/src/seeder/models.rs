//! Insert counts reported by a seeding run.

use std::fmt;

/// Outcome of seeding one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// Rows written by this run.
    pub inserted: u64,
    /// Records skipped because their key already existed.
    pub skipped: u64,
}

impl TableSummary {
    /// Records the outcome of one conflict-tolerant insert.
    pub fn record(&mut self, rows_affected: u64) {
        if rows_affected == 0 {
            self.skipped += 1;
        } else {
            self.inserted += rows_affected;
        }
    }
}

/// Outcome of a full seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: TableSummary,
    pub customers: TableSummary,
    pub invoices: TableSummary,
    pub revenue: TableSummary,
}

impl SeedSummary {
    pub fn total_inserted(&self) -> u64 {
        self.users.inserted
            + self.customers.inserted
            + self.invoices.inserted
            + self.revenue.inserted
    }

    pub fn total_skipped(&self) -> u64 {
        self.users.skipped
            + self.customers.skipped
            + self.invoices.skipped
            + self.revenue.skipped
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = [
            ("users", self.users),
            ("customers", self.customers),
            ("invoices", self.invoices),
            ("revenue", self.revenue),
        ];

        for (i, (name, table)) in tables.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {} inserted / {} skipped", name, table.inserted, table.skipped)?;
        }
        Ok(())
    }
}
