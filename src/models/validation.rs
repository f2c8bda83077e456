use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::Amount;

/// The three checkpoints at which debits must equal credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Opening,
    Movement,
    Closing
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Opening => "Opening",
            Category::Movement => "Movement",
            Category::Closing => "Closing"
        };

        write!(formatter, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRecord {
    pub category: Category,
    pub debit_total: Amount,
    pub credit_total: Amount,
    pub balanced: bool
}

impl ValidationRecord {
    pub fn new(category: Category, debit_total: Amount, credit_total: Amount) -> Self {
        Self {
            category,
            debit_total,
            credit_total,
            balanced: debit_total == credit_total
        }
    }
}

/// Balance checks for opening, movement and closing, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    records: [ValidationRecord; 3]
}

impl ValidationReport {
    pub fn new(opening: ValidationRecord, movement: ValidationRecord, closing: ValidationRecord) -> Self {
        Self {
            records: [opening, movement, closing]
        }
    }

    pub fn opening(&self) -> &ValidationRecord {
        &self.records[0]
    }

    pub fn movement(&self) -> &ValidationRecord {
        &self.records[1]
    }

    pub fn closing(&self) -> &ValidationRecord {
        &self.records[2]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationRecord> {
        self.records.iter()
    }

    pub fn is_balanced(&self) -> bool {
        self.records.iter().all(|record| record.balanced)
    }
}
