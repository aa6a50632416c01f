use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, Direction};

pub type TransactionId = Uuid;

/// A single cash movement. The stored amount is signed by direction:
/// incoming (purchase) transactions carry the negated magnitude, outgoing
/// (sale) transactions the positive one. The sign is fixed at creation and
/// never re-validated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashTransaction {
    pub id: TransactionId,
    /// Free-text label. Not a reference into the inventory: renaming or
    /// deleting an item leaves its transactions untouched.
    pub item_name: String,
    pub amount_cents: Cents,
    pub direction: Direction,
    pub recorded_at: DateTime<Utc>,
}

impl CashTransaction {
    /// Create a transaction from an unsigned magnitude. The sign of the
    /// input is irrelevant; the direction decides the stored sign.
    pub fn new(item_name: String, magnitude_cents: Cents, direction: Direction) -> Self {
        let magnitude = magnitude_cents.abs();
        let amount_cents = match direction {
            Direction::Incoming => -magnitude,
            Direction::Outgoing => magnitude,
        };
        Self {
            id: Uuid::new_v4(),
            item_name,
            amount_cents,
            direction,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_stores_negative_amount() {
        let tx = CashTransaction::new("Shoe A".into(), 5000, Direction::Incoming);
        assert_eq!(tx.amount_cents, -5000);
        assert_eq!(tx.direction, Direction::Incoming);
    }

    #[test]
    fn test_outgoing_stores_positive_amount() {
        let tx = CashTransaction::new("Shoe B".into(), 3000, Direction::Outgoing);
        assert_eq!(tx.amount_cents, 3000);
        assert_eq!(tx.direction, Direction::Outgoing);
    }

    #[test]
    fn test_input_sign_is_ignored() {
        let purchase = CashTransaction::new("Shoe C".into(), -2500, Direction::Incoming);
        assert_eq!(purchase.amount_cents, -2500);

        let sale = CashTransaction::new("Shoe C".into(), -2500, Direction::Outgoing);
        assert_eq!(sale.amount_cents, 2500);
    }
}
