use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type ItemId = Uuid;

/// Photo bytes supplied by the presentation layer's picker. Opaque to the
/// ledger; dropped together with the item that holds them.
pub type ImageBlob = Vec<u8>;

/// Direction of goods flow for an item, or of cash flow for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Purchase/expense: goods or cash coming in
    Incoming,
    /// Sale/income: goods or cash going out
    Outgoing,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Incoming => "incoming",
            Direction::Outgoing => "outgoing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "incoming" => Some(Direction::Incoming),
            "outgoing" => Some(Direction::Outgoing),
            _ => None,
        }
    }

    /// Past-tense label used in transaction listings.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Incoming => "Purchased",
            Direction::Outgoing => "Sold",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stocked shoe position: one entry per style/size the user tracks,
/// counted by quantity rather than stored as individual pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    /// Price per unit in cents
    pub unit_price_cents: Cents,
    pub quantity: u32,
    /// Recorded for display; feeds no derived calculation
    pub direction: Direction,
    /// Attached photo. Never serialized; the bytes belong to whoever
    /// rendered them.
    #[serde(skip)]
    pub image: Option<ImageBlob>,
    pub recorded_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(name: String, unit_price_cents: Cents, quantity: u32, direction: Direction) -> Self {
        assert!(unit_price_cents >= 0, "Unit price must be non-negative");
        Self {
            id: Uuid::new_v4(),
            name,
            unit_price_cents,
            quantity,
            direction,
            image: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn with_image(mut self, image: ImageBlob) -> Self {
        self.image = Some(image);
        self
    }

    /// Value of the whole position: unit price times quantity.
    pub fn total_value_cents(&self) -> Cents {
        self.unit_price_cents * Cents::from(self.quantity)
    }
}
