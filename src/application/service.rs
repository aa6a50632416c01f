use crate::domain::{
    parse_cents, CashTransaction, Cents, Direction, ImageBlob, InventoryItem, ItemId, Ledger,
    TransactionId,
};

use super::AppError;

/// Application service owning the in-memory ledger. This is the primary
/// interface for any client (CLI, TUI, tests) and the single validation
/// layer between raw user text and the domain: numeric fields arrive here
/// exactly as typed, and clients must not pre-validate them.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Inventory operations
    // ========================

    /// Add an item. Fails without mutating when the name is empty, the
    /// price is not a parseable non-negative amount, or the quantity is not
    /// a parseable non-negative whole number.
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: &str,
        quantity: &str,
        direction: Direction,
        image: Option<ImageBlob>,
    ) -> Result<InventoryItem, AppError> {
        let (name, unit_price_cents, quantity) = validate_item_fields(name, unit_price, quantity)?;
        let mut item = InventoryItem::new(name, unit_price_cents, quantity, direction);
        if let Some(image) = image {
            item = item.with_image(image);
        }
        self.ledger.add_item(item.clone());
        Ok(item)
    }

    /// Replace every non-id field of an existing item. Validation is
    /// identical to add and runs before the lookup, so a bad edit never
    /// partially applies.
    pub fn edit_item(
        &mut self,
        id: ItemId,
        name: &str,
        unit_price: &str,
        quantity: &str,
        direction: Direction,
        image: Option<ImageBlob>,
    ) -> Result<InventoryItem, AppError> {
        let (name, unit_price_cents, quantity) = validate_item_fields(name, unit_price, quantity)?;
        let item = self
            .ledger
            .replace_item(id, name, unit_price_cents, quantity, direction, image)
            .ok_or(AppError::ItemNotFound(id))?;
        Ok(item.clone())
    }

    pub fn remove_item(&mut self, id: ItemId) -> Result<InventoryItem, AppError> {
        self.ledger
            .remove_item(id)
            .ok_or(AppError::ItemNotFound(id))
    }

    pub fn clear_inventory(&mut self) {
        self.ledger.clear_inventory();
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.ledger.items()
    }

    pub fn total_inventory_value(&self) -> Cents {
        self.ledger.total_inventory_value()
    }

    // ========================
    // Transaction operations
    // ========================

    /// Record a transaction. The sign of the entered amount is irrelevant;
    /// the magnitude is taken and the stored sign follows the direction.
    pub fn add_transaction(
        &mut self,
        item_name: &str,
        amount: &str,
        direction: Direction,
    ) -> Result<CashTransaction, AppError> {
        let item_name = require_text("item name", item_name)?;
        let amount_cents = parse_field("amount", amount)?;
        let transaction = CashTransaction::new(item_name, amount_cents, direction);
        self.ledger.add_transaction(transaction.clone());
        Ok(transaction)
    }

    pub fn remove_transaction(&mut self, id: TransactionId) -> Result<CashTransaction, AppError> {
        self.ledger
            .remove_transaction(id)
            .ok_or(AppError::TransactionNotFound(id))
    }

    /// Batch delete by list position; out-of-range positions are silently
    /// skipped. Returns the number removed.
    pub fn remove_transactions_at(&mut self, positions: &[usize]) -> usize {
        self.ledger.remove_transactions_at(positions)
    }

    pub fn clear_transactions(&mut self) {
        self.ledger.clear_transactions();
    }

    pub fn transactions(&self) -> &[CashTransaction] {
        self.ledger.transactions()
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }
}

fn validate_item_fields(
    name: &str,
    unit_price: &str,
    quantity: &str,
) -> Result<(String, Cents, u32), AppError> {
    let name = require_text("name", name)?;

    let unit_price_cents = parse_field("price", unit_price)?;
    if unit_price_cents < 0 {
        return Err(AppError::Validation {
            field: "price",
            reason: "must not be negative".to_string(),
        });
    }

    let quantity: u32 = quantity.trim().parse().map_err(|_| AppError::Validation {
        field: "quantity",
        reason: format!(
            "'{}' is not a non-negative whole number",
            quantity.trim()
        ),
    })?;

    Ok((name, unit_price_cents, quantity))
}

fn require_text(field: &'static str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(value.to_string())
}

fn parse_field(field: &'static str, value: &str) -> Result<Cents, AppError> {
    parse_cents(value).map_err(|_| AppError::Validation {
        field,
        reason: format!("'{}' is not a valid amount", value.trim()),
    })
}
