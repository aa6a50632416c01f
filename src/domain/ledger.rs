use super::{CashTransaction, Cents, Direction, ImageBlob, InventoryItem, ItemId, TransactionId};

/// Sum of unit price times quantity over a set of items.
pub fn total_value(items: &[InventoryItem]) -> Cents {
    items.iter().map(|item| item.total_value_cents()).sum()
}

/// Signed sum of transaction amounts. Purchases are stored negative, so a
/// ledger dominated by buying reads negative and one dominated by selling
/// reads positive. This is the profit-or-loss figure shown to the user.
pub fn compute_balance(transactions: &[CashTransaction]) -> Cents {
    transactions.iter().map(|tx| tx.amount_cents).sum()
}

/// Owns the inventory and transaction collections. Both are insertion
/// ordered and the order is display order. Aggregates are recomputed from
/// current state on every read, never cached.
#[derive(Debug, Default)]
pub struct Ledger {
    items: Vec<InventoryItem>,
    transactions: Vec<CashTransaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Overwrite every non-id field of the item, keeping its id, its
    /// creation time and its position in iteration order. The previously
    /// attached image is dropped with the old fields.
    pub fn replace_item(
        &mut self,
        id: ItemId,
        name: String,
        unit_price_cents: Cents,
        quantity: u32,
        direction: Direction,
        image: Option<ImageBlob>,
    ) -> Option<&InventoryItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.name = name;
        item.unit_price_cents = unit_price_cents;
        item.quantity = quantity;
        item.direction = direction;
        item.image = image;
        Some(item)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<InventoryItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear_inventory(&mut self) {
        self.items.clear();
    }

    pub fn total_inventory_value(&self) -> Cents {
        total_value(&self.items)
    }

    pub fn transactions(&self) -> &[CashTransaction] {
        &self.transactions
    }

    pub fn add_transaction(&mut self, transaction: CashTransaction) {
        self.transactions.push(transaction);
    }

    pub fn remove_transaction(&mut self, id: TransactionId) -> Option<CashTransaction> {
        let index = self.transactions.iter().position(|tx| tx.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Remove transactions by list position, as when deleting rows from the
    /// visible list. Out-of-range positions are silently skipped so a stale
    /// index cannot fail the rest of the batch. Returns the number removed.
    pub fn remove_transactions_at(&mut self, positions: &[usize]) -> usize {
        let mut in_range: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&pos| pos < self.transactions.len())
            .collect();
        // Highest first, so earlier removals don't shift later targets
        in_range.sort_unstable_by(|a, b| b.cmp(a));
        in_range.dedup();
        for pos in &in_range {
            self.transactions.remove(*pos);
        }
        in_range.len()
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    pub fn balance(&self) -> Cents {
        compute_balance(&self.transactions)
    }
}
