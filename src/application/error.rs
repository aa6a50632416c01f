use thiserror::Error;

use crate::domain::{ItemId, TransactionId};

#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before any mutation was applied
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
}
