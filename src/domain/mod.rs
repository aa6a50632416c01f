mod item;
mod ledger;
mod money;
mod transaction;

pub use item::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
