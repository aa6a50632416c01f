use anyhow::Result;
use soletrack::application::{AppError, LedgerService};
use soletrack::domain::{format_usd, Direction};

#[test]
fn test_empty_ledger_balance_is_exactly_zero() {
    let service = LedgerService::new();
    assert_eq!(service.balance(), 0);
}

#[test]
fn test_sign_convention_and_balance() -> Result<()> {
    let mut service = LedgerService::new();

    let purchase = service.add_transaction("Shoe A", "50.00", Direction::Incoming)?;
    assert_eq!(purchase.amount_cents, -5000);

    let sale = service.add_transaction("Shoe B", "30.00", Direction::Outgoing)?;
    assert_eq!(sale.amount_cents, 3000);

    assert_eq!(service.balance(), -2000);
    assert_eq!(format_usd(service.balance()), "-$20.00");
    Ok(())
}

#[test]
fn test_input_sign_is_ignored() -> Result<()> {
    let mut service = LedgerService::new();

    let purchase = service.add_transaction("Shoe A", "-25.00", Direction::Incoming)?;
    assert_eq!(purchase.amount_cents, -2500);

    let sale = service.add_transaction("Shoe A", "-25.00", Direction::Outgoing)?;
    assert_eq!(sale.amount_cents, 2500);

    assert_eq!(service.balance(), 0);
    Ok(())
}

#[test]
fn test_clear_transactions_resets_balance() -> Result<()> {
    let mut service = LedgerService::new();

    service.add_transaction("Shoe A", "120.00", Direction::Incoming)?;
    service.add_transaction("Shoe B", "80.00", Direction::Outgoing)?;

    service.clear_transactions();

    assert!(service.transactions().is_empty());
    assert_eq!(service.balance(), 0);
    Ok(())
}

#[test]
fn test_remove_by_id() -> Result<()> {
    let mut service = LedgerService::new();

    service.add_transaction("Shoe A", "50.00", Direction::Incoming)?;
    let sale = service.add_transaction("Shoe B", "30.00", Direction::Outgoing)?;

    let removed = service.remove_transaction(sale.id)?;
    assert_eq!(removed.id, sale.id);
    assert_eq!(service.transactions().len(), 1);
    assert_eq!(service.balance(), -5000);

    assert!(matches!(
        service.remove_transaction(sale.id),
        Err(AppError::TransactionNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_batch_remove_by_position_ignores_out_of_range() -> Result<()> {
    let mut service = LedgerService::new();

    for name in ["a", "b", "c", "d"] {
        service.add_transaction(name, "10.00", Direction::Outgoing)?;
    }

    let removed = service.remove_transactions_at(&[0, 2, 9]);

    assert_eq!(removed, 2);
    let names: Vec<&str> = service
        .transactions()
        .iter()
        .map(|tx| tx.item_name.as_str())
        .collect();
    assert_eq!(names, ["b", "d"]);
    Ok(())
}

#[test]
fn test_empty_item_name_is_rejected_without_mutation() {
    let mut service = LedgerService::new();

    let err = service
        .add_transaction("  ", "50.00", Direction::Incoming)
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation {
            field: "item name",
            ..
        }
    ));
    assert!(service.transactions().is_empty());
}

#[test]
fn test_unparseable_amount_is_rejected_without_mutation() {
    let mut service = LedgerService::new();

    let err = service
        .add_transaction("Shoe A", "fifty", Direction::Incoming)
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { field: "amount", .. }));
    assert!(service.transactions().is_empty());
}

#[test]
fn test_balance_is_recomputed_from_current_state() -> Result<()> {
    let mut service = LedgerService::new();

    let purchase = service.add_transaction("Shoe A", "50.00", Direction::Incoming)?;
    service.add_transaction("Shoe A", "80.00", Direction::Outgoing)?;
    assert_eq!(service.balance(), 3000);

    service.remove_transaction(purchase.id)?;
    assert_eq!(service.balance(), 8000);
    Ok(())
}

#[test]
fn test_amount_formatting_contract() {
    assert_eq!(format_usd(-1250), "-$12.50");
    assert_eq!(format_usd(300), "$3.00");
    assert_eq!(format_usd(0), "$0.00");
}

#[test]
fn test_repeated_dimes_balance_exactly() -> Result<()> {
    let mut service = LedgerService::new();

    for _ in 0..10 {
        service.add_transaction("Insoles", "0.10", Direction::Outgoing)?;
    }

    assert_eq!(service.balance(), 100);
    assert_eq!(format_usd(service.balance()), "$1.00");
    Ok(())
}

#[test]
fn test_transactions_keep_insertion_order() -> Result<()> {
    let mut service = LedgerService::new();

    service.add_transaction("first", "1.00", Direction::Incoming)?;
    service.add_transaction("second", "2.00", Direction::Outgoing)?;
    service.add_transaction("third", "3.00", Direction::Incoming)?;

    let names: Vec<&str> = service
        .transactions()
        .iter()
        .map(|tx| tx.item_name.as_str())
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
    Ok(())
}
