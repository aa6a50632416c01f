use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use uuid::Uuid;

use crate::application::LedgerService;
use crate::domain::{format_usd, Direction, ImageBlob};
use crate::storage::{keys, SettingsStore};

/// Soletrack - shoe resale inventory and cash ledger
#[derive(Parser)]
#[command(name = "soletrack")]
#[command(about = "Track shoe-resale inventory and cash flow from an interactive shell")]
#[command(version)]
pub struct Cli {
    /// Settings file path
    #[arg(short, long, default_value = "soletrack-settings.json")]
    pub settings: String,
}

/// One line of shell input, parsed as a command.
#[derive(Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Show the total inventory value
    Value,

    /// List inventory items
    Items {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an inventory item (prompts for each field)
    AddItem,

    /// Re-enter every field of an existing item
    EditItem {
        /// Item ID
        id: String,
    },

    /// Remove an inventory item
    RmItem {
        /// Item ID
        id: String,
    },

    /// Remove all inventory items
    ClearInventory,

    /// Show the running balance (profit or loss)
    Balance,

    /// List transactions
    Transactions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a purchase or sale (prompts for each field)
    AddTx,

    /// Remove transactions by ID or by list position
    RmTx {
        /// Transaction ID
        id: Option<String>,

        /// List positions to remove (1-based, as shown by `transactions`)
        #[arg(long, num_args = 1..)]
        at: Vec<usize>,
    },

    /// Remove all transactions
    ClearTransactions,

    /// Show current settings
    Settings,

    /// Set a settings key (remaining words form the value)
    Set {
        /// Key (e.g. dark_mode, notifications, user_name, user_email)
        key: String,

        /// Value
        value: Vec<String>,
    },

    /// Update profile name and email (prompts)
    Profile,

    /// Restore default settings
    ResetSettings,

    /// Exit the shell
    #[command(alias = "exit")]
    Quit,
}

enum ShellOutcome {
    Continue,
    Quit,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut settings = SettingsStore::load_or_default(&self.settings)
            .with_context(|| format!("Failed to load settings from {}", self.settings))?;
        let mut service = LedgerService::new();

        greet(&settings);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            print!("> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            let parsed = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed,
                Err(err) => {
                    // clap renders its own usage and help output
                    let _ = err.print();
                    continue;
                }
            };

            match dispatch(parsed.command, &mut service, &mut settings) {
                Ok(ShellOutcome::Continue) => {}
                Ok(ShellOutcome::Quit) => break,
                Err(err) => eprintln!("Error: {err:#}"),
            }
        }

        Ok(())
    }
}

fn greet(settings: &SettingsStore) {
    let name = settings.get(keys::USER_NAME).unwrap_or_default();
    if name.is_empty() {
        println!("soletrack - type 'help' for commands, 'quit' to exit");
    } else {
        println!("soletrack - welcome back, {name}. Type 'help' for commands.");
    }
}

fn dispatch(
    command: ShellCommand,
    service: &mut LedgerService,
    settings: &mut SettingsStore,
) -> Result<ShellOutcome> {
    match command {
        ShellCommand::Value => {
            println!(
                "Total value: {}",
                format_usd(service.total_inventory_value())
            );
        }

        ShellCommand::Items { json } => run_items_command(service, json)?,

        ShellCommand::AddItem => {
            let form = prompt_item_form()?;
            let item = service.add_item(
                &form.name,
                &form.price,
                &form.quantity,
                form.direction,
                form.image,
            )?;
            println!("Added item: {} ({})", item.name, item.id);
        }

        ShellCommand::EditItem { id } => {
            let item_id = parse_id(&id)?;
            let form = prompt_item_form()?;
            let item = service.edit_item(
                item_id,
                &form.name,
                &form.price,
                &form.quantity,
                form.direction,
                form.image,
            )?;
            println!("Updated item: {} ({})", item.name, item.id);
        }

        ShellCommand::RmItem { id } => {
            let item_id = parse_id(&id)?;
            let removed = service.remove_item(item_id)?;
            println!("Removed item: {}", removed.name);
        }

        ShellCommand::ClearInventory => {
            service.clear_inventory();
            println!("Cleared inventory.");
        }

        ShellCommand::Balance => {
            println!("Balance: {}", format_usd(service.balance()));
        }

        ShellCommand::Transactions { json } => run_transactions_command(service, json)?,

        ShellCommand::AddTx => {
            let (item_name, amount, direction) = prompt_transaction_form()?;
            let tx = service.add_transaction(&item_name, &amount, direction)?;
            println!(
                "Recorded: {} {} {}",
                tx.direction.label(),
                tx.item_name,
                format_usd(tx.amount_cents)
            );
            println!("Balance: {}", format_usd(service.balance()));
        }

        ShellCommand::RmTx { id, at } => {
            if let Some(id) = id {
                let tx_id = parse_id(&id)?;
                let removed = service.remove_transaction(tx_id)?;
                println!(
                    "Removed transaction: {} {}",
                    removed.item_name,
                    format_usd(removed.amount_cents)
                );
            } else if !at.is_empty() {
                // The listing is 1-based; the ledger speaks 0-based
                let indices: Vec<usize> =
                    at.iter().filter_map(|pos| pos.checked_sub(1)).collect();
                let removed = service.remove_transactions_at(&indices);
                println!("Removed {removed} transaction(s)");
            } else {
                println!("Nothing to remove: pass a transaction ID or --at positions.");
            }
        }

        ShellCommand::ClearTransactions => {
            service.clear_transactions();
            println!("Cleared transaction history.");
        }

        ShellCommand::Settings => {
            println!("Settings file: {}", settings.path().display());
            for (key, value) in settings.entries() {
                let shown = if value.is_empty() { "(unset)" } else { value };
                println!("  {key:<16} {shown}");
            }
        }

        ShellCommand::Set { key, value } => {
            let value = value.join(" ");
            settings.set(&key, &value)?;
            println!("Set {key} = {value}");
        }

        ShellCommand::Profile => {
            let name: String = Input::new()
                .with_prompt("Display name")
                .allow_empty(true)
                .interact_text()?;
            let email: String = Input::new()
                .with_prompt("Email")
                .allow_empty(true)
                .interact_text()?;
            settings.set(keys::USER_NAME, name)?;
            settings.set(keys::USER_EMAIL, email)?;
            println!("Profile saved.");
        }

        ShellCommand::ResetSettings => {
            settings.reset()?;
            println!("Settings restored to defaults.");
        }

        ShellCommand::Quit => return Ok(ShellOutcome::Quit),
    }

    Ok(ShellOutcome::Continue)
}

fn run_items_command(service: &LedgerService, json: bool) -> Result<()> {
    let items = service.items();

    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No items in inventory.");
        return Ok(());
    }

    println!(
        "{:<38} {:<24} {:>10} {:>6} {:>12}  {}",
        "ID", "NAME", "PRICE", "QTY", "TOTAL", "DIRECTION"
    );
    println!("{}", "-".repeat(104));
    for item in items {
        println!(
            "{:<38} {:<24} {:>10} {:>6} {:>12}  {}{}",
            item.id,
            item.name,
            format_usd(item.unit_price_cents),
            item.quantity,
            format_usd(item.total_value_cents()),
            item.direction,
            if item.image.is_some() { " [image]" } else { "" },
        );
    }
    println!();
    println!(
        "Total value: {}",
        format_usd(service.total_inventory_value())
    );
    Ok(())
}

fn run_transactions_command(service: &LedgerService, json: bool) -> Result<()> {
    let transactions = service.transactions();

    if json {
        println!("{}", serde_json::to_string_pretty(transactions)?);
        return Ok(());
    }

    if transactions.is_empty() {
        println!("No transactions recorded.");
        return Ok(());
    }

    println!(
        "{:>4} {:<38} {:<24} {:<10} {:>12}",
        "#", "ID", "ITEM", "KIND", "AMOUNT"
    );
    println!("{}", "-".repeat(92));
    for (position, tx) in transactions.iter().enumerate() {
        println!(
            "{:>4} {:<38} {:<24} {:<10} {:>12}",
            position + 1,
            tx.id,
            tx.item_name,
            tx.direction.label(),
            format_usd(tx.amount_cents),
        );
    }
    println!();
    println!("Balance: {}", format_usd(service.balance()));
    Ok(())
}

struct ItemForm {
    name: String,
    price: String,
    quantity: String,
    direction: Direction,
    image: Option<ImageBlob>,
}

/// Collect the item form fields. Entries are passed through to the service
/// raw; validation happens there, not here.
fn prompt_item_form() -> Result<ItemForm> {
    let name: String = Input::new()
        .with_prompt("Item name")
        .allow_empty(true)
        .interact_text()?;
    let price: String = Input::new()
        .with_prompt("Unit price")
        .allow_empty(true)
        .interact_text()?;
    let quantity: String = Input::new()
        .with_prompt("Quantity")
        .allow_empty(true)
        .interact_text()?;
    let direction = prompt_direction("Incoming (bought into stock)?")?;
    let image_path: String = Input::new()
        .with_prompt("Image path (blank for none)")
        .allow_empty(true)
        .interact_text()?;
    let image = pick_image(image_path.trim())?;

    Ok(ItemForm {
        name,
        price,
        quantity,
        direction,
        image,
    })
}

fn prompt_transaction_form() -> Result<(String, String, Direction)> {
    let item_name: String = Input::new()
        .with_prompt("Item name")
        .allow_empty(true)
        .interact_text()?;
    let amount: String = Input::new()
        .with_prompt("Amount")
        .allow_empty(true)
        .interact_text()?;
    let direction = prompt_direction("Incoming (purchase)?")?;
    Ok((item_name, amount, direction))
}

fn prompt_direction(prompt: &str) -> Result<Direction> {
    let incoming = Confirm::new().with_prompt(prompt).default(true).interact()?;
    Ok(if incoming {
        Direction::Incoming
    } else {
        Direction::Outgoing
    })
}

/// Stand-in for the host image picker: read the file the user points at and
/// hand the bytes to the ledger as an opaque blob.
fn pick_image(path: &str) -> Result<Option<ImageBlob>> {
    if path.is_empty() {
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("Failed to read image '{path}'"))?;
    Ok(Some(bytes))
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).context("Invalid ID format (expected UUID)")
}
