use chrono::NaiveDate;
use clap::Parser;
use grocery_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grocer")]
#[command(about = "Smart grocery shopping assistant", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pin today's date (YYYY-MM-DD) instead of reading the system clock
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        grocery_core::logging::init_with_level("debug");
    } else {
        grocery_core::logging::init();
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    match cli.today {
        Some(date) => {
            tracing::info!("Clock pinned to {}", date);
            run(Assistant::from_config(&config, FixedClock(date))?, &mut input)
        }
        None => run(Assistant::from_config(&config, SystemClock)?, &mut input),
    }
}

fn run<C: Clock>(mut assistant: Assistant<C>, input: &mut impl BufRead) -> Result<()> {
    print_header("Smart Grocery Shopping Assistant");
    println!("Welcome!");

    loop {
        print_header("Main Menu");
        println!("1. View grocery list");
        println!("2. Add item to grocery list");
        println!("3. Mark items as purchased");
        println!("4. Get smart suggestions");
        println!("5. Check expiry reminders");
        println!("6. View purchase history");
        println!("0. Exit");

        // End of input behaves like Exit
        let Some(choice) = prompt(input, "Enter your choice: ")? else {
            println!();
            println!("Goodbye!");
            break;
        };

        match choice.as_str() {
            "1" => view_grocery_list(&assistant),
            "2" => add_item(&mut assistant, input)?,
            "3" => mark_items_purchased(&mut assistant, input)?,
            "4" => smart_suggestions(&mut assistant, input)?,
            "5" => expiry_reminders(&assistant),
            "6" => view_purchase_history(&assistant),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn view_grocery_list<C: Clock>(assistant: &Assistant<C>) {
    print_header("Current Grocery List");

    let items = assistant.list_items();
    if items.is_empty() {
        println!("Your grocery list is empty.");
        return;
    }

    print_numbered(items);
}

fn add_item<C: Clock>(assistant: &mut Assistant<C>, input: &mut impl BufRead) -> Result<()> {
    print_header("Add Item to Grocery List");

    let raw = prompt(input, "Enter the item you want to add: ")?.unwrap_or_default();

    // Ask up front so the prompt can fail before anything is added
    let accept = match assistant.catalog().alternative_for(&raw) {
        Some(alternative) => {
            println!(
                "Suggestion: A healthier option for '{}' is '{}'.",
                raw.to_lowercase(),
                alternative
            );
            confirm(
                input,
                "Do you want to replace it with the healthier option? (y/n): ",
            )?
        }
        None => false,
    };

    match assistant.add_to_list(&raw, |_| accept) {
        Ok(outcome) => {
            if outcome.substituted() {
                println!("Using healthier option: {}", outcome.added);
            }
            println!("'{}' has been added to your grocery list.", outcome.added);
        }
        Err(Error::EmptyInput) => println!("You did not enter anything."),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn mark_items_purchased<C: Clock>(
    assistant: &mut Assistant<C>,
    input: &mut impl BufRead,
) -> Result<()> {
    print_header("Mark Items as Purchased");

    if assistant.list_items().is_empty() {
        println!("Your grocery list is empty. Add items first.");
        return Ok(());
    }

    print_numbered(assistant.list_items());

    let choices = prompt(
        input,
        "\nEnter item numbers to mark as purchased (e.g., 1,3): ",
    )?
    .unwrap_or_default();

    if choices.is_empty() {
        println!("No items selected.");
        return Ok(());
    }

    let purchases = assistant.mark_purchased(&parse_selection(&choices));
    if purchases.is_empty() {
        println!("No valid selections.");
        return Ok(());
    }

    for purchase in purchases {
        println!(
            "Purchased '{}'. Expiry date: {}",
            purchase.name, purchase.expiry_date
        );
    }

    Ok(())
}

fn smart_suggestions<C: Clock>(
    assistant: &mut Assistant<C>,
    input: &mut impl BufRead,
) -> Result<()> {
    print_header("Smart Suggestions (Rule-Based)");

    let suggestions = assistant.suggestions();
    if suggestions.is_empty() {
        println!("No suggestions at the moment.");
        return Ok(());
    }

    println!("Based on your past purchases, you might need:");
    for suggestion in &suggestions {
        println!("- {} ({})", suggestion.name, suggestion.reason);
    }

    for suggestion in &suggestions {
        let question = format!("Add '{}' to your grocery list? (y/n): ", suggestion.name);
        if confirm(input, &question)? {
            assistant.accept_suggestion(&suggestion.name);
            println!("Added: {}", suggestion.name);
        }
    }

    Ok(())
}

fn expiry_reminders<C: Clock>(assistant: &Assistant<C>) {
    print_header("Expiry Reminders");

    let classified = assistant.classify_inventory();
    if classified.is_empty() {
        println!("You have no items in your inventory.");
        return;
    }

    let alerts = grocery_core::expiry::alerts(&classified);
    if alerts.is_empty() {
        println!("✔ All items are fresh. Nothing is close to expiry.");
        return;
    }

    for alert in alerts {
        let entry = &alert.entry;
        match alert.status {
            ExpiryStatus::Expired { days_overdue } => println!(
                "⚠ ALERT: '{}' expired {} days ago! (Expiry was: {})",
                entry.name, days_overdue, entry.expiry_date
            ),
            ExpiryStatus::ExpiringSoon { days_left } => println!(
                "⚠ Warning: '{}' will expire in {} day(s) (Expiry: {})",
                entry.name, days_left, entry.expiry_date
            ),
            ExpiryStatus::Fresh => {}
        }
    }
}

fn view_purchase_history<C: Clock>(assistant: &Assistant<C>) {
    print_header("Purchase History");

    let history = assistant.purchase_history();
    if history.is_empty() {
        println!("No purchases recorded yet.");
        return;
    }

    for record in history {
        println!("- {} (purchased on {})", record.name, record.date);
    }
}

fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{}", title);
    println!("{}", "=".repeat(50));
}

fn print_numbered(items: &[ItemName]) {
    for (index, item) in items.iter().enumerate() {
        println!("{}. {}", index + 1, item);
    }
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn confirm(input: &mut impl BufRead, message: &str) -> Result<bool> {
    let answer = prompt(input, message)?;
    Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
}
