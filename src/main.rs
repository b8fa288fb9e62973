// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

// Use library instead of local modules
use bid_ledger::{append_bid, load_bids, normalize_amount, Bid, CsvSource};

const DEFAULT_CSV: &str = "eBid_Monthly_Sales.csv";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("load") => {
            let csv_path = args.get(2).cloned().unwrap_or_else(|| DEFAULT_CSV.to_string());
            run_load(&csv_path)?;
        }
        Some("add") => {
            let csv_path = args.get(2).cloned().unwrap_or_else(|| DEFAULT_CSV.to_string());
            run_add(&csv_path)?;
        }
        Some(path) => run_ui_mode(path.to_string())?,
        None => run_ui_mode(DEFAULT_CSV.to_string())?,
    }

    Ok(())
}

/// CLI mode: load the ledger once and report what happened.
fn run_load(csv_path: &str) -> Result<()> {
    println!("📂 Loading CSV file {}", csv_path);

    let start = Instant::now();
    let source = CsvSource::from_path(Path::new(csv_path))?;
    let outcome = load_bids(&source);
    let elapsed = start.elapsed();

    println!("✓ Bids processed: {}", outcome.bids.len());
    println!(
        "✓ Time: {} microseconds ({:.3} s)",
        elapsed.as_micros(),
        elapsed.as_secs_f64()
    );

    if let Some(err) = outcome.error {
        eprintln!("⚠ Load stopped early: {:#}", err);
        eprintln!("  Kept {} bids read before the failure", outcome.bids.len());
    }

    Ok(())
}

/// CLI mode: prompt for one bid on stdin and append it to the ledger CSV.
fn run_add(csv_path: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let bid = Bid {
        bid_id: prompt(&mut lines, "Enter Auction ID: ")?,
        title: prompt(&mut lines, "Enter Auction Title: ")?,
        fund: prompt(&mut lines, "Enter Fund: ")?,
        amount: normalize_amount(&prompt(&mut lines, "Enter Winning Bid: ")?, '$'),
    };

    append_bid(&bid, Path::new(csv_path))?;

    println!("✓ New bid added and saved to CSV");
    println!("  {}", bid);

    Ok(())
}

fn prompt(
    lines: &mut std::io::Lines<io::StdinLock<'_>>,
    label: &str,
) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let line = lines.next().transpose()?.unwrap_or_default();
    Ok(line.trim().to_string())
}

#[cfg(feature = "tui")]
fn run_ui_mode(csv_path: String) -> Result<()> {
    println!("🖥️  Loading Bid Ledger dashboard...\n");

    let mut app = ui::App::new(csv_path);
    ui::run_ui(&mut app)?;

    println!("Good bye.");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_csv_path: String) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the CLI: bid-ledger load <csv>");
    std::process::exit(1);
}
