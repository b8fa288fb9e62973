// Append-to-CSV persistence for manually entered bids

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;

use crate::model::{columns, Bid};

/// Append one bid to the ledger CSV using the same 21-column layout the
/// loader reads: title at 0, auction ID at 1, winning bid at 4 (formatted
/// `$x.xx`), fund at 8, every other column empty. Quoting is the csv
/// crate's concern; existing file contents are never touched.
pub fn append_bid(bid: &Bid, csv_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)
        .with_context(|| format!("Failed to open {} for append", csv_path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let mut row = vec![String::new(); columns::FIELD_COUNT];
    row[columns::TITLE] = bid.title.clone();
    row[columns::BID_ID] = bid.bid_id.clone();
    row[columns::WINNING_BID] = format!("${:.2}", bid.amount);
    row[columns::FUND] = bid.fund.clone();

    writer.write_record(&row)?;
    writer.flush()?;

    Ok(())
}
