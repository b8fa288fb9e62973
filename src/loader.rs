// Record Loader - tabular source access + fixed-column bid extraction

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::model::{columns, Bid};
use crate::normalize::normalize_amount;

/// An already-parsed tabular source: row count plus cell access by
/// (row, column), both zero-indexed. Out-of-range access is an error, never
/// a silent empty string.
pub trait TabularSource {
    fn row_count(&self) -> usize;
    fn cell(&self, row: usize, col: usize) -> Result<&str>;
}

/// In-memory CSV-backed source. The first line of the file is treated as a
/// header and is not counted as a row.
pub struct CsvSource {
    records: Vec<csv::StringRecord>,
}

impl CsvSource {
    /// Read the whole file up front; cell access after this never touches I/O.
    pub fn from_path(csv_path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(csv_path)
            .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

        let mut records = Vec::new();
        for (line_num, result) in reader.records().enumerate() {
            // +2: 1-indexed lines plus the header row
            let record = result
                .with_context(|| format!("Failed to parse CSV line {}", line_num + 2))?;
            records.push(record);
        }

        Ok(CsvSource { records })
    }
}

impl TabularSource for CsvSource {
    fn row_count(&self) -> usize {
        self.records.len()
    }

    fn cell(&self, row: usize, col: usize) -> Result<&str> {
        let record = match self.records.get(row) {
            Some(r) => r,
            None => bail!("Row {} out of range ({} rows)", row, self.records.len()),
        };
        match record.get(col) {
            Some(value) => Ok(value),
            None => bail!(
                "Column {} out of range in row {} ({} columns)",
                col,
                row,
                record.len()
            ),
        }
    }
}

/// Result of a load: the bids read so far, plus the error that stopped the
/// load if one did. A cell error on row N aborts the whole call; rows
/// [0, N) are kept and handed back alongside the error so the caller
/// decides whether a partial ledger is usable.
pub struct LoadOutcome {
    pub bids: Vec<Bid>,
    pub error: Option<anyhow::Error>,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Load bids from a tabular source using the fixed column mapping:
/// title ← 0, auction ID ← 1, winning bid ← 4 (normalized with '$'),
/// fund ← 8. Never reads past `row_count()` and never mutates the source.
pub fn load_bids(source: &dyn TabularSource) -> LoadOutcome {
    let mut bids = Vec::new();

    for row in 0..source.row_count() {
        match read_bid(source, row) {
            Ok(bid) => bids.push(bid),
            Err(e) => {
                return LoadOutcome {
                    bids,
                    error: Some(e.context(format!("Failed to load bid at row {}", row))),
                }
            }
        }
    }

    LoadOutcome { bids, error: None }
}

fn read_bid(source: &dyn TabularSource, row: usize) -> Result<Bid> {
    let title = source.cell(row, columns::TITLE)?.to_string();
    let bid_id = source.cell(row, columns::BID_ID)?.to_string();
    let fund = source.cell(row, columns::FUND)?.to_string();
    let amount = normalize_amount(source.cell(row, columns::WINNING_BID)?, '$');

    Ok(Bid {
        bid_id,
        title,
        fund,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal in-memory source for exercising the loader without files.
    struct VecSource {
        rows: Vec<Vec<String>>,
    }

    impl VecSource {
        fn new(rows: Vec<Vec<&str>>) -> Self {
            VecSource {
                rows: rows
                    .into_iter()
                    .map(|r| r.into_iter().map(String::from).collect())
                    .collect(),
            }
        }
    }

    impl TabularSource for VecSource {
        fn row_count(&self) -> usize {
            self.rows.len()
        }

        fn cell(&self, row: usize, col: usize) -> Result<&str> {
            let r = self
                .rows
                .get(row)
                .ok_or_else(|| anyhow::anyhow!("row {} out of range", row))?;
            r.get(col)
                .map(|s| s.as_str())
                .ok_or_else(|| anyhow::anyhow!("column {} out of range", col))
        }
    }

    fn full_row(title: &str, bid_id: &str, amount: &str, fund: &str) -> Vec<String> {
        let mut row = vec![String::new(); columns::FIELD_COUNT];
        row[columns::TITLE] = title.to_string();
        row[columns::BID_ID] = bid_id.to_string();
        row[columns::WINNING_BID] = amount.to_string();
        row[columns::FUND] = fund.to_string();
        row
    }

    #[test]
    fn test_load_single_row_fixed_columns() {
        let source = VecSource {
            rows: vec![full_row("Widget", "B-1", "$10.00", "GENFUND")],
        };

        let outcome = load_bids(&source);
        assert!(outcome.is_complete());
        assert_eq!(outcome.bids.len(), 1);

        let bid = &outcome.bids[0];
        assert_eq!(bid.bid_id, "B-1");
        assert_eq!(bid.title, "Widget");
        assert_eq!(bid.fund, "GENFUND");
        assert_eq!(bid.amount, 10.0);
    }

    #[test]
    fn test_load_empty_source() {
        let source = VecSource::new(vec![]);
        let outcome = load_bids(&source);
        assert!(outcome.is_complete());
        assert!(outcome.bids.is_empty());
    }

    #[test]
    fn test_load_unparseable_amount_is_zero_not_error() {
        let source = VecSource {
            rows: vec![full_row("Gadget", "B-2", "n/a", "GENFUND")],
        };

        let outcome = load_bids(&source);
        assert!(outcome.is_complete());
        assert_eq!(outcome.bids[0].amount, 0.0);
    }

    #[test]
    fn test_load_short_row_keeps_prior_bids_and_reports_error() {
        // second row only has 3 columns, so fund access (col 8) fails
        let source = VecSource {
            rows: vec![
                full_row("Widget", "B-1", "$10.00", "GENFUND"),
                vec!["Broken".to_string(), "B-2".to_string(), String::new()],
                full_row("Never Read", "B-3", "$1.00", "GENFUND"),
            ],
        };

        let outcome = load_bids(&source);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.bids.len(), 1);
        assert_eq!(outcome.bids[0].title, "Widget");

        let msg = format!("{:#}", outcome.error.unwrap());
        assert!(msg.contains("row 1"), "error should name the row: {}", msg);
    }

    #[test]
    fn test_csv_source_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "bid_ledger_loader_test_{}.csv",
            std::process::id()
        ));
        let header: Vec<String> = (0..columns::FIELD_COUNT)
            .map(|i| format!("col{}", i))
            .collect();
        let body: Vec<String> = full_row("Widget", "B-1", "$1,234.56", "GENFUND")
            .into_iter()
            .map(|cell| format!("\"{}\"", cell))
            .collect();
        let contents = format!("{}\n{}\n", header.join(","), body.join(","));
        std::fs::write(&path, contents).unwrap();

        let source = CsvSource::from_path(&path).unwrap();
        assert_eq!(source.row_count(), 1);
        assert_eq!(source.cell(0, columns::TITLE).unwrap(), "Widget");
        assert!(source.cell(0, 99).is_err());
        assert!(source.cell(5, 0).is_err());

        let outcome = load_bids(&source);
        assert!(outcome.is_complete());
        assert_eq!(outcome.bids[0].amount, 1234.56);

        std::fs::remove_file(&path).ok();
    }
}
