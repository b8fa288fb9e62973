// Bid record model + the fixed CSV column layout

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column layout of the monthly-sales CSV.
///
/// The indices are a fixed contract with the data source, not configuration:
/// every reader and writer in this crate goes through these names instead of
/// magic numbers. The source file carries 21 columns; only four of them are
/// meaningful to the ledger, the rest stay empty on append.
pub mod columns {
    /// Auction Title
    pub const TITLE: usize = 0;
    /// Auction ID
    pub const BID_ID: usize = 1;
    /// Winning Bid (currency text, e.g. "$1,234.56")
    pub const WINNING_BID: usize = 4;
    /// Fund
    pub const FUND: usize = 8;
    /// Total columns per row in the source file
    pub const FIELD_COUNT: usize = 21;
}

/// One bid entry from the auction ledger.
///
/// `title` is the sole sort key; both sort engines compare it with plain
/// `String` ordering (code-unit order, case-sensitive). `bid_id` is opaque
/// and not required to be unique. `fund` is carried but never compared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub bid_id: String,
    pub title: String,
    pub fund: String,
    /// Normalized winning bid; 0.0 when the source text was unparseable
    pub amount: f64,
}

impl Bid {
    pub fn new(bid_id: String, title: String, fund: String, amount: f64) -> Self {
        Bid {
            bid_id,
            title,
            fund,
            amount,
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Auction ID: {} | Title: {} | Winning Bid: ${:.2} | Fund: {}",
            self.bid_id, self.title, self.amount, self.fund
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_amount_is_zero() {
        let bid = Bid::default();
        assert_eq!(bid.amount, 0.0);
        assert!(bid.title.is_empty());
    }

    #[test]
    fn test_display_formats_amount_two_decimals() {
        let bid = Bid::new(
            "B-1".to_string(),
            "Widget".to_string(),
            "GENFUND".to_string(),
            10.0,
        );
        let rendered = bid.to_string();
        assert_eq!(
            rendered,
            "Auction ID: B-1 | Title: Widget | Winning Bid: $10.00 | Fund: GENFUND"
        );
    }

    #[test]
    fn test_column_layout() {
        assert_eq!(columns::TITLE, 0);
        assert_eq!(columns::BID_ID, 1);
        assert_eq!(columns::WINNING_BID, 4);
        assert_eq!(columns::FUND, 8);
        assert_eq!(columns::FIELD_COUNT, 21);
    }
}
