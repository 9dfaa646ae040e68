//! Loading portfolio holdings from CSV.
//!
//! The file must carry `fund_id`, `asset_type`, `quantity` and `price`
//! columns. `asset_name` is optional. A `market_value` column, if present,
//! is ignored: market value is always recomputed from quantity and price.

use crate::error::{DataError, Result};
use crate::schema::PortfolioHolding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read holdings from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be parsed.
pub fn read_holdings_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PortfolioHolding>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let holdings = read_holdings(file, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), rows = holdings.len(), "loaded holdings");
    Ok(holdings)
}

/// Read holdings from any CSV source with a header row.
///
/// `source_name` is only used in error messages.
///
/// # Errors
///
/// Returns [`DataError::InvalidRow`] for the first row that fails to parse.
pub fn read_holdings<R: Read>(reader: R, source_name: &str) -> Result<Vec<PortfolioHolding>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<PortfolioHolding>()
        .map(|result| {
            result.map_err(|e| DataError::InvalidRow {
                line: e.position().map_or(0, csv::Position::line),
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AssetClass;

    #[test]
    fn test_read_full_schema() {
        let csv = "fund_id,asset_type,asset_name,quantity,price,market_value\n\
                   FUND0001,Equity,Acme Corp,1000,100.0,999\n\
                   FUND0001,Real Estate,Tower One,10,2500.5,0\n";
        let holdings = read_holdings(csv.as_bytes(), "inline").unwrap();

        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].market_value(), 100_000.0);
        assert_eq!(*holdings[1].asset_type(), AssetClass::RealEstate);
        assert_eq!(holdings[1].market_value(), 25_005.0);
    }

    #[test]
    fn test_asset_name_is_optional() {
        let csv = "fund_id,asset_type,quantity,price\nF3,Unknown,100,100\n";
        let holdings = read_holdings(csv.as_bytes(), "inline").unwrap();

        assert_eq!(holdings[0].asset_name(), "");
        assert_eq!(*holdings[0].asset_type(), AssetClass::Other("Unknown".into()));
    }

    #[test]
    fn test_bad_row_reports_line() {
        let csv = "fund_id,asset_type,quantity,price\nF1,Cash,ten,1.0\n";
        let err = read_holdings(csv.as_bytes(), "holdings.csv").unwrap_err();

        match err {
            DataError::InvalidRow {
                line, source_name, ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(source_name, "holdings.csv");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_holdings_csv("/nonexistent/holdings.csv"),
            Err(DataError::Io(_))
        ));
    }
}
