//! CSV output for address exports.

use crate::models::NetworkBlock;
use crate::processing::AddressExport;

pub const CSV_HEADER: &str = "index,ip,role";
pub const CSV_MIME: &str = "text/csv";

/// Render an export as `index,ip,role` lines.
///
/// A trailing comment line marks exports cut short by the row cap.
pub fn render_csv(export: &AddressExport) -> String {
    let mut lines = Vec::with_capacity(export.records.len() + 2);
    lines.push(CSV_HEADER.to_string());
    lines.extend(
        export
            .records
            .iter()
            .map(|r| format!("{},{},{}", r.index, r.addr, r.role)),
    );
    if export.is_truncated() {
        lines.push(format!("# Truncated at {} rows", export.limit));
    }
    lines.join("\n")
}

/// Download name for a block's address list, e.g. `addresses-10.0.0.0-24.csv`.
pub fn csv_filename(block: &NetworkBlock) -> String {
    format!("addresses-{}.csv", block.cidr().to_string().replace('/', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::export_addresses;

    #[test]
    fn test_render_csv() {
        let block = NetworkBlock::compute("10.0.0.6", "30").unwrap();
        let csv = render_csv(&export_addresses(&block, 131072));
        assert_eq!(
            csv,
            "index,ip,role\n1,10.0.0.4,network\n2,10.0.0.5,host\n3,10.0.0.6,host\n4,10.0.0.7,broadcast"
        );
    }

    #[test]
    fn test_render_csv_truncated() {
        let block = NetworkBlock::compute("10.0.0.0", "24").unwrap();
        let csv = render_csv(&export_addresses(&block, 3));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "3,10.0.0.2,host");
        assert_eq!(lines[4], "# Truncated at 3 rows");
    }

    #[test]
    fn test_render_csv_exactly_at_cap() {
        let block = NetworkBlock::compute("10.0.0.0", "30").unwrap();
        let csv = render_csv(&export_addresses(&block, 4));
        assert!(!csv.contains("Truncated"));
    }

    #[test]
    fn test_csv_filename() {
        let block = NetworkBlock::compute("192.168.1.10", "24").unwrap();
        assert_eq!(csv_filename(&block), "addresses-192.168.1.0-24.csv");
    }
}
