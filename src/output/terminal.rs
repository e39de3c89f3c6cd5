//! Terminal output: key/value table, plain text and the derived views.
//!
//! Every renderer returns a `String` so callers decide where it goes.

use crate::models::{format_optional, BlockSummary};
use crate::processing::{AddressView, BitKind, BitRow, SubnetListing};
use colored::Colorize;
use itertools::Itertools;

/// Pad a value on the right to at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Result record as an aligned two column table.
pub fn render_table(summary: &BlockSummary) -> String {
    let rows = summary.rows();
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, v)| format!("{}  {}", format_field(k, width).bold(), v))
        .join("\n")
}

/// Result record as `Label: value` lines, the clipboard text form.
pub fn render_text(summary: &BlockSummary) -> String {
    summary
        .rows()
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .join("\n")
}

/// Subnet listing with a note when rows were left out.
pub fn render_subnets(listing: &SubnetListing) -> String {
    let mut lines = vec![format!(
        "{}  {}  {}  {}",
        format_field("Subnet", 18),
        format_field("First Host", 15),
        format_field("Last Host", 15),
        "Usable"
    )];
    lines.extend(listing.rows.iter().map(|row| {
        format!(
            "{}  {}  {}  {}",
            format_field(row.cidr, 18),
            format_field(format_optional(row.first_host()), 15),
            format_field(format_optional(row.last_host()), 15),
            row.usable_hosts
        )
    }));
    if listing.is_truncated() {
        lines.push(format!(
            "Showing first {} of {} subnets. Increase target prefix to narrow results.",
            listing.rows.len(),
            listing.subnet_count
        ));
    }
    lines.join("\n")
}

/// One page of addresses, or the pointer to the export.
pub fn render_address_view(view: &AddressView) -> String {
    match view {
        AddressView::ExportOnly { total } => {
            format!("Block has {total} addresses. Use CSV download for full list.")
        }
        AddressView::Page(page) => {
            let mut lines: Vec<String> = page
                .records
                .iter()
                .map(|r| {
                    format!(
                        "{}  {}  {}",
                        format_field(r.index, 8),
                        format_field(r.addr, 15),
                        r.role
                    )
                })
                .collect();
            lines.push(format!(
                "Showing {}-{} of {}",
                page.from(),
                page.to(),
                page.total
            ));
            lines.join("\n")
        }
    }
}

/// Bit rows, optionally colouring network and host bits apart.
pub fn render_bits(rows: &[BitRow], colorize: bool) -> String {
    rows.iter()
        .map(|row| {
            let bits: String = row
                .bits()
                .enumerate()
                .map(|(i, (bit, kind))| {
                    let digit = if bit { "1" } else { "0" };
                    let digit = match (colorize, kind) {
                        (false, _) => digit.to_string(),
                        (true, BitKind::Network) => digit.green().to_string(),
                        (true, BitKind::Host) => digit.yellow().to_string(),
                    };
                    // Octet separator.
                    if i > 0 && i % 8 == 0 {
                        format!(" {digit}")
                    } else {
                        digit
                    }
                })
                .collect();
            format!("{}  {}  {}", format_field(row.label, 8), bits, row.dotted)
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkBlock;
    use crate::processing::{address_page, bit_breakdown, enumerate_subnets};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "test      ");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 4), "42  ");
    }

    #[test]
    fn test_render_text() {
        let summary = NetworkBlock::compute("192.168.1.10", "24").unwrap().summary();
        let text = render_text(&summary);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Input: 192.168.1.10/24");
        assert_eq!(lines[1], "Network Address: 192.168.1.0");
        assert_eq!(lines[4], "Broadcast Address: 192.168.1.255");
        assert_eq!(lines[9], "CIDR Notation: 192.168.1.0/24");
    }

    #[test]
    fn test_render_table_contains_values() {
        let summary = NetworkBlock::compute("10.0.0.5", "31").unwrap().summary();
        let table = render_table(&summary);
        assert_eq!(table.lines().count(), 10);
        assert!(table.contains("10.0.0.4/31"));
        assert!(table.contains("N/A"));
    }

    #[test]
    fn test_render_subnets_note() {
        let block = NetworkBlock::compute("10.0.0.0", "8").unwrap();
        let listing = enumerate_subnets(&block, "24", 4).unwrap();
        let out = render_subnets(&listing);
        assert_eq!(out.lines().count(), 6);
        assert!(out.lines().nth(1).unwrap().starts_with("10.0.0.0/24"));
        assert!(out.ends_with(
            "Showing first 4 of 65536 subnets. Increase target prefix to narrow results."
        ));
    }

    #[test]
    fn test_render_address_view() {
        let block = NetworkBlock::compute("10.0.0.0", "30").unwrap();
        let out = render_address_view(&address_page(&block, 2, 1, 65536));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("10.0.0.2"));
        assert!(lines[1].ends_with("broadcast"));
        assert_eq!(lines[2], "Showing 3-4 of 4");

        let out = render_address_view(&AddressView::ExportOnly { total: 131072 });
        assert_eq!(
            out,
            "Block has 131072 addresses. Use CSV download for full list."
        );
    }

    #[test]
    fn test_render_bits_plain() {
        let block = NetworkBlock::compute("192.168.1.10", "24").unwrap();
        let out = render_bits(&bit_breakdown(&block), false);
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("IP"));
        assert!(first.contains("11000000 10101000 00000001 00001010"));
        assert!(first.ends_with("192.168.1.10"));
    }
}
