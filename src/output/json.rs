//! JSON documents for the result record and derived views.

use crate::error::ExportError;
use crate::models::BlockSummary;
use serde::Serialize;

/// Pretty-printed JSON with two space indentation.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn summary_json(summary: &BlockSummary) -> Result<String, ExportError> {
    to_json(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkBlock;
    use crate::processing::enumerate_subnets;
    use serde_json::Value;

    #[test]
    fn test_summary_json_fields() {
        let summary = NetworkBlock::compute("192.168.1.10", "24").unwrap().summary();
        let json = summary_json(&summary).unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["input"], "192.168.1.10/24");
        assert_eq!(v["network"], "192.168.1.0");
        assert_eq!(v["broadcast"], "192.168.1.255");
        assert_eq!(v["firstHost"], "192.168.1.1");
        assert_eq!(v["lastHost"], "192.168.1.254");
        assert_eq!(v["totalAddresses"], 256);
        assert_eq!(v["usableHosts"], 254);
        assert_eq!(v["netmask"], "255.255.255.0");
        assert_eq!(v["wildcard"], "0.0.0.255");
        assert_eq!(v["cidr"], "192.168.1.0/24");
        assert!(json.starts_with("{\n  \"input\""));
    }

    #[test]
    fn test_summary_json_total_at_slash_0() {
        let summary = NetworkBlock::compute("0.0.0.0", "0").unwrap().summary();
        let v: Value = serde_json::from_str(&summary_json(&summary).unwrap()).unwrap();
        assert_eq!(v["totalAddresses"], 4294967296u64);
    }

    #[test]
    fn test_subnets_json() {
        let block = NetworkBlock::compute("192.168.0.0", "22").unwrap();
        let listing = enumerate_subnets(&block, "23", 1024).unwrap();
        let v: Value = serde_json::from_str(&to_json(&listing).unwrap()).unwrap();
        assert_eq!(v["base"], "192.168.0.0/22");
        assert_eq!(v["target"], 23);
        assert_eq!(v["subnetCount"], 2);
        assert_eq!(v["rows"][1]["cidr"], "192.168.2.0/23");
        assert_eq!(v["rows"][1]["usableHosts"], 510);
    }
}
