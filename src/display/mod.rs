/// Output rendering for resources
///
/// Every resource family has a displayer wrapping the typed collection the
/// service returned. Tabular mode renders columns in a fixed order with
/// human headers; JSON mode serializes the native wire schema untouched.
pub mod account;
pub mod action;
pub mod balance;
pub mod domain;
pub mod firewall;
pub mod floating_ip;
pub mod load_balancer;
pub mod region;
pub mod server;
pub mod vpc;

use std::collections::HashMap;
use std::io::Write;

use prettytable::{format, Cell, Row, Table};

use crate::error::Result;

pub use account::AccountDisplay;
pub use action::ActionDisplay;
pub use balance::BalanceDisplay;
pub use domain::{DomainDisplay, DomainRecordDisplay};
pub use firewall::FirewallDisplay;
pub use floating_ip::FloatingIpDisplay;
pub use load_balancer::LoadBalancerDisplay;
pub use region::RegionDisplay;
pub use server::ServerDisplay;
pub use vpc::VpcDisplay;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A renderable resource collection.
///
/// `kv` rows are keyed by the names in `cols`; a missing key renders as an
/// empty cell, never an error.
pub trait Displayable {
    /// Column keys, in display order.
    fn cols(&self) -> &'static [&'static str];

    /// Column key to header text.
    fn col_map(&self) -> HashMap<&'static str, &'static str>;

    /// One row per resource, keyed by column name.
    fn kv(&self) -> Vec<HashMap<&'static str, String>>;

    /// Native JSON serialization of the underlying collection.
    fn json(&self) -> Result<String>;
}

/// Render a displayable to the given writer.
pub fn render<W: Write>(item: &dyn Displayable, output: OutputFormat, out: &mut W) -> Result<()> {
    match output {
        OutputFormat::Json => {
            writeln!(out, "{}", item.json()?)?;
        }
        OutputFormat::Table => {
            let cols = item.cols();
            let headers = item.col_map();

            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_CLEAN);
            table.set_titles(Row::new(
                cols.iter()
                    .map(|c| Cell::new(headers.get(c).copied().unwrap_or(c)))
                    .collect(),
            ));
            for row in item.kv() {
                table.add_row(Row::new(
                    cols.iter()
                        .map(|c| Cell::new(row.get(c).map(String::as_str).unwrap_or("")))
                        .collect(),
                ));
            }
            table.print(out)?;
        }
    }
    Ok(())
}

/// `kv` helper for optional values; `None` renders as an empty cell.
pub(crate) fn opt_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Region;

    fn fixture_regions() -> RegionDisplay {
        RegionDisplay {
            regions: vec![
                Region {
                    name: "Sydney".into(),
                    slug: "syd".into(),
                    sizes: vec!["std-2vcpu".into()],
                    available: true,
                    features: vec![],
                },
                Region {
                    name: "Melbourne".into(),
                    slug: "mel".into(),
                    sizes: vec![],
                    available: false,
                    features: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_kv_keys_match_cols() {
        let display = fixture_regions();
        let cols: Vec<_> = display.cols().to_vec();
        for row in display.kv() {
            let mut keys: Vec<_> = row.keys().copied().collect();
            keys.sort_unstable();
            let mut expected = cols.clone();
            expected.sort_unstable();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_every_col_has_a_header() {
        let display = fixture_regions();
        let headers = display.col_map();
        for col in display.cols() {
            assert!(headers.contains_key(col), "missing header for {}", col);
        }
    }

    #[test]
    fn test_table_renders_rows_in_order() {
        let display = fixture_regions();
        let mut buf = Vec::new();
        render(&display, OutputFormat::Table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let syd = text.find("syd").unwrap();
        let mel = text.find("mel").unwrap();
        assert!(syd < mel);
    }

    #[test]
    fn test_json_preserves_wire_fields() {
        let display = fixture_regions();
        let mut buf = Vec::new();
        render(&display, OutputFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["slug"], "syd");
        assert_eq!(value[1]["available"], false);
    }
}
