//! Output formatting module

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use crate::api::models::{
    AsnIxData, AsnNeighbour, AsnPrefix, AsnSummary, IxMember, SearchAsn, SearchPrefix,
};
use crate::config::OutputFormat;

/// Print output in the configured format
pub fn print_output<T: Serialize>(data: &T, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Compact => print_compact(data),
        OutputFormat::Table => print_json_pretty(data), // Records without a table layout
    }
}

/// Print as formatted JSON
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string(data)?);
    Ok(())
}

/// Print as pretty JSON
pub fn print_json_pretty<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print compact output
pub fn print_compact<T: Serialize>(data: &T) -> Result<()> {
    let value = serde_json::to_value(data)?;
    print_value_compact(&value, 0);
    Ok(())
}

fn print_value_compact(value: &Value, indent: usize) {
    let prefix = "  ".repeat(indent);

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    Value::Object(_) | Value::Array(_) => {
                        println!("{}{}: ", prefix, key.cyan());
                        print_value_compact(val, indent + 1);
                    }
                    _ => {
                        println!("{}{}: {}", prefix, key.cyan(), format_value(val));
                    }
                }
            }
        }
        Value::Array(arr) => {
            for (i, val) in arr.iter().enumerate() {
                println!("{}[{}]", prefix, i.to_string().dimmed());
                print_value_compact(val, indent + 1);
            }
        }
        _ => {
            println!("{}{}", prefix, format_value(value));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".dimmed().to_string(),
        Value::Bool(b) => {
            if *b {
                "true".green().to_string()
            } else {
                "false".red().to_string()
            }
        }
        Value::Number(n) => n.to_string().yellow().to_string(),
        Value::String(s) => s.clone(),
        _ => value.to_string(),
    }
}

/// Replace an empty field with a dash so columns stay aligned
fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Print error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Print warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

/// Print a table header
pub fn table_header(columns: &[&str]) {
    let header: Vec<String> = columns
        .iter()
        .map(|c| c.bold().underline().to_string())
        .collect();
    println!("{}", header.join("\t"));
}

/// Print a section title above a table
pub fn section(title: &str, count: usize) {
    println!();
    println!("{} {}", title.bold(), format!("({})", count).dimmed());
}

/// Print announced prefix in table format
pub fn print_prefix(prefix: &AsnPrefix) {
    let roa = match prefix.roa_status.as_str() {
        "Valid" => prefix.roa_status.green().to_string(),
        "Invalid" => prefix.roa_status.red().to_string(),
        other => or_dash(other).dimmed().to_string(),
    };

    println!(
        "{}\t{}\t{}\t{}\t{}",
        prefix.prefix.cyan(),
        or_dash(&prefix.name).bold(),
        or_dash(&prefix.country_code),
        roa,
        or_dash(&prefix.parent.prefix).dimmed()
    );
}

/// Print peer or prefix origin in table format
pub fn print_asn_summary(asn: &AsnSummary) {
    println!(
        "{}\t{}\t{}\t{}",
        format!("AS{}", asn.asn).yellow(),
        or_dash(&asn.name).bold(),
        or_dash(&asn.country_code),
        or_dash(&asn.description).dimmed()
    );
}

/// Print upstream or downstream in table format
pub fn print_neighbour(neighbour: &AsnNeighbour) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        format!("AS{}", neighbour.asn).yellow(),
        or_dash(&neighbour.name).bold(),
        or_dash(&neighbour.country_code),
        neighbour.bgp_paths.len().to_string().cyan(),
        or_dash(&neighbour.description).dimmed()
    );
}

/// Print IX presence in table format
pub fn print_asn_ix(ix: &AsnIxData) {
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        ix.ix_id.to_string().yellow(),
        or_dash(&ix.name).bold(),
        or_dash(&ix.country_code),
        or_dash(&ix.ipv4_address),
        or_dash(&ix.ipv6_address),
        format_speed(ix.speed).cyan()
    );
}

/// Print IX member in table format
pub fn print_ix_member(member: &IxMember) {
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        format!("AS{}", member.asn).yellow(),
        or_dash(&member.name).bold(),
        or_dash(&member.country_code),
        or_dash(&member.ipv4_address),
        or_dash(&member.ipv6_address),
        format_speed(member.speed).cyan()
    );
}

/// Print ASN search hit in table format
pub fn print_search_asn(asn: &SearchAsn) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        format!("AS{}", asn.asn).yellow(),
        or_dash(&asn.name).bold(),
        or_dash(&asn.country_code),
        or_dash(&asn.rir_name).cyan(),
        or_dash(&asn.description).dimmed()
    );
}

/// Print prefix search hit in table format
pub fn print_search_prefix(prefix: &SearchPrefix) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        prefix.prefix.cyan(),
        or_dash(&prefix.name).bold(),
        or_dash(&prefix.country_code),
        or_dash(&prefix.rir_name),
        or_dash(&prefix.parent_prefix).dimmed()
    );
}

/// Port speed given in Mbps
pub fn format_speed(mbps: u64) -> String {
    match mbps {
        0 => "-".to_string(),
        m if m >= 1000 && m % 1000 == 0 => format!("{}G", m / 1000),
        m => format!("{}M", m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds() {
        assert_eq!(format_speed(0), "-");
        assert_eq!(format_speed(100), "100M");
        assert_eq!(format_speed(1000), "1G");
        assert_eq!(format_speed(10000), "10G");
        assert_eq!(format_speed(2500), "2500M");
    }

    #[test]
    fn strings_are_printed_bare() {
        assert_eq!(format_value(&Value::String("RIPE".into())), "RIPE");
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("NZ"), "NZ");
    }
}
