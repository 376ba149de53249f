//! Prefix and IP commands

use anyhow::{anyhow, Context, Result};
use clap::Args;
use serde_json::Value;

use bgpview::api::models::{AsnSummary, PrefixData};
use bgpview::config::{Config, OutputFormat};
use bgpview::output;
use bgpview::BgpViewClient;

use super::warn_on_status;

#[derive(Args, Debug)]
pub struct PrefixArgs {
    /// Prefix in CIDR notation (192.209.63.0/24), or a base address followed by CIDR
    pub prefix: String,

    /// Prefix length when not given inline
    pub cidr: Option<u8>,
}

#[derive(Args, Debug)]
pub struct IpArgs {
    /// IPv4 or IPv6 address
    pub ip: String,
}

pub async fn execute_prefix(config: &Config, args: PrefixArgs) -> Result<()> {
    let client = BgpViewClient::from_config(config)?;
    let (ip, cidr) = split_prefix(&args.prefix, args.cidr)?;

    let response = client.prefix(ip, cidr).await?;
    warn_on_status(&response);

    if config.output_format == OutputFormat::Table {
        let (record, asns) = split_origins(&response.data)?;
        output::print_json_pretty(&record)?;
        output::section("Origin ASNs", asns.len());
        output::table_header(&["ASN", "NAME", "CC", "DESCRIPTION"]);
        for asn in asns {
            output::print_asn_summary(asn);
        }
    } else {
        output::print_output(&response.data, &config.output_format)?;
    }

    Ok(())
}

/// Prefix record without its origin list, which gets its own table
fn split_origins(data: &PrefixData) -> Result<(Value, &[AsnSummary])> {
    let mut record = serde_json::to_value(data)?;
    if let Some(fields) = record.as_object_mut() {
        fields.remove("asns");
    }
    Ok((record, &data.asns))
}

pub async fn execute_ip(config: &Config, args: IpArgs) -> Result<()> {
    let client = BgpViewClient::from_config(config)?;

    let response = client.ip(args.ip.trim()).await?;
    warn_on_status(&response);
    output::print_output(&response.data, &config.output_format)?;

    Ok(())
}

/// Split `ip/cidr`, or combine a bare address with an explicit length
pub fn split_prefix(prefix: &str, cidr: Option<u8>) -> Result<(&str, u8)> {
    match (prefix.split_once('/'), cidr) {
        (Some((ip, len)), None) => {
            let len = len
                .parse()
                .with_context(|| format!("Invalid prefix length in '{}'", prefix))?;
            Ok((ip, len))
        }
        (None, Some(len)) => Ok((prefix, len)),
        (Some(_), Some(len)) => Err(anyhow!(
            "Prefix length given twice: '{}' and {}",
            prefix,
            len
        )),
        (None, None) => Err(anyhow!(
            "Missing prefix length. Use <ip>/<cidr> or <ip> <cidr>"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_forms() {
        assert_eq!(
            split_prefix("192.209.63.0/24", None).unwrap(),
            ("192.209.63.0", 24)
        );
        assert_eq!(
            split_prefix("2a05:dfc0::", Some(29)).unwrap(),
            ("2a05:dfc0::", 29)
        );
        assert!(split_prefix("192.209.63.0", None).is_err());
        assert!(split_prefix("192.209.63.0/24", Some(24)).is_err());
        assert!(split_prefix("192.209.63.0/abc", None).is_err());
    }

    #[test]
    fn origins_are_left_out_of_the_record() {
        let data = PrefixData {
            prefix: "192.209.63.0/24".to_string(),
            asns: vec![AsnSummary {
                asn: 61138,
                name: "ZAPPIE-HOST-AS".to_string(),
                ..AsnSummary::default()
            }],
            ..PrefixData::default()
        };

        let (record, asns) = split_origins(&data).unwrap();
        assert!(record.get("asns").is_none());
        assert_eq!(record["prefix"], "192.209.63.0/24");
        assert_eq!(asns.len(), 1);
        assert_eq!(asns[0].asn, 61138);
    }
}
