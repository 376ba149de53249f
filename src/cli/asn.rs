//! ASN command

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use bgpview::api::models::AsnNeighbour;
use bgpview::config::{Config, OutputFormat};
use bgpview::output;
use bgpview::BgpViewClient;

use super::warn_on_status;

#[derive(Args, Debug)]
pub struct AsnArgs {
    /// AS number, with or without the AS prefix
    #[arg(value_parser = parse_asn)]
    pub asn: u32,

    #[command(subcommand)]
    pub command: Option<AsnCommand>,
}

#[derive(Subcommand, Debug)]
pub enum AsnCommand {
    /// Show ASN details
    Info,

    /// List announced IPv4 and IPv6 prefixes
    Prefixes,

    /// List peers
    Peers,

    /// List upstream providers
    Upstreams,

    /// List downstream customers
    Downstreams,

    /// List internet exchanges the ASN is present at
    Ixs,
}

pub async fn execute(config: &Config, args: AsnArgs) -> Result<()> {
    let client = BgpViewClient::from_config(config)?;
    let format = &config.output_format;
    let table = *format == OutputFormat::Table;

    match args.command.unwrap_or(AsnCommand::Info) {
        AsnCommand::Info => {
            let response = client.asn(args.asn).await?;
            warn_on_status(&response);
            output::print_output(&response.data, format)?;
        }

        AsnCommand::Prefixes => {
            let response = client.asn_prefixes(args.asn).await?;
            warn_on_status(&response);

            if table {
                let data = &response.data;
                let families = [("IPv4", &data.ipv4_prefixes), ("IPv6", &data.ipv6_prefixes)];
                for (title, prefixes) in families {
                    output::section(title, prefixes.len());
                    output::table_header(&["PREFIX", "NAME", "CC", "ROA", "PARENT"]);
                    for prefix in prefixes {
                        output::print_prefix(prefix);
                    }
                }
            } else {
                output::print_output(&response.data, format)?;
            }
        }

        AsnCommand::Peers => {
            let response = client.asn_peers(args.asn).await?;
            warn_on_status(&response);

            if table {
                let data = &response.data;
                let families = [("IPv4", &data.ipv4_peers), ("IPv6", &data.ipv6_peers)];
                for (title, peers) in families {
                    output::section(title, peers.len());
                    output::table_header(&["ASN", "NAME", "CC", "DESCRIPTION"]);
                    for peer in peers {
                        output::print_asn_summary(peer);
                    }
                }
            } else {
                output::print_output(&response.data, format)?;
            }
        }

        AsnCommand::Upstreams => {
            let response = client.asn_upstreams(args.asn).await?;
            warn_on_status(&response);

            if table {
                let data = &response.data;
                print_neighbours(&data.ipv4_upstreams, &data.ipv6_upstreams);
            } else {
                output::print_output(&response.data, format)?;
            }
        }

        AsnCommand::Downstreams => {
            let response = client.asn_downstreams(args.asn).await?;
            warn_on_status(&response);

            if table {
                let data = &response.data;
                print_neighbours(&data.ipv4_downstreams, &data.ipv6_downstreams);
            } else {
                output::print_output(&response.data, format)?;
            }
        }

        AsnCommand::Ixs => {
            let response = client.asn_ixs(args.asn).await?;
            warn_on_status(&response);

            if table {
                output::table_header(&["ID", "NAME", "CC", "IPV4", "IPV6", "SPEED"]);
                for ix in &response.data {
                    output::print_asn_ix(ix);
                }
                output::info(&format!("Total: {} exchanges", response.data.len()));
            } else {
                output::print_output(&response.data, format)?;
            }
        }
    }

    Ok(())
}

fn print_neighbours(ipv4: &[AsnNeighbour], ipv6: &[AsnNeighbour]) {
    for (title, neighbours) in [("IPv4", ipv4), ("IPv6", ipv6)] {
        output::section(title, neighbours.len());
        output::table_header(&["ASN", "NAME", "CC", "PATHS", "DESCRIPTION"]);
        for neighbour in neighbours {
            output::print_neighbour(neighbour);
        }
    }
}

/// Accepts `61138`, `AS61138` or `as61138`
pub fn parse_asn(value: &str) -> Result<u32> {
    let digits = value
        .strip_prefix("AS")
        .or_else(|| value.strip_prefix("as"))
        .unwrap_or(value);

    digits
        .parse()
        .map_err(|_| anyhow!("'{}' is not a valid AS number", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asn_forms() {
        assert_eq!(parse_asn("61138").unwrap(), 61138);
        assert_eq!(parse_asn("AS61138").unwrap(), 61138);
        assert_eq!(parse_asn("as4200000000").unwrap(), 4_200_000_000);
        assert!(parse_asn("AS").is_err());
        assert!(parse_asn("ASX").is_err());
        assert!(parse_asn("-1").is_err());
        assert!(parse_asn("4294967296").is_err());
    }
}
