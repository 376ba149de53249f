//! CLI commands module

pub mod asn;
pub mod ip;
pub mod ix;
pub mod raw;
pub mod search;

use clap::{Parser, Subcommand};

use bgpview::api::response::ApiResponse;
use bgpview::output;

/// bgpview - BGPView routing metadata lookups
#[derive(Parser, Debug)]
#[command(name = "bgpview")]
#[command(version)]
#[command(about = "Look up ASNs, prefixes, IPs and IXs in the BGPView API", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: json, table, compact
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// ASN details and relationships
    Asn(asn::AsnArgs),

    /// Prefix details
    Prefix(ip::PrefixArgs),

    /// IP address details
    Ip(ip::IpArgs),

    /// Internet exchange details and members
    Ix(ix::IxArgs),

    /// Search ASNs and prefixes
    Search(search::SearchArgs),

    /// Raw API requests
    Raw(raw::RawArgs),
}

/// Warn when the service answered 200 but flagged the query as failed
pub fn warn_on_status<T>(response: &ApiResponse<T>) {
    if !response.is_ok() {
        output::warning(&format!(
            "API status '{}': {}",
            response.status, response.status_message
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bgpview", "asn", "AS61138", "peers", "--format", "json", "--timeout", "2",
        ])
        .unwrap();

        assert_eq!(cli.format.as_deref(), Some("json"));
        assert_eq!(cli.timeout.as_deref(), Some("2"));
        match cli.command {
            Commands::Asn(args) => {
                assert_eq!(args.asn, 61138);
                assert!(matches!(args.command, Some(asn::AsnCommand::Peers)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn search_takes_free_text() {
        let cli = Cli::try_parse_from(["bgpview", "search", "digital", "ocean"]).unwrap();
        match cli.command {
            Commands::Search(args) => assert_eq!(args.term(), "digital ocean"),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
