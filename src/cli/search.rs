//! Search command

use anyhow::{anyhow, Result};
use clap::Args;

use bgpview::config::{Config, OutputFormat};
use bgpview::output;
use bgpview::BgpViewClient;

use super::warn_on_status;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// ASN, IP, prefix, name or description to look for
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl SearchArgs {
    pub fn term(&self) -> String {
        self.query.join(" ")
    }
}

pub async fn execute(config: &Config, args: SearchArgs) -> Result<()> {
    let term = args.term();
    if term.trim().is_empty() {
        return Err(anyhow!("Search term cannot be empty"));
    }

    let client = BgpViewClient::from_config(config)?;
    let response = client.search(&term).await?;
    warn_on_status(&response);

    if config.output_format != OutputFormat::Table {
        return output::print_output(&response.data, &config.output_format);
    }

    let data = &response.data;

    output::section("ASNs", data.asns.len());
    output::table_header(&["ASN", "NAME", "CC", "RIR", "DESCRIPTION"]);
    for asn in &data.asns {
        output::print_search_asn(asn);
    }

    for (title, prefixes) in [
        ("IPv4 prefixes", &data.ipv4_prefixes),
        ("IPv6 prefixes", &data.ipv6_prefixes),
    ] {
        output::section(title, prefixes.len());
        output::table_header(&["PREFIX", "NAME", "CC", "RIR", "PARENT"]);
        for prefix in prefixes {
            output::print_search_prefix(prefix);
        }
    }

    Ok(())
}
