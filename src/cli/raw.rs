//! Raw API command

use anyhow::Result;
use clap::Args;

use bgpview::config::Config;
use bgpview::output;
use bgpview::BgpViewClient;

#[derive(Args, Debug)]
pub struct RawArgs {
    /// API path (e.g., /asn/61138/ixs, /search?query_term=cloudflare)
    pub path: String,
}

pub async fn execute(config: &Config, args: RawArgs) -> Result<()> {
    let client = BgpViewClient::from_config(config)?;

    let response = client.get_raw(&args.path).await?;
    output::print_output(&response, &config.output_format)?;

    Ok(())
}
