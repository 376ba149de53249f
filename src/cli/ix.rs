//! IX command

use anyhow::Result;
use clap::Args;

use bgpview::config::{Config, OutputFormat};
use bgpview::output;
use bgpview::BgpViewClient;

use super::warn_on_status;

#[derive(Args, Debug)]
pub struct IxArgs {
    /// Internet exchange ID
    pub id: u32,
}

pub async fn execute(config: &Config, args: IxArgs) -> Result<()> {
    let client = BgpViewClient::from_config(config)?;

    let response = client.ix(args.id).await?;
    warn_on_status(&response);

    if config.output_format != OutputFormat::Table {
        return output::print_output(&response.data, &config.output_format);
    }

    let ix = &response.data;
    println!("{} - {}", ix.name, ix.name_full);
    println!("{}, {}  {}", ix.city, ix.country_code, ix.website);
    println!("tech: {} {}", ix.tech_email, ix.tech_phone);
    println!("policy: {} {}", ix.policy_email, ix.policy_phone);

    output::section("Members", ix.members.len());
    output::table_header(&["ASN", "NAME", "CC", "IPV4", "IPV6", "SPEED"]);
    for member in &ix.members {
        output::print_ix_member(member);
    }

    if ix.members_count as usize != ix.members.len() {
        output::info(&format!("Reported member count: {}", ix.members_count));
    }

    Ok(())
}
