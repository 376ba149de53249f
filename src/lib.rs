//! Typed client for the BGPView routing metadata API
//!
//! ```no_run
//! # async fn run() -> bgpview::api::Result<()> {
//! let client = bgpview::BgpViewClient::new()?;
//! let asn = client.asn(61138).await?;
//! println!("{} ({})", asn.data.name, asn.data.country_code);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod output;

pub use api::{BgpViewClient, Endpoint, Error};
