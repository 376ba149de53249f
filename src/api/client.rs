//! HTTP client for the BGPView API

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::api::endpoints::{build_url, parse_base_url, Endpoint};
use crate::api::error::{Error, Result};
use crate::api::response::{
    AsnDownstreamsResponse, AsnIxsResponse, AsnPeersResponse, AsnPrefixesResponse, AsnResponse,
    AsnUpstreamsResponse, IpResponse, IxResponse, PrefixResponse, SearchResponse,
};
use crate::config::Config;

pub const DEFAULT_BASE_URL: &str = "https://api.bgpview.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!("bgpview/", env!("CARGO_PKG_VERSION"));

/// BGPView API client
///
/// Cheap to clone; clones share the underlying connection pool. Every call
/// is a single independent GET. Dropping the returned future cancels the
/// request.
#[derive(Debug, Clone)]
pub struct BgpViewClient {
    client: Client,
    base_url: Url,
}

impl BgpViewClient {
    /// Create a client for the production service with the default timeout
    pub fn new() -> Result<Self> {
        Self::from_parts(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_parts(&config.base_url, config.timeout)
    }

    fn from_parts(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(Error::Build)?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Point the client at another service root
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the HTTP transport, e.g. to change the timeout or proxy
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch an endpoint and decode its body into `T`
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let url = endpoint.url(&self.base_url)?;
        self.get(url).await
    }

    /// Make a raw GET request to any service path (returns Value)
    pub async fn get_raw(&self, path: &str) -> Result<Value> {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut url = build_url(&self.base_url, &segments, &[])?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }

        debug!("GET (raw) {}", url);
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        trace!("Response ({}): {}", status, text);

        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Get ASN details
    pub async fn asn(&self, asn: u32) -> Result<AsnResponse> {
        self.fetch(&Endpoint::Asn(asn)).await
    }

    /// Get prefixes announced by an ASN
    pub async fn asn_prefixes(&self, asn: u32) -> Result<AsnPrefixesResponse> {
        self.fetch(&Endpoint::AsnPrefixes(asn)).await
    }

    pub async fn asn_peers(&self, asn: u32) -> Result<AsnPeersResponse> {
        self.fetch(&Endpoint::AsnPeers(asn)).await
    }

    pub async fn asn_upstreams(&self, asn: u32) -> Result<AsnUpstreamsResponse> {
        self.fetch(&Endpoint::AsnUpstreams(asn)).await
    }

    pub async fn asn_downstreams(&self, asn: u32) -> Result<AsnDownstreamsResponse> {
        self.fetch(&Endpoint::AsnDownstreams(asn)).await
    }

    /// Get internet exchanges an ASN is present at
    pub async fn asn_ixs(&self, asn: u32) -> Result<AsnIxsResponse> {
        self.fetch(&Endpoint::AsnIxs(asn)).await
    }

    /// Get prefix details, e.g. `prefix("192.209.63.0", 24)`
    pub async fn prefix(&self, ip: &str, cidr: u8) -> Result<PrefixResponse> {
        self.fetch(&Endpoint::Prefix(ip.to_string(), cidr)).await
    }

    /// Get details for a single IPv4 or IPv6 address
    pub async fn ip(&self, ip: &str) -> Result<IpResponse> {
        self.fetch(&Endpoint::Ip(ip.to_string())).await
    }

    /// Get internet exchange details and members
    pub async fn ix(&self, ix_id: u32) -> Result<IxResponse> {
        self.fetch(&Endpoint::Ix(ix_id)).await
    }

    /// Search ASNs and prefixes by ASN, IP, prefix, name or description
    pub async fn search(&self, term: &str) -> Result<SearchResponse> {
        self.fetch(&Endpoint::Search(term.to_string())).await
    }
}
