//! Endpoint definitions and URL assembly

use std::fmt;

use reqwest::Url;

use crate::api::error::{Error, Result};

/// A single BGPView resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Asn(u32),
    AsnPrefixes(u32),
    AsnPeers(u32),
    AsnUpstreams(u32),
    AsnDownstreams(u32),
    AsnIxs(u32),
    /// Base address and prefix length
    Prefix(String, u8),
    Ip(String),
    Ix(u32),
    Search(String),
}

impl Endpoint {
    /// Path segments below the base URL, unescaped
    pub fn segments(&self) -> Vec<String> {
        match self {
            Endpoint::Asn(asn) => vec!["asn".into(), asn.to_string()],
            Endpoint::AsnPrefixes(asn) => vec!["asn".into(), asn.to_string(), "prefixes".into()],
            Endpoint::AsnPeers(asn) => vec!["asn".into(), asn.to_string(), "peers".into()],
            Endpoint::AsnUpstreams(asn) => vec!["asn".into(), asn.to_string(), "upstreams".into()],
            Endpoint::AsnDownstreams(asn) => {
                vec!["asn".into(), asn.to_string(), "downstreams".into()]
            }
            Endpoint::AsnIxs(asn) => vec!["asn".into(), asn.to_string(), "ixs".into()],
            Endpoint::Prefix(ip, cidr) => vec!["prefix".into(), ip.clone(), cidr.to_string()],
            Endpoint::Ip(ip) => vec!["ip".into(), ip.clone()],
            Endpoint::Ix(id) => vec!["ix".into(), id.to_string()],
            Endpoint::Search(_) => vec!["search".into()],
        }
    }

    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            Endpoint::Search(term) => vec![("query_term", term.as_str())],
            _ => Vec::new(),
        }
    }

    /// Resolve against `base`, keeping any path the base already carries
    pub fn url(&self, base: &Url) -> Result<Url> {
        if let Endpoint::Prefix(value, _) | Endpoint::Ip(value) = self {
            // Dot segments would be dropped here or collapsed by the server.
            let decoded = value.replace("%2e", ".").replace("%2E", ".");
            if matches!(decoded.as_str(), "" | "." | "..") {
                return Err(Error::invalid_url(
                    self.to_string(),
                    format!("{:?} is not a usable address", value),
                ));
            }
        }

        let segments = self.segments();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        build_url(base, &segments, &self.query())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments().join("/"))
    }
}

/// Append `segments` to `base` one by one, escaping each as a single path segment.
///
/// `/` inside a segment is percent-encoded, `:` is left as is so IPv6
/// addresses stay readable.
pub fn build_url(base: &Url, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|_| Error::invalid_url(base.as_str(), "base URL cannot have a path"))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

/// Parse and validate a base URL
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|e| Error::invalid_url(base, e))?;

    if url.cannot_be_a_base() {
        return Err(Error::invalid_url(base, "base URL cannot have a path"));
    }

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::invalid_url(
            base,
            format!("unsupported scheme: {}", scheme),
        )),
    }
}
