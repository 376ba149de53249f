//! Payload types carried in the `data` field of each response
//!
//! Every field falls back to its zero value when the key is missing or
//! carries `null`, so a sparse record decodes to empty strings, zeros and
//! empty lists rather than an error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Declares a payload struct whose fields all tolerate absence and `null`.
macro_rules! payload {
    (
        $(#[$attr:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$field_attr])*
                #[serde(deserialize_with = "nullable")]
                pub $field: $ty,
            )*
        }
    };
}

payload! {
    /// `GET /asn/{asn}`
    pub struct AsnData {
        pub asn: u32,
        pub name: String,
        pub description_short: String,
        pub description_full: Vec<String>,
        pub country_code: String,
        pub website: String,
        pub email_contacts: Vec<String>,
        pub abuse_contacts: Vec<String>,
        pub looking_glass: String,
        pub traffic_estimation: String,
        pub traffic_ratio: String,
        pub owner_address: Vec<String>,
        pub rir_allocation: Allocation,
        pub date_updated: String,
    }
}

payload! {
    /// RIR allocation block as reported for ASN and prefix lookups
    pub struct Allocation {
        pub rir_name: String,
        pub country_code: String,
        pub ip: String,
        pub cidr: u8,
        pub prefix: String,
        pub date_allocated: String,
    }
}

payload! {
    /// RIR allocation block as reported for IP lookups.
    ///
    /// The service sends `cidr` as a string here, unlike [`Allocation`].
    pub struct IpAllocation {
        pub rir_name: String,
        pub country_code: String,
        pub ip: String,
        pub cidr: String,
        pub prefix: String,
        pub date_allocated: String,
    }
}

payload! {
    /// `GET /asn/{asn}/prefixes`
    pub struct AsnPrefixesData {
        pub ipv4_prefixes: Vec<AsnPrefix>,
        pub ipv6_prefixes: Vec<AsnPrefix>,
    }
}

payload! {
    pub struct AsnPrefix {
        pub prefix: String,
        pub ip: String,
        pub cidr: u8,
        pub roa_status: String,
        pub name: String,
        pub description: String,
        pub country_code: String,
        pub parent: ParentPrefix,
    }
}

payload! {
    pub struct ParentPrefix {
        pub prefix: String,
        pub ip: String,
        pub cidr: u8,
        pub rir_name: String,
    }
}

payload! {
    /// `GET /asn/{asn}/peers`
    pub struct AsnPeersData {
        pub ipv4_peers: Vec<AsnSummary>,
        pub ipv6_peers: Vec<AsnSummary>,
    }
}

payload! {
    /// Short ASN record used for peers and prefix origins
    pub struct AsnSummary {
        pub asn: u32,
        pub name: String,
        pub description: String,
        pub country_code: String,
    }
}

payload! {
    /// `GET /asn/{asn}/upstreams`
    pub struct AsnUpstreamsData {
        pub ipv4_upstreams: Vec<AsnNeighbour>,
        pub ipv6_upstreams: Vec<AsnNeighbour>,
    }
}

payload! {
    /// `GET /asn/{asn}/downstreams`
    pub struct AsnDownstreamsData {
        pub ipv4_downstreams: Vec<AsnNeighbour>,
        pub ipv6_downstreams: Vec<AsnNeighbour>,
    }
}

payload! {
    /// Upstream or downstream neighbour with the observed AS paths
    pub struct AsnNeighbour {
        pub asn: u32,
        pub name: String,
        pub description: String,
        pub country_code: String,
        pub bgp_paths: Vec<String>,
    }
}

payload! {
    /// One entry of `GET /asn/{asn}/ixs`
    pub struct AsnIxData {
        pub ix_id: u32,
        pub name: String,
        pub name_full: String,
        pub country_code: String,
        pub ipv4_address: String,
        pub ipv6_address: String,
        /// Port speed in Mbps
        pub speed: u64,
    }
}

payload! {
    /// `GET /prefix/{ip}/{cidr}`, also reused inside IP lookups
    pub struct PrefixData {
        pub prefix: String,
        pub ip: String,
        pub cidr: u8,
        pub asns: Vec<AsnSummary>,
        pub name: String,
        pub description_short: String,
        pub description_full: Vec<String>,
        pub email_contacts: Vec<String>,
        pub abuse_contacts: Vec<String>,
        pub owner_address: Vec<String>,
        pub country_codes: CountryCodes,
        pub rir_allocation: Allocation,
        pub maxmind: MaxMind,
        pub date_updated: String,
    }
}

payload! {
    pub struct CountryCodes {
        pub whois_country_code: String,
        pub rir_allocation_country_code: String,
        pub maxmind_country_code: String,
    }
}

payload! {
    /// MaxMind geolocation; `city` is passed through untouched
    pub struct MaxMind {
        pub country_code: String,
        pub city: Value,
    }
}

payload! {
    /// `GET /ip/{ip}`
    pub struct IpData {
        pub prefixes: Vec<PrefixData>,
        pub rir_allocation: IpAllocation,
        pub maxmind: MaxMind,
        pub related_prefixes: Vec<PrefixData>,
    }
}

/// `GET /ix/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IxData {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub name_full: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
    #[serde(deserialize_with = "nullable")]
    pub tech_email: String,
    #[serde(deserialize_with = "nullable")]
    pub tech_phone: String,
    #[serde(deserialize_with = "nullable")]
    pub policy_email: String,
    #[serde(deserialize_with = "nullable")]
    pub policy_phone: String,
    #[serde(deserialize_with = "nullable")]
    pub city: String,
    #[serde(deserialize_with = "nullable")]
    pub country_code: String,
    /// `None` when the key is missing, `Some(Value::Null)` for an explicit `null`
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub url_stats: Option<Value>,
    #[serde(deserialize_with = "nullable")]
    pub members_count: u32,
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<IxMember>,
}

payload! {
    pub struct IxMember {
        pub asn: u32,
        pub name: String,
        pub description: String,
        pub country_code: String,
        pub ipv4_address: String,
        pub ipv6_address: String,
        pub speed: u64,
    }
}

payload! {
    /// `GET /search?query_term=...`
    pub struct SearchData {
        pub asns: Vec<SearchAsn>,
        pub ipv4_prefixes: Vec<SearchPrefix>,
        pub ipv6_prefixes: Vec<SearchPrefix>,
    }
}

payload! {
    pub struct SearchAsn {
        pub asn: u32,
        pub name: String,
        pub description: String,
        pub country_code: String,
        pub email_contacts: Vec<String>,
        pub abuse_contacts: Vec<String>,
        pub rir_name: String,
    }
}

payload! {
    pub struct SearchPrefix {
        pub prefix: String,
        pub ip: String,
        pub cidr: u8,
        pub name: String,
        pub country_code: String,
        pub description: String,
        pub email_contacts: Vec<String>,
        pub abuse_contacts: Vec<String>,
        pub rir_name: String,
        pub parent_prefix: String,
        pub parent_ip: String,
        pub parent_cidr: u8,
    }
}

// `null` and a missing key both leave the zero value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// A present key always yields `Some`, even for `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_prefix_entry_uses_zero_values() {
        let entry: AsnPrefix = serde_json::from_value(json!({
            "prefix": "45.146.105.0/24",
            "ip": "45.146.105.0",
            "cidr": 24,
            "roa_status": "None",
            "name": null,
            "parent": {"prefix": null, "ip": null, "cidr": null, "rir_name": null}
        }))
        .unwrap();

        assert_eq!(entry.prefix, "45.146.105.0/24");
        assert_eq!(entry.cidr, 24);
        assert_eq!(entry.name, "");
        assert_eq!(entry.description, "");
        assert_eq!(entry.parent, ParentPrefix::default());
    }

    #[test]
    fn missing_lists_decode_empty() {
        let data: AsnDownstreamsData = serde_json::from_value(json!({
            "ipv6_downstreams": [{"asn": 211876, "name": "FIXMIX-GEN"}]
        }))
        .unwrap();

        assert!(data.ipv4_downstreams.is_empty());
        assert_eq!(data.ipv6_downstreams.len(), 1);
        assert!(data.ipv6_downstreams[0].bgp_paths.is_empty());
    }

    #[test]
    fn ip_allocation_keeps_string_cidr() {
        let allocation: IpAllocation = serde_json::from_value(json!({
            "rir_name": "RIPE",
            "cidr": "29",
            "prefix": "2a05:dfc0::/29"
        }))
        .unwrap();
        assert_eq!(allocation.cidr, "29");

        let numeric = serde_json::from_value::<IpAllocation>(json!({ "cidr": 29 }));
        assert!(numeric.is_err());
    }

    #[test]
    fn prefix_allocation_keeps_numeric_cidr() {
        let allocation: Allocation =
            serde_json::from_value(json!({ "rir_name": "ARIN", "cidr": 23 })).unwrap();
        assert_eq!(allocation.cidr, 23);
    }

    #[test]
    fn url_stats_distinguishes_null_from_missing() {
        let with_null: IxData = serde_json::from_value(json!({ "url_stats": null })).unwrap();
        assert_eq!(with_null.url_stats, Some(Value::Null));
        assert_eq!(
            serde_json::to_value(&with_null).unwrap()["url_stats"],
            Value::Null
        );

        let missing: IxData = serde_json::from_value(json!({ "name": "MIXP.me" })).unwrap();
        assert_eq!(missing.url_stats, None);
        let encoded = serde_json::to_value(&missing).unwrap();
        assert!(encoded.get("url_stats").is_none());

        let with_url: IxData =
            serde_json::from_value(json!({ "url_stats": "https://stats.example/" })).unwrap();
        assert_eq!(with_url.url_stats, Some(json!("https://stats.example/")));
    }

    #[test]
    fn maxmind_city_is_opaque() {
        let maxmind: MaxMind = serde_json::from_value(json!({
            "country_code": "NZ",
            "city": {"name": "Auckland"}
        }))
        .unwrap();
        assert_eq!(maxmind.city, json!({"name": "Auckland"}));

        let empty: MaxMind = serde_json::from_value(json!({ "city": null })).unwrap();
        assert_eq!(empty.city, Value::Null);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let member: IxMember = serde_json::from_value(json!({
            "asn": 200608,
            "name": "MIXP",
            "speed": 1000,
            "is_route_server": true
        }))
        .unwrap();
        assert_eq!(member.asn, 200608);
        assert_eq!(member.speed, 1000);
    }
}
