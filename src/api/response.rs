//! API response envelope

use serde::{Deserialize, Serialize};

use crate::api::models::{
    nullable, AsnData, AsnDownstreamsData, AsnIxData, AsnPeersData, AsnPrefixesData,
    AsnUpstreamsData, IpData, IxData, PrefixData, SearchData,
};

/// Standard BGPView API response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    /// `"ok"` on success, `"error"` otherwise
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub status_message: String,
    #[serde(deserialize_with = "nullable")]
    pub data: T,
    #[serde(rename = "@meta", alias = "meta", deserialize_with = "nullable")]
    pub meta: Meta,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Request metadata reported by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    #[serde(deserialize_with = "nullable")]
    pub time_zone: String,
    #[serde(deserialize_with = "nullable")]
    pub api_version: u32,
    /// Free-form, e.g. `"24.48 ms"`
    #[serde(deserialize_with = "nullable")]
    pub execution_time: String,
}

pub type AsnResponse = ApiResponse<AsnData>;
pub type AsnPrefixesResponse = ApiResponse<AsnPrefixesData>;
pub type AsnPeersResponse = ApiResponse<AsnPeersData>;
pub type AsnUpstreamsResponse = ApiResponse<AsnUpstreamsData>;
pub type AsnDownstreamsResponse = ApiResponse<AsnDownstreamsData>;
pub type AsnIxsResponse = ApiResponse<Vec<AsnIxData>>;
pub type PrefixResponse = ApiResponse<PrefixData>;
pub type IpResponse = ApiResponse<IpData>;
pub type IxResponse = ApiResponse<IxData>;
pub type SearchResponse = ApiResponse<SearchData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_is_read_from_at_meta_key() {
        let body = r#"{
            "status": "ok",
            "status_message": "Query was successful",
            "data": [],
            "@meta": {"time_zone": "UTC", "api_version": 1, "execution_time": "22.68 ms"}
        }"#;

        let response: AsnIxsResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_ok());
        assert!(response.data.is_empty());
        assert_eq!(response.meta.api_version, 1);
        assert_eq!(response.meta.execution_time, "22.68 ms");

        let encoded = serde_json::to_value(&response).unwrap();
        assert!(encoded.get("@meta").is_some());
    }

    #[test]
    fn error_envelope_without_data() {
        let body = r#"{"status": "error", "status_message": "Malformed input"}"#;

        let response: AsnResponse = serde_json::from_str(body).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.status_message, "Malformed input");
        assert_eq!(response.data, AsnData::default());
        assert_eq!(response.meta, Meta::default());
    }

    #[test]
    fn null_envelope_fields_decode_to_zero_values() {
        let body = r#"{
            "status": "error",
            "status_message": null,
            "data": null,
            "@meta": {"time_zone": null, "api_version": null, "execution_time": "0.4 ms"}
        }"#;

        let response: AsnResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "error");
        assert_eq!(response.status_message, "");
        assert_eq!(response.data, AsnData::default());
        assert_eq!(response.meta.time_zone, "");
        assert_eq!(response.meta.api_version, 0);
        assert_eq!(response.meta.execution_time, "0.4 ms");

        let response: AsnIxsResponse =
            serde_json::from_str(r#"{"status": null, "data": null, "@meta": null}"#).unwrap();
        assert!(!response.is_ok());
        assert!(response.data.is_empty());
        assert_eq!(response.meta, Meta::default());
    }
}
