use serde::{Deserialize, Serialize};

/// Country used in certificate subjects unless configured otherwise.
pub const DEFAULT_COUNTRY_NAME: &str = "CN";

/// Client configuration: API credentials plus the subject fields used for CSRs.
///
/// Every field is optional when deserializing; missing fields keep their default, so a partial
/// options document is merged over [`Config::default()`].
///
/// ```
/// let config: freessl::Config = serde_json::from_str(r#"{
///     "access_key": "ak-123",
///     "user_name": "alice",
///     "organization_name": "Example Ltd"
/// }"#).unwrap();
///
/// assert_eq!(config.country_name, "CN");
/// assert_eq!(config.organization_name, "Example Ltd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API access key, sent as `X-Auth-AccessKey`.
    pub access_key: String,

    /// Account user name, sent as `X-Auth-Username`.
    pub user_name: String,

    pub country_name: String,
    pub state_or_province_name: String,
    pub locality_name: String,
    pub organization_name: String,
    pub organizational_unit_name: String,

    /// Accepted for completeness. The common name of a CSR is always the requested domain.
    pub common_name: String,

    pub email_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            user_name: String::new(),
            country_name: DEFAULT_COUNTRY_NAME.to_owned(),
            state_or_province_name: String::new(),
            locality_name: String::new(),
            organization_name: String::new(),
            organizational_unit_name: String::new(),
            common_name: String::new(),
            email_address: String::new(),
        }
    }
}

impl Config {
    /// Config with credentials set and all subject fields at their defaults.
    pub fn new(access_key: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            user_name: user_name.into(),
            ..Default::default()
        }
    }
}
