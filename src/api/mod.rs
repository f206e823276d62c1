//! JSON API payloads.
//!
//! Request bodies, query parameters and response envelopes exchanged with the FreeSSL API.

use serde::{
    ser::{SerializeMap as _, Serializer},
    Deserialize, Serialize,
};

mod certificate;
mod csr;
mod list;

pub use self::{
    certificate::{NewCertificate, ValidityPeriod, VerifyMethod},
    csr::GeneratedCsr,
    list::ListOptions,
};

/// Serializes to `{}`.
///
/// Used as the parameters of requests that carry none; encodes to an empty query string.
pub struct EmptyObject;

impl Serialize for EmptyObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

/// Envelope of every API response.
///
/// # Example JSON
///
/// ```json
/// {
///   "code": 0,
///   "error": "",
///   "msg": {
///     "domain": "example.com",
///     "emails": ["admin@example.com", "webmaster@example.com"]
///   }
/// }
/// ```
///
/// Missing fields take their defaults, so an empty body decodes to `Response::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response<T = serde_json::Value> {
    /// `0` when the API accepted the request.
    pub code: i64,

    /// Error text, empty on success.
    pub error: String,

    /// Operation specific payload.
    pub msg: T,
}

impl<T> Response<T> {
    /// Wraps a payload into a successful response envelope.
    pub(crate) fn ok(msg: T) -> Self {
        Self {
            code: 0,
            error: String::new(),
            msg,
        }
    }

    /// Returns true if the API reported `code` zero.
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_empty_object() {
        let x = serde_json::to_string(&EmptyObject).unwrap();
        assert_eq!("{}", x);

        let q = serde_urlencoded::to_string(&EmptyObject).unwrap();
        assert_eq!("", q);
    }

    #[test]
    fn empty_object_decodes_to_default_response() {
        let res = serde_json::from_str::<Response>("{}").unwrap();
        assert_eq!(res, Response::default());
        assert!(res.is_success());
        assert!(res.msg.is_null());
    }

    #[test]
    fn decodes_envelope() {
        let res = serde_json::from_str::<Response>(
            r#"{"code":1001,"error":"domain not allowed","msg":null}"#,
        )
        .unwrap();

        assert!(!res.is_success());
        assert_eq!(res.error, "domain not allowed");
    }
}
