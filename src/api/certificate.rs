use serde::{Deserialize, Serialize};

/// How domain ownership is proven before issuance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyMethod {
    /// A file served over HTTP from the domain.
    #[default]
    Http,

    /// A `TXT` record on the domain.
    Dns,

    /// A mail sent to one of the approver addresses, see
    /// [`get_approver_email`](crate::FreeSsl::get_approver_email).
    Email,
}

/// Certificate lifetime in months. The API only issues 3 and 12 month certificates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ValidityPeriod {
    #[default]
    ThreeMonths,
    TwelveMonths,
}

impl ValidityPeriod {
    pub fn months(self) -> u8 {
        match self {
            ValidityPeriod::ThreeMonths => 3,
            ValidityPeriod::TwelveMonths => 12,
        }
    }
}

impl From<ValidityPeriod> for u8 {
    fn from(period: ValidityPeriod) -> u8 {
        period.months()
    }
}

impl TryFrom<u8> for ValidityPeriod {
    type Error = String;

    fn try_from(months: u8) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(ValidityPeriod::ThreeMonths),
            12 => Ok(ValidityPeriod::TwelveMonths),
            _ => Err(format!("unsupported validity period: {months} months")),
        }
    }
}

/// Body of a certificate application (`POST /certs`).
///
/// # Example JSON
///
/// ```json
/// {
///   "csr_pem": "-----BEGIN CERTIFICATE REQUEST-----\n...",
///   "domains": ["example.com"],
///   "validity_period": 3,
///   "verify_method": "http",
///   "email": ""
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCertificate {
    /// PEM encoded PKCS#10 request.
    pub csr_pem: String,

    /// The domain string as given by the caller, as a single element.
    pub domains: Vec<String>,

    pub validity_period: ValidityPeriod,
    pub verify_method: VerifyMethod,
    pub email: String,
}
