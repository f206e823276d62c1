use serde::{Deserialize, Serialize};

/// Payload of a remote CSR generation (`GET /gen-csr`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedCsr {
    /// PEM encoded PKCS#10 request.
    pub csr: String,

    /// PEM encoded private key belonging to `csr`.
    pub private_key: String,
}
