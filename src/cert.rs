use der::Decode as _;
use eyre::eyre;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Downloaded certificate material.
///
/// This is the `msg` payload of [`FreeSsl::download_certificate()`]. The body of the download
/// endpoint is passed through untouched.
///
/// [`FreeSsl::download_certificate()`]: crate::FreeSsl::download_certificate()
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub certificate: String,
}

impl Certificate {
    pub(crate) fn new(certificate: String) -> Self {
        Certificate { certificate }
    }

    /// The certificate material as downloaded, usually a PEM chain.
    pub fn certificate(&self) -> &str {
        &self.certificate
    }

    /// Decodes every `CERTIFICATE` block of the download to DER, in the order served.
    ///
    /// FreeSSL serves the issued certificate first, followed by its intermediates. Anything else
    /// in the download (keys, text) is skipped.
    pub fn certificate_chain(&self) -> eyre::Result<Vec<Vec<u8>>> {
        let mut pem = self.certificate.as_bytes();

        let chain = rustls_pemfile::certs(&mut pem)
            .map(|cert| cert.map(|cert| cert.to_vec()))
            .collect::<std::io::Result<Vec<_>>>()?;

        Ok(chain)
    }

    /// Whole days until the issued certificate's `notAfter`, negative once it has expired.
    ///
    /// Fails when the download holds no certificate.
    pub fn valid_days_left(&self) -> eyre::Result<i64> {
        let chain = self.certificate_chain()?;
        let issued = chain
            .first()
            .ok_or_else(|| eyre!("no certificate in download"))?;

        // validity times are UTC
        let validity = x509_cert::Certificate::from_der(issued)?.tbs_certificate.validity;
        let not_after = PrimitiveDateTime::try_from(validity.not_after.to_date_time())?.assume_utc();

        Ok((not_after - OffsetDateTime::now_utc()).whole_days())
    }
}
