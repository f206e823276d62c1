use der::{
    asn1::{Ia5String, Ia5StringRef, PrintableStringRef, SetOfVec, Utf8StringRef},
    oid::ObjectIdentifier,
    Any, EncodePem as _, Tag,
};
use eyre::WrapErr as _;
use pkcs8::EncodePrivateKey as _;
use rsa::{pkcs1v15, RsaPrivateKey};
use serde::Serialize;
use sha2::Sha256;
use x509_cert::{
    attr::AttributeTypeAndValue,
    builder::{Builder as _, RequestBuilder as CsrBuilder},
    ext::pkix::{name::GeneralName, SubjectAltName},
    name::{Name, RdnSequence, RelativeDistinguishedName},
};
use zeroize::Zeroizing;

use crate::Config;

/// Modulus size of generated keys.
pub const RSA_KEY_BITS: usize = 2048;

const COUNTRY_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");
const STATE_OR_PROVINCE_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.8");
const LOCALITY_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7");
const ORGANIZATION_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");
const ORGANIZATIONAL_UNIT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");
const COMMON_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");
const EMAIL_ADDRESS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1");

/// Subject of a certificate request.
///
/// The common name is the requested domain; the other fields come from [`Config`] and are left
/// out when empty. Serializes to the query of a remote CSR generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub common_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub locality: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub organization: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub organizational_unit: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Subject {
    pub fn new(domain: &str, config: &Config) -> Self {
        Self {
            common_name: domain.to_owned(),
            country: config.country_name.clone(),
            state: config.state_or_province_name.clone(),
            locality: config.locality_name.clone(),
            organization: config.organization_name.clone(),
            organizational_unit: config.organizational_unit_name.clone(),
            email: config.email_address.clone(),
        }
    }

    /// Domains listed in the common name, which may be a comma separated list.
    pub fn domains(&self) -> Vec<&str> {
        self.common_name
            .split(',')
            .map(str::trim)
            .filter(|domain| !domain.is_empty())
            .collect()
    }

    /// Encodes the subject as an X.500 name, one attribute per RDN.
    pub fn to_name(&self) -> eyre::Result<Name> {
        let attrs = [
            (COUNTRY_NAME, &self.country),
            (STATE_OR_PROVINCE_NAME, &self.state),
            (LOCALITY_NAME, &self.locality),
            (ORGANIZATION_NAME, &self.organization),
            (ORGANIZATIONAL_UNIT_NAME, &self.organizational_unit),
            (COMMON_NAME, &self.common_name),
            (EMAIL_ADDRESS, &self.email),
        ];

        let mut rdns = Vec::new();

        for (oid, value) in attrs {
            if value.is_empty() {
                continue;
            }

            let atv = AttributeTypeAndValue {
                oid,
                value: attribute_value(oid, value)
                    .wrap_err_with(|| format!("invalid subject attribute {oid}: {value:?}"))?,
            };

            rdns.push(RelativeDistinguishedName(SetOfVec::try_from(vec![atv])?));
        }

        Ok(RdnSequence(rdns))
    }
}

// RFC 5280 requires PrintableString for countries and IA5String for email addresses.
fn attribute_value(oid: ObjectIdentifier, value: &str) -> der::Result<Any> {
    let tag = if oid == COUNTRY_NAME {
        PrintableStringRef::new(value)?;
        Tag::PrintableString
    } else if oid == EMAIL_ADDRESS {
        Ia5StringRef::new(value)?;
        Tag::Ia5String
    } else {
        Utf8StringRef::new(value)?;
        Tag::Utf8String
    };

    Any::new(tag, value.as_bytes())
}

/// A PEM encoded certificate request together with its private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csr {
    csr_pem: String,
    private_key_pem: Zeroizing<String>,
}

impl Csr {
    pub(crate) fn new(csr_pem: String, private_key_pem: Zeroizing<String>) -> Self {
        Csr {
            csr_pem,
            private_key_pem,
        }
    }

    /// The PKCS#10 request in PEM format.
    pub fn csr(&self) -> &str {
        &self.csr_pem
    }

    /// The private key in PEM format.
    ///
    /// Keys generated locally are PKCS#8 encoded. Keys from the remote generator are passed
    /// through as received.
    pub fn private_key(&self) -> &str {
        &self.private_key_pem
    }
}

/// Make a fresh RSA private key of [`RSA_KEY_BITS`] bits.
pub fn create_rsa_key() -> eyre::Result<RsaPrivateKey> {
    let csprng = &mut rand::thread_rng();
    RsaPrivateKey::new(csprng, RSA_KEY_BITS).context("generate rsa key")
}

/// Creates a CSR for `subject` and signs it with `key` using SHA-256.
///
/// When the common name lists more than one domain, all of them are added to a Subject
/// Alternative Name (SAN) extension.
pub(crate) fn create_csr(
    key: &RsaPrivateKey,
    subject: &Subject,
) -> eyre::Result<x509_cert::request::CertReq> {
    let signer = pkcs1v15::SigningKey::<Sha256>::new(key.clone());

    let mut csr = CsrBuilder::new(subject.to_name()?, &signer).context("csr builder")?;

    let domains = subject.domains();
    if domains.len() > 1 {
        let names = domains
            .iter()
            .map(|domain| Ok(GeneralName::DnsName(Ia5String::new(domain)?)))
            .collect::<der::Result<Vec<_>>>()?;

        csr.add_extension(&SubjectAltName(names))
            .context("add subject alt names")?;
    }

    csr.build::<pkcs1v15::Signature>().context("build csr")
}

/// Generates a key pair and a CSR for `subject`, both PEM encoded.
pub(crate) fn make_csr(subject: &Subject) -> eyre::Result<Csr> {
    let key = create_rsa_key()?;
    let csr = create_csr(&key, subject)?;

    let csr_pem = csr
        .to_pem(pem::LineEnding::LF)
        .context("csr_to_pem")?;
    let private_key_pem = key
        .to_pkcs8_pem(pem::LineEnding::LF)
        .context("private_key_to_pem")?;

    log::debug!("Generated CSR for {}", subject.common_name);

    Ok(Csr::new(csr_pem, private_key_pem))
}
