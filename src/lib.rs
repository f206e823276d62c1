//! Client for the [FreeSSL.org](https://freessl.org/) certificate issuance API.
//!
//! Wraps the REST endpoints for applying for, validating, downloading, listing, cancelling and
//! revoking TLS certificates, and generates certificate signing requests (CSRs) locally.
//!
//! # Usage
//!
//! ```no_run
//! use freessl::{Config, CreateOptions, FreeSsl};
//!
//! async fn apply() -> eyre::Result<()> {
//!     let freessl = FreeSsl::new(Config::new("access-key", "user-name"));
//!
//!     let created = freessl
//!         .create_certificate("example.com", CreateOptions::default())
//!         .await?;
//!
//!     // the key never leaves this process, keep it safe
//!     std::fs::write("example.com.key", created.private_key())?;
//!
//!     let id = created.response().msg["id"].as_str().unwrap_or_default();
//!     let auth_info = freessl.get_certificate_auth_info(id).await?;
//!     println!("prove ownership: {}", auth_info.msg);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Examples
//!
//! Complete usage examples are provided in the `demos` directory of the source repository:
//!
//! - `issue`: apply for a certificate and follow it through validation and download.
//! - `list`: list certificates of the account.
//!
//! # Results
//!
//! Every API operation returns an [`ApiResult`]: either the decoded [`api::Response`] envelope or
//! an [`ApiError`] naming the request path and what the server answered. Operations that also do
//! local cryptographic work ([`FreeSsl::create_certificate()`], [`FreeSsl::generate_csr()`])
//! return an [`eyre::Result`] instead; request failures can be recovered from it with
//! [`eyre::Report::downcast_ref()`].
//!
//! # Private Keys
//!
//! CSRs are generated with a fresh 2048-bit RSA key and signed with SHA-256. The key is returned
//! alongside the CSR ([`Csr::private_key()`]) and is not stored by the client.

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]

mod cert;
mod certs;
mod client;
mod config;
mod csr;
mod error;
mod req;

pub mod api;


pub use crate::{
    cert::Certificate,
    certs::{CreateOptions, CreatedCertificate},
    client::{ApiUrl, FreeSsl, HEADER_ACCESS_KEY, HEADER_USER_NAME},
    config::{Config, DEFAULT_COUNTRY_NAME},
    csr::{create_rsa_key, Csr, Subject, RSA_KEY_BITS},
    error::{ApiError, ApiResult},
};
