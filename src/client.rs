use reqwest::{header::CONTENT_TYPE, Method};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api,
    csr::{make_csr, Csr, Subject},
    error::{ApiError, ApiResult},
    req::{append_query, req_read_json, req_send},
    Config,
};

const FREESSL_URL: &str = "https://api.freessl.org/v1";

/// Header carrying [`Config::access_key`].
pub const HEADER_ACCESS_KEY: &str = "X-Auth-AccessKey";

/// Header carrying [`Config::user_name`].
pub const HEADER_USER_NAME: &str = "X-Auth-Username";

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Base URL of the API to talk to.
#[derive(Debug, Clone)]
pub enum ApiUrl<'a> {
    /// The FreeSSL.org production API.
    FreeSsl,

    /// Provide an arbitrary base URL, e.g. a local mock.
    Other(&'a str),
}

impl<'a> ApiUrl<'a> {
    fn to_url(&self) -> &str {
        match self {
            ApiUrl::FreeSsl => FREESSL_URL,
            ApiUrl::Other(url) => url,
        }
    }
}

/// Entry point for accessing the FreeSSL API.
///
/// Every operation is a single request; the client keeps no state between calls and can be
/// shared freely. Cloning is cheap.
///
/// The low level verb helpers ([`get`], [`post`], [`patch`], [`delete`]) take paths relative to
/// the base URL and are exposed for endpoints not covered by a dedicated method.
///
/// [`get`]: FreeSsl::get()
/// [`post`]: FreeSsl::post()
/// [`patch`]: FreeSsl::patch()
/// [`delete`]: FreeSsl::delete()
#[derive(Debug, Clone)]
pub struct FreeSsl {
    config: Config,
    base_url: String,
    http: reqwest::Client,
}

impl FreeSsl {
    /// Base URL of the production API.
    pub const BASE_URL: &'static str = FREESSL_URL;

    /// Create a client for the production API.
    pub fn new(config: Config) -> Self {
        Self::with_url(config, ApiUrl::FreeSsl)
    }

    /// Create a client for the API at `url`.
    pub fn with_url(config: Config, url: ApiUrl<'_>) -> Self {
        FreeSsl {
            config,
            base_url: url.to_url().trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Use `http` for all requests, e.g. one configured with timeouts or a proxy.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The authentication headers sent with every request.
    pub fn auth_header(&self) -> [(&'static str, &str); 2] {
        [
            (HEADER_ACCESS_KEY, self.config.access_key.as_str()),
            (HEADER_USER_NAME, self.config.user_name.as_str()),
        ]
    }

    /// Generates a 2048-bit RSA key and a CSR for `domain` locally.
    ///
    /// The subject is `domain` as common name plus the non-empty subject fields of the config.
    pub fn make_csr(&self, domain: &str) -> eyre::Result<Csr> {
        make_csr(&Subject::new(domain, &self.config))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        log::debug!("Call endpoint: {method} {url}");

        self.auth_header()
            .into_iter()
            .fold(self.http.request(method, url), |req, (name, value)| {
                req.header(name, value)
            })
    }

    /// `GET` the endpoint at `path` with `query` appended as query string.
    pub async fn get<Q, T>(&self, path: &str, query: &Q) -> ApiResult<api::Response<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let path = append_query(path, query)?;
        let res = req_send(&path, self.request(Method::GET, &path)).await?;
        req_read_json(&path, res).await
    }

    /// `GET` the endpoint at `path`, returning the body as is.
    ///
    /// The body must be UTF-8; it is never converted lossily.
    pub async fn get_raw(&self, path: &str) -> ApiResult<String> {
        let res = req_send(path, self.request(Method::GET, path)).await?;
        let body = res
            .bytes()
            .await
            .map_err(|err| ApiError::transport(path, err))?;

        String::from_utf8(body.to_vec()).map_err(|err| ApiError::utf8(path, err))
    }

    /// `POST` `body` as JSON to the endpoint at `path`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<api::Response<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let body = serde_json::to_vec(body).map_err(|err| ApiError::json(path, err))?;
        log::trace!("{}", String::from_utf8_lossy(&body));

        let req = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body);

        let res = req_send(path, req).await?;
        req_read_json(path, res).await
    }

    /// `PATCH` the endpoint at `path` with `query` appended as query string.
    ///
    /// The request body is always empty.
    pub async fn patch<Q, T>(&self, path: &str, query: &Q) -> ApiResult<api::Response<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let path = append_query(path, query)?;
        let res = req_send(&path, self.request(Method::PATCH, &path)).await?;
        req_read_json(&path, res).await
    }

    /// `DELETE` the endpoint at `path` with `query` appended as query string.
    pub async fn delete<Q, T>(&self, path: &str, query: &Q) -> ApiResult<api::Response<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let path = append_query(path, query)?;
        let res = req_send(&path, self.request(Method::DELETE, &path)).await?;
        req_read_json(&path, res).await
    }
}
