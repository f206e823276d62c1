use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api,
    error::{ApiError, ApiResult},
};

/// Appends `query` to `path`, unless it encodes to nothing.
///
/// Uses `&` when `path` already carries a query string.
pub(crate) fn append_query<Q>(path: &str, query: &Q) -> ApiResult<String>
where
    Q: Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(query).map_err(|err| ApiError::query(path, err))?;

    if query.is_empty() {
        return Ok(path.to_owned());
    }

    let sep = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{path}{sep}{query}"))
}

/// Sends the request, turning transport failures and non-success statuses into [`ApiError`].
pub(crate) async fn req_send(
    path: &str,
    req: reqwest::RequestBuilder,
) -> ApiResult<reqwest::Response> {
    let res = req
        .send()
        .await
        .map_err(|err| ApiError::transport(path, err))?;

    req_handle_error(path, res).await
}

pub(crate) async fn req_handle_error(
    path: &str,
    res: reqwest::Response,
) -> ApiResult<reqwest::Response> {
    // ok responses pass through
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status();
    let body = req_safe_read_body(res).await;
    log::debug!("{path} failed with {status}: {body}");

    Err(ApiError::status(path, status, body))
}

/// Decodes the response envelope. An empty body decodes to the default envelope.
pub(crate) async fn req_read_json<T>(
    path: &str,
    res: reqwest::Response,
) -> ApiResult<api::Response<T>>
where
    T: DeserializeOwned + Default,
{
    let body = res
        .bytes()
        .await
        .map_err(|err| ApiError::transport(path, err))?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(api::Response::default());
    }

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("{}", redacted_body(&body));
    }

    serde_json::from_slice(&body).map_err(|err| ApiError::json(path, err))
}

/// Body text fit for logging; a private key in the payload is masked.
fn redacted_body(body: &[u8]) -> String {
    let Ok(mut value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return String::from_utf8_lossy(body).into_owned();
    };

    if let Some(key) = value.pointer_mut("/msg/private_key") {
        *key = "<redacted>".into();
    }

    value.to_string()
}

pub(crate) async fn req_safe_read_body(res: reqwest::Response) -> String {
    // the body of a failed response is informational only
    res.text().await.unwrap_or_default()
}
