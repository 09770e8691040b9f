//! Request execution shared by every resource client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::{Span, instrument};
use url::Url;

use crate::client::error::{PinnacleError, ResponseError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Request, RequestOptions};
use crate::types::coerce::parse_json;
use crate::types::{Coerce, ConstraintError};

pub(crate) const API_KEY_HEADER: &str = "pinnacle-api-key";

#[derive(Clone)]
pub(crate) struct RawClient {
    base_url: Url,
    api_key: String,
    user_agent: String,
    timeout: Option<Duration>,
    http: Arc<dyn HttpTransport>,
}

impl RawClient {
    pub(crate) fn new(
        base_url: Url,
        api_key: String,
        user_agent: String,
        timeout: Option<Duration>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url,
            api_key,
            user_agent,
            timeout,
            http,
        }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send `request` and return the response if its status is 2xx.
    #[instrument(
        name = "pinnacle_request",
        skip(self, request),
        fields(
            http.method = %request.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn send(&self, request: Request) -> Result<HttpResponse, PinnacleError> {
        let url = request.url(&self.base_url).map_err(|err| {
            PinnacleError::Config(format!("invalid URL for `{}`: {err}", request.path()))
        })?;
        Span::current().record("http.url", url.as_str());

        let headers = self.headers(request.request_options())?;
        let body = request
            .body()
            .map(|body| Value::Object(body).to_string().into_bytes());
        let timeout = request.request_options().timeout_duration().or(self.timeout);

        tracing::debug!(%url, has_body = body.is_some(), "dispatching request");
        let response = self
            .http
            .execute(HttpRequest {
                method: request.method().clone(),
                url,
                headers,
                body,
                timeout,
            })
            .await?;
        Span::current().record("http.status_code", response.status);

        if !(200..=299).contains(&response.status) {
            tracing::debug!(status = response.status, "request rejected");
            return Err(ResponseError::new(response.status, response.body).into());
        }
        Ok(response)
    }

    /// Send `request` and load the body into `T`. An empty body loads as JSON
    /// `null`.
    pub(crate) async fn call<T: Coerce>(&self, request: Request) -> Result<T, PinnacleError> {
        let response = self.send(request).await?;
        Ok(decode(&response.body)?)
    }

    /// Execute an absolute-URL request outside the API (signed upload URLs).
    pub(crate) async fn put_bytes(
        &self,
        url: Url,
        content_type: &str,
        bytes: Vec<u8>,
        options: &RequestOptions,
    ) -> Result<(), PinnacleError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, header_value(content_type)?);
        tracing::debug!(
            host = url.host_str().unwrap_or_default(),
            size = bytes.len(),
            "uploading file bytes"
        );
        let response = self
            .http
            .execute(HttpRequest {
                method: reqwest::Method::PUT,
                url,
                headers,
                body: Some(bytes),
                timeout: options.timeout_duration().or(self.timeout),
            })
            .await?;
        if !(200..=299).contains(&response.status) {
            return Err(ResponseError::new(response.status, response.body).into());
        }
        Ok(())
    }

    fn headers(&self, options: &RequestOptions) -> Result<HeaderMap, PinnacleError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(&self.api_key)?,
        );
        headers.insert(USER_AGENT, header_value(&self.user_agent)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in options.additional_headers() {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|err| PinnacleError::Config(format!("invalid header name `{name}`: {err}")))?;
            headers.insert(name, header_value(value)?);
        }
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, PinnacleError> {
    HeaderValue::try_from(value)
        .map_err(|err| PinnacleError::Config(format!("invalid header value: {err}")))
}

pub(crate) fn decode<T: Coerce>(body: &str) -> Result<T, ConstraintError> {
    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        parse_json(body)?
    };
    T::coerce(value, false)
}
