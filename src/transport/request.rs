use std::time::Duration;

use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

use crate::types::Coerce;

/// Per-call overrides accepted by every endpoint method.
///
/// ```rust
/// use std::time::Duration;
/// use pinnacle::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("X-Request-Id", "req_42")
///     .query_param("debug", "true")
///     .timeout(Duration::from_secs(5));
/// assert_eq!(options.timeout_duration(), Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    base_url: Option<String>,
    additional_headers: Vec<(String, String)>,
    additional_query_parameters: Vec<(String, String)>,
    additional_body_parameters: Map<String, Value>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send this call to another host than the client's base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Extra header, sent after the client's own headers.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    /// Extra query pair, appended after the endpoint's own parameters.
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_query_parameters
            .push((name.into(), value.into()));
        self
    }

    /// Extra body key; overrides a key of the same name in the request model.
    pub fn body_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_body_parameters
            .insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout_in_seconds(self, seconds: u64) -> Self {
        self.timeout(Duration::from_secs(seconds))
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn base_url_override(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub(crate) fn additional_headers(&self) -> &[(String, String)] {
        &self.additional_headers
    }
}

/// One endpoint call before it is resolved against a base URL.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
    options: RequestOptions,
}

impl Request {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub(crate) fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Use the dumped payload as the JSON body. Non-object payloads are not
    /// sent.
    pub(crate) fn json<B: Coerce>(mut self, payload: &B) -> Self {
        if let Value::Object(body) = payload.dump() {
            self.body = Some(body);
        }
        self
    }

    pub(crate) fn options(mut self, options: &RequestOptions) -> Self {
        self.options = options.clone();
        self
    }

    pub(crate) fn method(&self) -> &Method {
        &self.method
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn request_options(&self) -> &RequestOptions {
        &self.options
    }

    /// Resolve against `default_base` unless the options carry their own base URL.
    pub(crate) fn url(&self, default_base: &Url) -> Result<Url, url::ParseError> {
        let base = match self.options.base_url_override() {
            Some(base) => base,
            None => default_base.as_str(),
        };
        let joined = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined)?;

        let pairs = self
            .query
            .iter()
            .chain(&self.options.additional_query_parameters);
        let mut pairs = pairs.peekable();
        if pairs.peek().is_some() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in pairs {
                serializer.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// The model body merged with the additional body parameters.
    pub(crate) fn body(&self) -> Option<Map<String, Value>> {
        let extra = &self.options.additional_body_parameters;
        match &self.body {
            Some(body) => {
                let mut merged = body.clone();
                merged.extend(extra.iter().map(|(key, value)| (key.clone(), value.clone())));
                Some(merged)
            }
            None if extra.is_empty() => None,
            None => Some(extra.clone()),
        }
    }
}

/// Escape an identifier for interpolation into a path. Only characters that
/// would end the segment are touched, so `+` and pre-encoded sequences pass
/// through unchanged.
pub(crate) fn segment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for ch in id.chars() {
        match ch {
            '/' => out.push_str("%2F"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::ContactQuery;
    use crate::types::Model;

    fn base() -> Url {
        Url::parse("https://api.pinnacle.sh").unwrap()
    }

    #[test]
    fn path_is_joined_onto_the_base_url() {
        let url = Request::get("messages/msg_1").url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://api.pinnacle.sh/messages/msg_1");

        let nested = Url::parse("http://localhost:8080/v1/").unwrap();
        let url = Request::get("/status/brand/b_1").url(&nested).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/status/brand/b_1");
    }

    #[test]
    fn segments_keep_plus_and_escape_separators() {
        assert_eq!(segment("+14155551234"), "+14155551234");
        assert_eq!(segment("%2B14155551234"), "%2B14155551234");
        assert_eq!(segment("a/b?c#d"), "a%2Fb%3Fc%23d");
    }

    #[test]
    fn endpoint_query_comes_before_additional_parameters() {
        let query = ContactQuery {
            id: Some("co_1".to_owned()),
            phone_number: None,
        };
        let options = RequestOptions::new().query_param("trace", "1");
        let url = Request::get("contacts")
            .query(query.to_query())
            .options(&options)
            .url(&base())
            .unwrap();
        assert_eq!(url.query(), Some("id=co_1&trace=1"));
    }

    #[test]
    fn no_query_leaves_the_url_without_question_mark() {
        let url = Request::get("webhooks").url(&base()).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn base_url_option_overrides_the_client_base() {
        let options = RequestOptions::new().base_url("http://localhost:9000");
        let url = Request::get("webhooks").options(&options).url(&base()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/webhooks");
    }

    #[test]
    fn additional_body_parameters_win_over_the_model() {
        let query = ContactQuery {
            id: Some("co_1".to_owned()),
            phone_number: None,
        };
        let options = RequestOptions::new()
            .body_param("id", "co_2")
            .body_param("extra", true);
        let body = Request::post("contacts").json(&query).options(&options).body();
        assert_eq!(
            body.map(Value::Object),
            Some(json!({"id": "co_2", "extra": true}))
        );
    }

    #[test]
    fn bodyless_requests_stay_bodyless() {
        assert_eq!(Request::get("messages/m").body(), None);
    }
}
