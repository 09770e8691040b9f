use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{GetWebhooks, WebhookResult};
use crate::transport::{Request, RequestOptions};

#[derive(Clone)]
pub struct WebhooksClient {
    raw: RawClient,
}

impl WebhooksClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// Webhooks attached to the given phone numbers, agents or URLs.
    pub async fn get(
        &self,
        params: &GetWebhooks,
        options: &RequestOptions,
    ) -> Result<WebhookResult, PinnacleError> {
        let request = Request::post("webhooks").json(params).options(options);
        self.raw.call(request).await
    }
}
