use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    RcsCapabilitiesQuery, RcsCapabilitiesResult, RcsLinkRequest, RcsLinkResult, RcsWhitelist,
    RcsWhitelistResponse,
};
use crate::transport::{Request, RequestOptions};

/// RCS agent utilities.
#[derive(Clone)]
pub struct RcsClient {
    raw: RawClient,
}

impl RcsClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// Which of `phone_numbers` can receive RCS, and with which features.
    pub async fn get_capabilities(
        &self,
        params: &RcsCapabilitiesQuery,
        options: &RequestOptions,
    ) -> Result<RcsCapabilitiesResult, PinnacleError> {
        let request = Request::post("rcs/capabilities").json(params).options(options);
        self.raw.call(request).await
    }

    /// Allow a test device to receive messages from an unlaunched agent.
    pub async fn whitelist(
        &self,
        params: &RcsWhitelist,
        options: &RequestOptions,
    ) -> Result<RcsWhitelistResponse, PinnacleError> {
        let request = Request::post("rcs/whitelist").json(params).options(options);
        self.raw.call(request).await
    }

    /// A deep link that opens a conversation with the agent.
    pub async fn get_link(
        &self,
        params: &RcsLinkRequest,
        options: &RequestOptions,
    ) -> Result<RcsLinkResult, PinnacleError> {
        let request = Request::post("rcs/link").json(params).options(options);
        self.raw.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::test_client;
    use crate::transport::fake::FakeTransport;

    #[tokio::test]
    async fn capabilities_are_keyed_by_number() {
        let transport = FakeTransport::new(
            200,
            r#"{"+12345678901": {"cards": true, "carousels": false}, "+19876543210": null}"#,
        );
        let params = RcsCapabilitiesQuery {
            phone_numbers: vec!["+12345678901".to_owned(), "+19876543210".to_owned()],
        };
        let result = test_client(&transport)
            .rcs()
            .get_capabilities(&params, &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
        assert!(result["+19876543210"].is_none());
        assert_eq!(
            transport.last_json_body(),
            json!({"phoneNumbers": ["+12345678901", "+19876543210"]})
        );
    }
}
