use std::sync::OnceLock;

use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    BrandStatusResult, DlcCampaignStatus, PhoneNumberStatus, RcsCampaignStatus,
    TollFreeCampaignStatus,
};
use crate::transport::{Request, RequestOptions, segment};

#[derive(Clone)]
pub struct StatusClient {
    raw: RawClient,
    get: OnceLock<StatusGetClient>,
}

impl StatusClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self {
            raw,
            get: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &StatusGetClient {
        self.get.get_or_init(|| StatusGetClient {
            raw: self.raw.clone(),
        })
    }
}

/// Review and provisioning state of brands, campaigns and numbers.
#[derive(Clone)]
pub struct StatusGetClient {
    raw: RawClient,
}

impl StatusGetClient {
    async fn fetch<T: crate::types::Coerce>(
        &self,
        kind: &str,
        id: &str,
        options: &RequestOptions,
    ) -> Result<T, PinnacleError> {
        let request = Request::get(format!("status/{kind}/{}", segment(id))).options(options);
        self.raw.call(request).await
    }

    pub async fn brand(
        &self,
        brand_id: &str,
        options: &RequestOptions,
    ) -> Result<BrandStatusResult, PinnacleError> {
        self.fetch("brand", brand_id, options).await
    }

    pub async fn toll_free(
        &self,
        campaign_id: &str,
        options: &RequestOptions,
    ) -> Result<TollFreeCampaignStatus, PinnacleError> {
        self.fetch("toll-free-campaign", campaign_id, options).await
    }

    pub async fn dlc(
        &self,
        campaign_id: &str,
        options: &RequestOptions,
    ) -> Result<DlcCampaignStatus, PinnacleError> {
        self.fetch("dlc-campaign", campaign_id, options).await
    }

    pub async fn rcs(
        &self,
        campaign_id: &str,
        options: &RequestOptions,
    ) -> Result<RcsCampaignStatus, PinnacleError> {
        self.fetch("rcs-campaign", campaign_id, options).await
    }

    pub async fn phone_number(
        &self,
        phone_number: &str,
        options: &RequestOptions,
    ) -> Result<PhoneNumberStatus, PinnacleError> {
        self.fetch("phone-number", phone_number, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_client;
    use crate::models::{PhoneNumberState, ProfileStatus};
    use crate::transport::fake::FakeTransport;

    #[tokio::test]
    async fn dlc_status_loads_number_updates() {
        let transport = FakeTransport::new(
            200,
            r#"{"id": "dlc_1", "status": "VERIFIED", "error": null,
                "updates": [{"number": "+14155550123", "status": "ASSIGNED", "errors": []}]}"#,
        );
        let status = test_client(&transport)
            .status()
            .get()
            .dlc("dlc_1", &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(status.status, ProfileStatus::Verified);
        assert_eq!(status.updates.len(), 1);
        assert_eq!(transport.last_request().url.path(), "/status/dlc-campaign/dlc_1");
    }

    #[tokio::test]
    async fn phone_number_keeps_the_plus_sign() {
        let transport = FakeTransport::new(
            200,
            r#"{"phoneNumber": "+14155550123", "status": "ACTIVE"}"#,
        );
        let status = test_client(&transport)
            .status()
            .get()
            .phone_number("+14155550123", &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(status.status, PhoneNumberState::Active);
        assert_eq!(
            transport.last_request().url.path(),
            "/status/phone-number/+14155550123"
        );
    }
}
