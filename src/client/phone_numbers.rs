use std::sync::OnceLock;

use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    AttachCampaign, AttachWebhookParams, BuyPhoneNumbers, CampaignAttachmentResult,
    ConfiguredWebhook, DetachCampaign, DetachedWebhookInfo, PhoneInformation, PhoneNumberDetails,
    PhoneNumberLookup, PurchasedNumber, SearchPhoneNumbers,
};
use crate::transport::{Request, RequestOptions, segment};

#[derive(Clone)]
pub struct PhoneNumbersClient {
    raw: RawClient,
    webhook: OnceLock<PhoneNumberWebhookClient>,
    campaign: OnceLock<PhoneNumberCampaignClient>,
}

impl PhoneNumbersClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self {
            raw,
            webhook: OnceLock::new(),
            campaign: OnceLock::new(),
        }
    }

    pub fn webhook(&self) -> &PhoneNumberWebhookClient {
        self.webhook.get_or_init(|| PhoneNumberWebhookClient {
            raw: self.raw.clone(),
        })
    }

    pub fn campaign(&self) -> &PhoneNumberCampaignClient {
        self.campaign.get_or_init(|| PhoneNumberCampaignClient {
            raw: self.raw.clone(),
        })
    }

    /// Numbers available for purchase that match the filters.
    pub async fn search(
        &self,
        params: &SearchPhoneNumbers,
        options: &RequestOptions,
    ) -> Result<Vec<PhoneNumberDetails>, PinnacleError> {
        let request = Request::post("phone-numbers/search").json(params).options(options);
        self.raw.call(request).await
    }

    /// Purchase numbers returned by [`search`](Self::search).
    pub async fn buy(
        &self,
        params: &BuyPhoneNumbers,
        options: &RequestOptions,
    ) -> Result<Vec<PurchasedNumber>, PinnacleError> {
        let request = Request::post("phone-numbers/buy").json(params).options(options);
        self.raw.call(request).await
    }

    /// Carrier, location and risk details for any number.
    pub async fn get(
        &self,
        params: &PhoneNumberLookup,
        options: &RequestOptions,
    ) -> Result<PhoneInformation, PinnacleError> {
        let request = Request::post("phone-numbers/details").json(params).options(options);
        self.raw.call(request).await
    }
}

#[derive(Clone)]
pub struct PhoneNumberWebhookClient {
    raw: RawClient,
}

impl PhoneNumberWebhookClient {
    /// Route events for `phone` to a webhook, creating it when given a URL.
    pub async fn attach(
        &self,
        phone: &str,
        params: &AttachWebhookParams,
        options: &RequestOptions,
    ) -> Result<ConfiguredWebhook, PinnacleError> {
        let request = Request::post(format!("phone-numbers/{}/attach-webhook", segment(phone)))
            .json(params)
            .options(options);
        self.raw.call(request).await
    }

    pub async fn detach(
        &self,
        phone: &str,
        webhook_id: &str,
        options: &RequestOptions,
    ) -> Result<DetachedWebhookInfo, PinnacleError> {
        let path = format!(
            "phone-numbers/{}/detach-webhook/{}",
            segment(phone),
            segment(webhook_id)
        );
        self.raw.call(Request::delete(path).options(options)).await
    }
}

#[derive(Clone)]
pub struct PhoneNumberCampaignClient {
    raw: RawClient,
}

impl PhoneNumberCampaignClient {
    pub async fn attach(
        &self,
        params: &AttachCampaign,
        options: &RequestOptions,
    ) -> Result<CampaignAttachmentResult, PinnacleError> {
        let request = Request::post("phone-numbers/attach-campaign")
            .json(params)
            .options(options);
        self.raw.call(request).await
    }

    pub async fn detach(
        &self,
        params: &DetachCampaign,
        options: &RequestOptions,
    ) -> Result<CampaignAttachmentResult, PinnacleError> {
        let request = Request::delete("phone-numbers/detach-campaign")
            .json(params)
            .options(options);
        self.raw.call(request).await
    }
}
