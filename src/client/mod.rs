//! Client layer: one resource client per API area over a shared [`RawClient`].

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use url::Url;

use crate::transport::{HttpTransport, ReqwestTransport};

mod audiences;
mod brands;
mod campaigns;
mod contacts;
mod conversations;
pub mod error;
mod messages;
mod phone_numbers;
pub(crate) mod raw;
mod rcs;
mod status;
mod tools;
mod webhooks;

pub use audiences::{AudienceContactsClient, AudiencesClient};
pub use brands::BrandsClient;
pub use campaigns::{CampaignClient, CampaignFlavor, CampaignsClient, Dlc, Rcs, TollFree};
pub use contacts::ContactsClient;
pub use conversations::ConversationsClient;
pub use error::{PinnacleError, ResponseError, ResponseErrorKind};
pub use messages::{
    BlastClient, MessagesClient, MmsClient, RcsMessagesClient, SIGNING_SECRET_ENV,
    SIGNING_SECRET_HEADER, ScheduleClient, SmsClient,
};
pub use phone_numbers::{PhoneNumberCampaignClient, PhoneNumberWebhookClient, PhoneNumbersClient};
pub use rcs::RcsClient;
pub use status::{StatusClient, StatusGetClient};
pub use tools::{ContactCardClient, FileClient, ToolsClient, UrlClient, mime_type_for};
pub use webhooks::WebhooksClient;

use raw::RawClient;

pub const DEFAULT_BASE_URL: &str = "https://api.pinnacle.sh";
pub const API_KEY_ENV: &str = "PINNACLE_API_KEY";
pub const BASE_URL_ENV: &str = "PINNACLE_BASE_URL";

const DEFAULT_USER_AGENT: &str = concat!("pinnacle-rust/", env!("CARGO_PKG_VERSION"));

/// Builder for [`PinnacleClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
#[derive(Debug, Clone)]
pub struct PinnacleClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PinnacleClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API host, e.g. for a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Default timeout for every request; [`RequestOptions`](crate::RequestOptions)
    /// can override it per call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<PinnacleClient, PinnacleError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| PinnacleError::Transport(Box::new(err)))?;
        self.build_with(Arc::new(ReqwestTransport::new(client)))
    }

    fn build_with(self, http: Arc<dyn HttpTransport>) -> Result<PinnacleClient, PinnacleError> {
        if self.api_key.trim().is_empty() {
            return Err(PinnacleError::Config("API key must not be empty".to_owned()));
        }
        let base_url = Url::parse(&self.base_url).map_err(|err| {
            PinnacleError::Config(format!("invalid base URL `{}`: {err}", self.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PinnacleError::Config(format!(
                "base URL `{}` cannot carry a path",
                self.base_url
            )));
        }

        let raw = RawClient::new(
            base_url,
            self.api_key,
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            self.timeout,
            http,
        );
        Ok(PinnacleClient::from_raw(raw))
    }
}

/// Entry point to the Pinnacle API.
///
/// Resource clients are created on first access and reused afterwards.
/// Cloning is cheap: clones share the HTTP connection pool.
#[derive(Clone)]
pub struct PinnacleClient {
    raw: RawClient,
    audiences: OnceLock<AudiencesClient>,
    brands: OnceLock<BrandsClient>,
    campaigns: OnceLock<CampaignsClient>,
    contacts: OnceLock<ContactsClient>,
    conversations: OnceLock<ConversationsClient>,
    messages: OnceLock<MessagesClient>,
    phone_numbers: OnceLock<PhoneNumbersClient>,
    rcs: OnceLock<RcsClient>,
    status: OnceLock<StatusClient>,
    tools: OnceLock<ToolsClient>,
    webhooks: OnceLock<WebhooksClient>,
}

impl PinnacleClient {
    /// Create a client for the default host.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PinnacleError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> PinnacleClientBuilder {
        PinnacleClientBuilder::new(api_key)
    }

    /// Read the API key from `PINNACLE_API_KEY` and, when set, the host from
    /// `PINNACLE_BASE_URL`.
    pub fn from_env() -> Result<Self, PinnacleError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| PinnacleError::Config(format!("{API_KEY_ENV} is not set")))?;
        let mut builder = Self::builder(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    fn from_raw(raw: RawClient) -> Self {
        Self {
            raw,
            audiences: OnceLock::new(),
            brands: OnceLock::new(),
            campaigns: OnceLock::new(),
            contacts: OnceLock::new(),
            conversations: OnceLock::new(),
            messages: OnceLock::new(),
            phone_numbers: OnceLock::new(),
            rcs: OnceLock::new(),
            status: OnceLock::new(),
            tools: OnceLock::new(),
            webhooks: OnceLock::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        self.raw.base_url()
    }

    pub fn audiences(&self) -> &AudiencesClient {
        self.audiences
            .get_or_init(|| AudiencesClient::new(self.raw.clone()))
    }

    pub fn brands(&self) -> &BrandsClient {
        self.brands.get_or_init(|| BrandsClient::new(self.raw.clone()))
    }

    pub fn campaigns(&self) -> &CampaignsClient {
        self.campaigns
            .get_or_init(|| CampaignsClient::new(self.raw.clone()))
    }

    pub fn contacts(&self) -> &ContactsClient {
        self.contacts
            .get_or_init(|| ContactsClient::new(self.raw.clone()))
    }

    pub fn conversations(&self) -> &ConversationsClient {
        self.conversations
            .get_or_init(|| ConversationsClient::new(self.raw.clone()))
    }

    pub fn messages(&self) -> &MessagesClient {
        self.messages
            .get_or_init(|| MessagesClient::new(self.raw.clone()))
    }

    pub fn phone_numbers(&self) -> &PhoneNumbersClient {
        self.phone_numbers
            .get_or_init(|| PhoneNumbersClient::new(self.raw.clone()))
    }

    pub fn rcs(&self) -> &RcsClient {
        self.rcs.get_or_init(|| RcsClient::new(self.raw.clone()))
    }

    pub fn status(&self) -> &StatusClient {
        self.status.get_or_init(|| StatusClient::new(self.raw.clone()))
    }

    pub fn tools(&self) -> &ToolsClient {
        self.tools.get_or_init(|| ToolsClient::new(self.raw.clone()))
    }

    pub fn webhooks(&self) -> &WebhooksClient {
        self.webhooks
            .get_or_init(|| WebhooksClient::new(self.raw.clone()))
    }
}

impl std::fmt::Debug for PinnacleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinnacleClient")
            .field("base_url", &self.raw.base_url().as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) fn test_client(transport: &crate::transport::fake::FakeTransport) -> PinnacleClient {
    PinnacleClient::builder("test-api-key")
        .base_url("https://example.invalid")
        .build_with(Arc::new(transport.clone()))
        .unwrap()
}
