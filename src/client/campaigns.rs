use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    AdditionalInfoParams, DlcCampaign, RcsCampaign, SubmissionResults, TollFreeCampaign,
    UpsertDlcCampaign, UpsertRcsCampaign, UpsertTollFreeCampaign, ValidationResults,
};
use crate::transport::{Request, RequestOptions, segment};
use crate::types::{Coerce, Model};

/// Ties a campaign type to its path segment and payload models.
pub trait CampaignFlavor: Send + Sync + 'static {
    const PATH: &'static str;
    type Upsert: Model;
    type Campaign: Coerce;
}

#[derive(Debug, Clone, Copy)]
pub enum Dlc {}

#[derive(Debug, Clone, Copy)]
pub enum TollFree {}

#[derive(Debug, Clone, Copy)]
pub enum Rcs {}

impl CampaignFlavor for Dlc {
    const PATH: &'static str = "dlc";
    type Upsert = UpsertDlcCampaign;
    type Campaign = DlcCampaign;
}

impl CampaignFlavor for TollFree {
    const PATH: &'static str = "toll-free";
    type Upsert = UpsertTollFreeCampaign;
    type Campaign = TollFreeCampaign;
}

impl CampaignFlavor for Rcs {
    const PATH: &'static str = "rcs";
    type Upsert = UpsertRcsCampaign;
    type Campaign = RcsCampaign;
}

#[derive(Clone)]
pub struct CampaignsClient {
    raw: RawClient,
    dlc: OnceLock<CampaignClient<Dlc>>,
    toll_free: OnceLock<CampaignClient<TollFree>>,
    rcs: OnceLock<CampaignClient<Rcs>>,
}

impl CampaignsClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self {
            raw,
            dlc: OnceLock::new(),
            toll_free: OnceLock::new(),
            rcs: OnceLock::new(),
        }
    }

    pub fn dlc(&self) -> &CampaignClient<Dlc> {
        self.dlc.get_or_init(|| CampaignClient::new(self.raw.clone()))
    }

    pub fn toll_free(&self) -> &CampaignClient<TollFree> {
        self.toll_free
            .get_or_init(|| CampaignClient::new(self.raw.clone()))
    }

    pub fn rcs(&self) -> &CampaignClient<Rcs> {
        self.rcs.get_or_init(|| CampaignClient::new(self.raw.clone()))
    }
}

/// `campaigns/{dlc|toll-free|rcs}` endpoints.
pub struct CampaignClient<K> {
    raw: RawClient,
    kind: PhantomData<K>,
}

impl<K> Clone for CampaignClient<K> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: CampaignFlavor> fmt::Debug for CampaignClient<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CampaignClient")
            .field("kind", &K::PATH)
            .finish_non_exhaustive()
    }
}

impl<K: CampaignFlavor> CampaignClient<K> {
    fn new(raw: RawClient) -> Self {
        Self {
            raw,
            kind: PhantomData,
        }
    }

    fn path(tail: &str) -> String {
        if tail.is_empty() {
            format!("campaigns/{}", K::PATH)
        } else {
            format!("campaigns/{}/{tail}", K::PATH)
        }
    }

    /// Draft campaign fields from a free-form description.
    pub async fn autofill(
        &self,
        params: &AdditionalInfoParams,
        options: &RequestOptions,
    ) -> Result<K::Upsert, PinnacleError> {
        let request = Request::post(Self::path("autofill")).json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn get(
        &self,
        campaign_id: &str,
        options: &RequestOptions,
    ) -> Result<K::Campaign, PinnacleError> {
        let request = Request::get(Self::path(&segment(campaign_id))).options(options);
        self.raw.call(request).await
    }

    /// Submit the campaign for carrier review.
    pub async fn submit(
        &self,
        campaign_id: &str,
        options: &RequestOptions,
    ) -> Result<SubmissionResults, PinnacleError> {
        let path = Self::path(&format!("submit/{}", segment(campaign_id)));
        self.raw.call(Request::post(path).options(options)).await
    }

    /// Create a campaign, or update it when `campaign_id` is set.
    pub async fn upsert(
        &self,
        params: &K::Upsert,
        options: &RequestOptions,
    ) -> Result<K::Campaign, PinnacleError> {
        let request = Request::post(Self::path("")).json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn validate(
        &self,
        params: &AdditionalInfoParams,
        options: &RequestOptions,
    ) -> Result<ValidationResults, PinnacleError> {
        let request = Request::post(Self::path("validate")).json(params).options(options);
        self.raw.call(request).await
    }
}
