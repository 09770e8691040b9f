use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    AutofillBrand, ExtendedBrand, ExtendedBrandWithVetting, OptionalBrandInfo, SubmissionResults,
    UpsertBrand, ValidationResults, VetBrand, VettingResults,
};
use crate::transport::{Request, RequestOptions, segment};

/// Brand registration: the company behind your campaigns.
#[derive(Clone)]
pub struct BrandsClient {
    raw: RawClient,
}

impl BrandsClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// Infer brand details from a name, website or description.
    pub async fn autofill(
        &self,
        params: &AutofillBrand,
        options: &RequestOptions,
    ) -> Result<OptionalBrandInfo, PinnacleError> {
        let request = Request::post("brands/autofill").json(params).options(options);
        self.raw.call(request).await
    }

    /// Create a brand, or update it when `id` is set.
    pub async fn upsert(
        &self,
        params: &UpsertBrand,
        options: &RequestOptions,
    ) -> Result<ExtendedBrand, PinnacleError> {
        let request = Request::post("brands").json(params).options(options);
        self.raw.call(request).await
    }

    /// Fetch a brand with its vetting history. `hide_ein` masks the tax id.
    pub async fn get(
        &self,
        id: &str,
        hide_ein: Option<bool>,
        options: &RequestOptions,
    ) -> Result<ExtendedBrandWithVetting, PinnacleError> {
        let query = hide_ein
            .map(|hide| vec![("hideEIN".to_owned(), hide.to_string())])
            .unwrap_or_default();
        let request = Request::get(format!("brands/{}", segment(id)))
            .query(query)
            .options(options);
        self.raw.call(request).await
    }

    pub async fn submit(
        &self,
        brand_id: &str,
        options: &RequestOptions,
    ) -> Result<SubmissionResults, PinnacleError> {
        let request = Request::post(format!("brands/{}/submit", segment(brand_id))).options(options);
        self.raw.call(request).await
    }

    pub async fn validate(
        &self,
        params: &OptionalBrandInfo,
        options: &RequestOptions,
    ) -> Result<ValidationResults, PinnacleError> {
        let request = Request::post("brands/validate").json(params).options(options);
        self.raw.call(request).await
    }

    /// Request external vetting for a registered brand.
    pub async fn vet(
        &self,
        brand_id: &str,
        params: &VetBrand,
        options: &RequestOptions,
    ) -> Result<VettingResults, PinnacleError> {
        let request = Request::post(format!("brands/{}/vet", segment(brand_id)))
            .json(params)
            .options(options);
        self.raw.call(request).await
    }
}
