use std::sync::OnceLock;

use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    AudienceCountOnly, AudienceGetResponse, AudienceMembers, AudienceQuery, CreateAudience,
    DeleteAudienceResponse, UpdateAudience,
};
use crate::transport::{Request, RequestOptions};
use crate::types::Model;

/// Named contact lists used as blast targets.
#[derive(Clone)]
pub struct AudiencesClient {
    raw: RawClient,
    contacts: OnceLock<AudienceContactsClient>,
}

impl AudiencesClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self {
            raw,
            contacts: OnceLock::new(),
        }
    }

    pub fn contacts(&self) -> &AudienceContactsClient {
        self.contacts.get_or_init(|| AudienceContactsClient {
            raw: self.raw.clone(),
        })
    }

    /// Members are included only when `page` or `limit` is set.
    pub async fn get(
        &self,
        query: &AudienceQuery,
        options: &RequestOptions,
    ) -> Result<AudienceGetResponse, PinnacleError> {
        let request = Request::get("audiences")
            .query(query.to_query())
            .options(options);
        self.raw.call(request).await
    }

    pub async fn create(
        &self,
        params: &CreateAudience,
        options: &RequestOptions,
    ) -> Result<AudienceCountOnly, PinnacleError> {
        let request = Request::post("audiences").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn delete(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<DeleteAudienceResponse, PinnacleError> {
        let request = Request::delete("audiences")
            .query(vec![("id".to_owned(), id.to_owned())])
            .options(options);
        self.raw.call(request).await
    }

    pub async fn update(
        &self,
        params: &UpdateAudience,
        options: &RequestOptions,
    ) -> Result<AudienceCountOnly, PinnacleError> {
        let request = Request::patch("audiences").json(params).options(options);
        self.raw.call(request).await
    }
}

#[derive(Clone)]
pub struct AudienceContactsClient {
    raw: RawClient,
}

impl AudienceContactsClient {
    pub async fn add(
        &self,
        params: &AudienceMembers,
        options: &RequestOptions,
    ) -> Result<AudienceCountOnly, PinnacleError> {
        let request = Request::patch("audiences/contacts").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn remove(
        &self,
        params: &AudienceMembers,
        options: &RequestOptions,
    ) -> Result<AudienceCountOnly, PinnacleError> {
        let request = Request::delete("audiences/contacts").json(params).options(options);
        self.raw.call(request).await
    }
}
