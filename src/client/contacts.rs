use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{Contact, ContactId, ContactQuery, CreateContact, UpdateContact};
use crate::transport::{Request, RequestOptions};
use crate::types::Model;

#[derive(Clone)]
pub struct ContactsClient {
    raw: RawClient,
}

impl ContactsClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// Look a contact up by id or by phone number.
    pub async fn get(
        &self,
        query: &ContactQuery,
        options: &RequestOptions,
    ) -> Result<Contact, PinnacleError> {
        let request = Request::get("contacts")
            .query(query.to_query())
            .options(options);
        self.raw.call(request).await
    }

    pub async fn create(
        &self,
        params: &CreateContact,
        options: &RequestOptions,
    ) -> Result<ContactId, PinnacleError> {
        let request = Request::post("contacts").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn update(
        &self,
        params: &UpdateContact,
        options: &RequestOptions,
    ) -> Result<ContactId, PinnacleError> {
        let request = Request::put("contacts").json(params).options(options);
        self.raw.call(request).await
    }
}
