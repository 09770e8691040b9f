use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    Conversation, ConversationList, ConversationUpdated, GetConversation, ListConversations,
    ListMessagesQuery, MessageList, UpdateConversation,
};
use crate::transport::{Request, RequestOptions, segment};
use crate::types::Model;

#[derive(Clone)]
pub struct ConversationsClient {
    raw: RawClient,
}

impl ConversationsClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// Find a conversation by id, or by its sender and recipient pair.
    /// `None` when the server answers with an empty body.
    pub async fn get(
        &self,
        params: &GetConversation,
        options: &RequestOptions,
    ) -> Result<Option<Conversation>, PinnacleError> {
        let request = Request::post("conversations/get").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn list(
        &self,
        params: &ListConversations,
        options: &RequestOptions,
    ) -> Result<ConversationList, PinnacleError> {
        let request = Request::post("conversations/list").json(params).options(options);
        self.raw.call(request).await
    }

    /// Replace the notes attached to a conversation.
    pub async fn update(
        &self,
        params: &UpdateConversation,
        options: &RequestOptions,
    ) -> Result<ConversationUpdated, PinnacleError> {
        let request = Request::post("conversations/update").json(params).options(options);
        self.raw.call(request).await
    }

    /// Page through the messages of one conversation. Filters travel in the
    /// query string.
    pub async fn list_messages(
        &self,
        id: &str,
        query: &ListMessagesQuery,
        options: &RequestOptions,
    ) -> Result<MessageList, PinnacleError> {
        let request = Request::post(format!("conversations/{}/messages", segment(id)))
            .query(query.to_query())
            .options(options);
        self.raw.call(request).await
    }
}
