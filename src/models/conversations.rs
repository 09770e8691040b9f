//! Conversation threads between a sender and a contact.

use crate::models::messages::Message;
use crate::models::shared::{CampaignKind, Pagination};

crate::model! {
    pub struct ConversationContact {
        id: String => "id",
        phone_number: String => "phoneNumber",
        name: Option<String> => "name" (optional, nullable),
    }
}

crate::model! {
    pub struct ConversationSender {
        id: Option<String> => "id" (optional),
        phone_number: Option<String> => "phoneNumber" (optional),
        agent_id: Option<String> => "agentId" (optional),
    }
}

crate::model! {
    pub struct CampaignRef {
        id: String => "id",
        name: Option<String> => "name" (optional),
        campaign_type: Option<CampaignKind> => "type" (optional),
    }
}

crate::model! {
    pub struct Conversation {
        id: String => "id",
        brand_id: Option<String> => "brandId" (nullable),
        campaign: Option<CampaignRef> => "campaign" (nullable),
        contact: ConversationContact => "contact",
        sender: Option<ConversationSender> => "sender" (nullable),
        notes: String => "notes",
        created_at: String => "createdAt",
        updated_at: String => "updatedAt",
    }
}

crate::model! {
    /// Body of `POST /conversations/get`: look up by id or by the sender/recipient pair.
    pub struct GetConversation {
        id: Option<String> => "id" (optional),
        sender: Option<String> => "sender" (optional),
        recipient: Option<String> => "recipient" (optional),
    }
}

crate::model! {
    pub struct ListConversations {
        brand_id: Option<String> => "brandId" (optional),
        campaign_id: Option<String> => "campaignId" (optional),
        campaign_type: Option<CampaignKind> => "campaignType" (optional),
        page_index: Option<i64> => "pageIndex" (optional),
        page_size: Option<i64> => "pageSize" (optional),
        receiver: Option<String> => "receiver" (optional),
        sender: Option<String> => "sender" (optional),
    }
}

crate::model! {
    pub struct ConversationList {
        conversations: Vec<Conversation> => "conversations",
        has_more: bool => "hasMore",
    }
}

crate::model! {
    pub struct UpdateConversation {
        id: String => "id",
        notes: Option<String> => "notes" (optional),
    }
}

crate::model! {
    pub struct ConversationUpdated {
        success: bool => "success",
    }
}

crate::model! {
    /// Query parameters of `POST /conversations/{id}/messages`.
    pub struct ListMessagesQuery {
        page_index: Option<i64> => "pageIndex" (optional),
        page_size: Option<i64> => "pageSize" (optional),
        sort_order: Option<String> => "sortOrder" (optional),
        direction: Option<String> => "direction" (optional),
        status: Option<String> => "status" (optional),
        message_type: Option<String> => "type" (optional),
        date_from: Option<String> => "dateFrom" (optional),
        date_to: Option<String> => "dateTo" (optional),
    }
}

crate::model! {
    pub struct MessageList {
        messages: Vec<Message> => "messages",
        has_more: bool => "hasMore",
        pagination: Option<Pagination> => "pagination" (optional),
    }
}
