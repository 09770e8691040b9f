//! Webhook configuration lookups.

use crate::models::phone_numbers::AttachedWebhook;

crate::model! {
    pub struct GetWebhooks {
        /// Phone numbers, agent ids or webhook URLs.
        identifiers: Vec<String> => "identifiers",
    }
}

crate::model! {
    pub struct WebhookLookup {
        identifier: String => "identifier",
        webhook: Option<AttachedWebhook> => "webhook" (optional, nullable),
        event: Option<WebhookEventKind> => "event" (optional, nullable),
        error: Option<String> => "error" (optional, nullable),
    }
}

crate::model! {
    pub struct WebhookResult {
        webhooks: Vec<WebhookLookup> => "webhooks",
    }
}

crate::enumeration! {
    pub enum WebhookEventKind {
        MessageStatus => "MESSAGE.STATUS",
        MessageReceived => "MESSAGE.RECEIVED",
        UserTyping => "USER.TYPING",
    }
}
