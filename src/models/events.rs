//! Payloads Pinnacle delivers to your webhook endpoint.

use serde_json::Value;

use crate::models::messages::{LatLong, RcsCard, RichButton};
use crate::models::shared::MessageStatus;
use crate::models::webhooks::WebhookEventKind;
use crate::types::{Coerce, ConstraintError};

crate::model! {
    pub struct EventConversation {
        id: String => "id",
        from: String => "from",
        to: String => "to",
    }
}

crate::model! {
    pub struct SmsEventContent {
        id: String => "id",
        text: String => "text",
    }
}

crate::model! {
    pub struct MmsEventContent {
        id: String => "id",
        media_urls: Vec<String> => "mediaUrls",
        text: Option<String> => "text" (optional),
    }
}

crate::model! {
    pub struct RcsTextEventContent {
        id: String => "id",
        text: String => "text",
        quick_replies: Vec<RichButton> => "quickReplies",
    }
}

crate::model! {
    pub struct RcsMediaEventContent {
        id: String => "id",
        media: String => "media",
        quick_replies: Vec<RichButton> => "quickReplies",
    }
}

crate::model! {
    pub struct RcsCardsEventContent {
        id: String => "id",
        cards: Vec<RcsCard> => "cards",
        quick_replies: Vec<RichButton> => "quickReplies",
    }
}

crate::model! {
    /// A button the recipient pressed.
    pub struct RcsButtonEventContent {
        id: String => "id",
        button: Value => "button",
        message_id: Option<String> => "messageId" (nullable),
    }
}

crate::model! {
    pub struct RcsLocationEventContent {
        id: String => "id",
        data: LatLong => "data",
        message_id: Option<String> => "messageId" (optional),
    }
}

crate::union! {
    pub enum MessageEventContent tagged "type" {
        "SMS" => Sms(SmsEventContent),
        "MMS" => Mms(MmsEventContent),
        "RCS_TEXT" => RcsText(RcsTextEventContent),
        "RCS_MEDIA" => RcsMedia(RcsMediaEventContent),
        "RCS_CARDS" => RcsCards(RcsCardsEventContent),
        "RCS_BUTTON_DATA" => RcsButtonData(RcsButtonEventContent),
        "RCS_LOCATION_DATA" => RcsLocationData(RcsLocationEventContent),
    }
}

crate::enumeration! {
    pub enum MessageDirection {
        Inbound => "INBOUND",
        Outbound => "OUTBOUND",
    }
}

crate::model! {
    /// A message was received or changed delivery status.
    pub struct MessageEvent {
        kind: WebhookEventKind => "type",
        conversation: EventConversation => "conversation",
        status: MessageStatus => "status",
        direction: MessageDirection => "direction",
        segments: i64 => "segments",
        sent_at: String => "sentAt",
        delivered_at: Option<String> => "deliveredAt" (optional),
        message: MessageEventContent => "message",
    }
}

crate::model! {
    /// The recipient started or stopped typing.
    pub struct UserEvent {
        kind: WebhookEventKind => "type",
        conversation: EventConversation => "conversation",
        data: Option<Value> => "data" (optional),
    }
}

/// A verified webhook delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    Message(MessageEvent),
    User(UserEvent),
}

impl WebhookEvent {
    /// Dispatch on `type`: `USER.TYPING` is a user event, anything else a
    /// message event.
    pub fn from_value(value: Value) -> Result<Self, ConstraintError> {
        let is_user_event = value.get("type").and_then(Value::as_str) == Some("USER.TYPING");
        if is_user_event {
            UserEvent::coerce(value, false).map(Self::User)
        } else {
            MessageEvent::coerce(value, false).map(Self::Message)
        }
    }

    pub fn kind(&self) -> &WebhookEventKind {
        match self {
            Self::Message(event) => &event.kind,
            Self::User(event) => &event.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn typing_events_become_user_events() {
        let event = WebhookEvent::from_value(json!({
            "type": "USER.TYPING",
            "conversation": {"id": "conv_1", "from": "+15550001111", "to": "agent_x"},
            "data": {"isTyping": true}
        }))
        .unwrap();
        assert!(matches!(event, WebhookEvent::User(_)));
        assert_eq!(event.kind(), &WebhookEventKind::UserTyping);
    }

    #[test]
    fn message_content_dispatches_on_its_type_tag() {
        let event = WebhookEvent::from_value(json!({
            "type": "MESSAGE.RECEIVED",
            "conversation": {"id": "conv_1", "from": "+15550001111", "to": "+15550002222"},
            "status": "DELIVERED",
            "direction": "INBOUND",
            "segments": 1,
            "sentAt": "2025-01-01T00:00:00Z",
            "message": {"type": "MMS", "id": "msg_1", "mediaUrls": ["https://example.com/a.png"]}
        }))
        .unwrap();

        let WebhookEvent::Message(event) = event else {
            panic!("expected a message event");
        };
        assert_eq!(event.direction, MessageDirection::Inbound);
        assert!(matches!(
            event.message,
            MessageEventContent::Mms(ref content) if content.media_urls.len() == 1
        ));
        assert_eq!(event.message.tag(), "MMS");
    }

    #[test]
    fn location_data_carries_coordinates() {
        let content = MessageEventContent::coerce(
            json!({"type": "RCS_LOCATION_DATA", "id": "m", "data": {"lat": 37.77, "lng": -122.42}}),
            false,
        )
        .unwrap();
        let MessageEventContent::RcsLocationData(location) = content else {
            panic!("expected location data");
        };
        assert_eq!(location.data.lng, -122.42);
    }
}
