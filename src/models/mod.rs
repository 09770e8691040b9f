//! Request and response models for every Pinnacle endpoint, grouped by
//! resource area. All of them are declared with [`model!`](crate::model),
//! [`union!`](crate::union) or [`enumeration!`](crate::enumeration) and share
//! the loading rules described in [`crate::types`].

pub mod brands;
pub mod campaigns;
pub mod contacts;
pub mod conversations;
pub mod events;
pub mod messages;
pub mod phone_numbers;
pub mod rcs;
pub mod shared;
pub mod status;
pub mod tools;
pub mod webhooks;

pub use brands::*;
pub use campaigns::*;
pub use contacts::*;
pub use conversations::*;
pub use events::*;
pub use messages::*;
pub use phone_numbers::*;
pub use rcs::*;
pub use shared::*;
pub use status::*;
pub use tools::*;
pub use webhooks::*;

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::types::{Coerce, ConstraintError, Model};

    #[test]
    fn sms_send_response_picks_sent_or_scheduled() {
        let sent = SmsSendResponse::load(
            r#"{"messageId": "msg_1", "segments": {"count": 1}, "totalCost": 0.0075,
                "sender": "+14155164736", "recipient": "+14154746461", "status": "QUEUED"}"#,
        )
        .unwrap();
        let SmsSendResponse::Sent(details) = sent else {
            panic!("expected sent details");
        };
        assert_eq!(details.total_cost, 0.0075);

        let scheduled = SmsSendResponse::load(
            r#"{"scheduleId": "msg_sch_1", "config": {"sendAt": "2025-08-01T00:00:00Z", "timezone": "UTC"}}"#,
        )
        .unwrap();
        assert!(matches!(
            scheduled,
            SmsSendResponse::Scheduled(ref message) if message.config.timezone == "UTC"
        ));
    }

    #[test]
    fn send_response_with_neither_shape_fails() {
        let err = BlastResponse::load(r#"{"unexpected": true}"#).unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::NoUnionMember { union: "BlastResponse", ref attempts } if attempts.len() == 2
        ));
    }

    #[test]
    fn send_mms_from_params_accepts_any_key_casing() {
        for key in ["mediaUrls", "media-urls", "media_urls"] {
            let Value::Object(mut params) = json!({
                "from": "+14155164736",
                "to": "+14154746461",
                "text": "Check out this image!",
                "options": {"multipleMessages": true, "validate": true}
            }) else {
                unreachable!()
            };
            params.insert(key.to_owned(), json!(["https://example.com/a.jpg"]));
            let request = SendMms::from_params(params).unwrap();
            assert_eq!(request.media_urls, ["https://example.com/a.jpg"]);
            assert_eq!(
                request.options.as_ref().and_then(|options| options.multiple_messages),
                Some(true)
            );
        }
    }

    #[test]
    fn standalone_card_survives_from_params_unchanged() {
        let card = json!({
            "thumbnailImageAlignment": "LEFT",
            "cardOrientation": "HORIZONTAL",
            "media-height": "MEDIUM"
        });
        let Value::Object(params) = json!({
            "from": "agent_pinnacle",
            "to": "+14154746461",
            "text": "Hi",
            "quick-replies": [],
            "options": {"test-mode": true, "standalone_card": card.clone()}
        }) else {
            unreachable!()
        };

        let request = SendRcs::from_params(params).unwrap();
        let options = request.options.as_ref().unwrap();
        assert_eq!(options.test_mode, Some(true));
        assert_eq!(options.standalone_card.as_ref(), Some(&card));
        assert_eq!(
            Value::Object(request.to_h())["options"],
            json!({"test_mode": true, "standalone_card": card})
        );
    }

    #[test]
    fn rcs_request_serializes_buttons_with_their_tag() {
        let request = SendRcs {
            from: "agent_pinnacle".to_owned(),
            to: "+14154746461".to_owned(),
            text: Some("Pick one".to_owned()),
            media: None,
            cards: None,
            quick_replies: vec![RichButton::Trigger(PayloadButton {
                title: "Yes".to_owned(),
                payload: "YES".to_owned(),
                metadata: None,
            })],
            fallback: None,
            options: None,
        };
        assert_eq!(
            Value::Object(request.to_h()),
            json!({
                "from": "agent_pinnacle",
                "to": "+14154746461",
                "text": "Pick one",
                "quickReplies": [{"type": "TRIGGER", "title": "Yes", "payload": "YES"}]
            })
        );
    }

    #[test]
    fn attach_webhook_params_choose_by_shape() {
        let by_id = AttachWebhookParams::coerce(json!({"webhookId": "wh_1", "event": "MESSAGE.STATUS"}), false)
            .unwrap();
        assert!(matches!(by_id, AttachWebhookParams::ById(ref params) if params.event == Some(WebhookEventKind::MessageStatus)));

        let by_url = AttachWebhookParams::coerce(
            json!({"name": "Status hook", "url": "https://example.com/hook", "event": null}),
            false,
        )
        .unwrap();
        assert!(matches!(by_url, AttachWebhookParams::ByUrl(_)));
    }

    #[test]
    fn unknown_enum_values_survive_lenient_loads() {
        let status = BrandStatusResult::load(r#"{"id": "b_1", "status": "SUSPENDED", "error": null}"#)
            .unwrap();
        assert_eq!(status.status, BrandStatus::Other("SUSPENDED".to_owned()));

        let err = BrandStatusResult::load_strict(r#"{"id": "b_1", "status": "SUSPENDED"}"#).unwrap_err();
        assert!(matches!(err.root_cause(), ConstraintError::UnknownVariant { .. }));
    }

    #[test]
    fn capabilities_map_allows_null_entries() {
        let result = RcsCapabilitiesResult::load(
            r#"{"+12345678901": {"cards": true}, "+19876543210": null}"#,
        )
        .unwrap();
        assert_eq!(result["+12345678901"].as_ref().and_then(|c| c.cards), Some(true));
        assert_eq!(result["+19876543210"], None);
    }
}
