use std::sync::OnceLock;

use reqwest::header::HeaderMap;

use crate::client::error::{PinnacleError, ResponseError};
use crate::client::raw::RawClient;
use crate::models::{
    BlastMms, BlastResponse, BlastRcs, BlastSms, Message, MmsContent, MmsSendResponse,
    MmsValidationResult, RcsContent, RcsSendResponse, RcsValidationResult, ReactMessageParams,
    ReactionResult, ScheduleCancelResult, SendMms, SendRcs, SendSms, SendTypingIndicator,
    SendTypingIndicatorResponse, SmsContent, SmsSendResponse, SmsValidationResult, WebhookEvent,
};
use crate::transport::{Request, RequestOptions, segment};
use crate::types::coerce::parse_json;

pub const SIGNING_SECRET_HEADER: &str = "pinnacle-signing-secret";
pub const SIGNING_SECRET_ENV: &str = "PINNACLE_SIGNING_SECRET";

/// `messages/*` endpoints plus inbound webhook verification.
#[derive(Clone)]
pub struct MessagesClient {
    raw: RawClient,
    sms: OnceLock<SmsClient>,
    mms: OnceLock<MmsClient>,
    rcs: OnceLock<RcsMessagesClient>,
    blast: OnceLock<BlastClient>,
    schedule: OnceLock<ScheduleClient>,
}

impl MessagesClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self {
            raw,
            sms: OnceLock::new(),
            mms: OnceLock::new(),
            rcs: OnceLock::new(),
            blast: OnceLock::new(),
            schedule: OnceLock::new(),
        }
    }

    pub fn sms(&self) -> &SmsClient {
        self.sms.get_or_init(|| SmsClient {
            raw: self.raw.clone(),
        })
    }

    pub fn mms(&self) -> &MmsClient {
        self.mms.get_or_init(|| MmsClient {
            raw: self.raw.clone(),
        })
    }

    pub fn rcs(&self) -> &RcsMessagesClient {
        self.rcs.get_or_init(|| RcsMessagesClient {
            raw: self.raw.clone(),
        })
    }

    pub fn blast(&self) -> &BlastClient {
        self.blast.get_or_init(|| BlastClient {
            raw: self.raw.clone(),
        })
    }

    pub fn schedule(&self) -> &ScheduleClient {
        self.schedule.get_or_init(|| ScheduleClient {
            raw: self.raw.clone(),
        })
    }

    /// Retrieve a previously sent message.
    pub async fn get(&self, id: &str, options: &RequestOptions) -> Result<Message, PinnacleError> {
        let request = Request::get(format!("messages/{}", segment(id))).options(options);
        self.raw.call(request).await
    }

    /// Add or remove an emoji reaction on a sent message.
    pub async fn react(
        &self,
        params: &ReactMessageParams,
        options: &RequestOptions,
    ) -> Result<ReactionResult, PinnacleError> {
        let request = Request::post("messages/react").json(params).options(options);
        self.raw.call(request).await
    }

    /// Verify and decode a webhook delivery.
    ///
    /// The `PINNACLE-SIGNING-SECRET` header must equal `secret`, or the
    /// `PINNACLE_SIGNING_SECRET` environment variable when `secret` is `None`.
    /// Verification failures are 401 response errors; a body that is not JSON
    /// is a 400 response error.
    pub fn process(
        &self,
        headers: &HeaderMap,
        body: &str,
        secret: Option<&str>,
    ) -> Result<WebhookEvent, PinnacleError> {
        let Some(header_secret) = headers.get(SIGNING_SECRET_HEADER) else {
            return Err(unauthorized(
                "Failed to get PINNACLE-SIGNING-SECRET header from request",
            ));
        };
        let expected = match secret {
            Some(secret) => secret.to_owned(),
            None => std::env::var(SIGNING_SECRET_ENV).map_err(|_| {
                unauthorized("Set PINNACLE_SIGNING_SECRET env var or pass secret argument")
            })?,
        };
        if header_secret.as_bytes() != expected.as_bytes() {
            return Err(unauthorized("Invalid webhook signature"));
        }

        let value = parse_json(body).map_err(|err| {
            PinnacleError::Response(ResponseError::new(
                400,
                format!("Invalid message event format: {err}"),
            ))
        })?;
        let event = WebhookEvent::from_value(value)?;
        tracing::debug!(kind = %event.kind(), "verified webhook event");
        Ok(event)
    }
}

fn unauthorized(message: &str) -> PinnacleError {
    PinnacleError::Response(ResponseError::new(401, message))
}

#[derive(Clone)]
pub struct SmsClient {
    raw: RawClient,
}

impl SmsClient {
    /// Send an SMS now, or schedule it when `options.schedule` is set.
    pub async fn send(
        &self,
        params: &SendSms,
        options: &RequestOptions,
    ) -> Result<SmsSendResponse, PinnacleError> {
        let request = Request::post("messages/send/sms").json(params).options(options);
        self.raw.call(request).await
    }

    /// Segment count and cost estimate without sending.
    pub async fn validate(
        &self,
        params: &SmsContent,
        options: &RequestOptions,
    ) -> Result<SmsValidationResult, PinnacleError> {
        let request = Request::post("messages/validate/sms").json(params).options(options);
        self.raw.call(request).await
    }
}

#[derive(Clone)]
pub struct MmsClient {
    raw: RawClient,
}

impl MmsClient {
    pub async fn send(
        &self,
        params: &SendMms,
        options: &RequestOptions,
    ) -> Result<MmsSendResponse, PinnacleError> {
        let request = Request::post("messages/send/mms").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn validate(
        &self,
        params: &MmsContent,
        options: &RequestOptions,
    ) -> Result<MmsValidationResult, PinnacleError> {
        let request = Request::post("messages/validate/mms").json(params).options(options);
        self.raw.call(request).await
    }
}

#[derive(Clone)]
pub struct RcsMessagesClient {
    raw: RawClient,
}

impl RcsMessagesClient {
    pub async fn send(
        &self,
        params: &SendRcs,
        options: &RequestOptions,
    ) -> Result<RcsSendResponse, PinnacleError> {
        let request = Request::post("messages/send/rcs").json(params).options(options);
        self.raw.call(request).await
    }

    /// Show the typing indicator on the recipient's device.
    pub async fn send_typing(
        &self,
        params: &SendTypingIndicator,
        options: &RequestOptions,
    ) -> Result<SendTypingIndicatorResponse, PinnacleError> {
        let request = Request::post("messages/send/typing").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn validate(
        &self,
        params: &RcsContent,
        options: &RequestOptions,
    ) -> Result<RcsValidationResult, PinnacleError> {
        let request = Request::post("messages/validate/rcs").json(params).options(options);
        self.raw.call(request).await
    }
}

/// Sends to every contact of an audience.
#[derive(Clone)]
pub struct BlastClient {
    raw: RawClient,
}

impl BlastClient {
    pub async fn sms(
        &self,
        params: &BlastSms,
        options: &RequestOptions,
    ) -> Result<BlastResponse, PinnacleError> {
        let request = Request::post("messages/blast/sms").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn mms(
        &self,
        params: &BlastMms,
        options: &RequestOptions,
    ) -> Result<BlastResponse, PinnacleError> {
        let request = Request::post("messages/blast/mms").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn rcs(
        &self,
        params: &BlastRcs,
        options: &RequestOptions,
    ) -> Result<BlastResponse, PinnacleError> {
        let request = Request::post("messages/blast/rcs").json(params).options(options);
        self.raw.call(request).await
    }
}

#[derive(Clone)]
pub struct ScheduleClient {
    raw: RawClient,
}

impl ScheduleClient {
    /// Cancel a scheduled message or blast.
    pub async fn cancel(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<ScheduleCancelResult, PinnacleError> {
        let request = Request::delete(format!("messages/schedule/{}", segment(id))).options(options);
        self.raw.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    use super::*;
    use crate::client::error::ResponseErrorKind;
    use crate::client::test_client;
    use crate::models::{SendSmsOptions, WebhookEventKind};
    use crate::transport::fake::FakeTransport;

    fn secret_headers(secret: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(SIGNING_SECRET_HEADER, HeaderValue::from_str(secret).unwrap());
        headers
    }

    const TYPING_EVENT: &str = r#"{
        "type": "USER.TYPING",
        "conversation": {"id": "conv_1", "from": "+15550001111", "to": "agent_x"}
    }"#;

    #[tokio::test]
    async fn sms_send_posts_the_wire_body_and_loads_the_union() {
        let transport = FakeTransport::new(
            200,
            r#"{"messageId": "msg_1", "segments": {"count": 1}, "totalCost": 0.0075,
                "sender": "+14155164736", "recipient": "+14154746461", "status": "QUEUED"}"#,
        );
        let client = test_client(&transport);
        let params = SendSms {
            from: "+14155164736".to_owned(),
            to: "+14154746461".to_owned(),
            text: "Hello from Pinnacle".to_owned(),
            options: Some(SendSmsOptions {
                schedule: None,
                tracking: None,
                validate: Some(true),
            }),
        };

        let response = client
            .messages()
            .sms()
            .send(&params, &RequestOptions::default())
            .await
            .unwrap();
        assert!(matches!(response, SmsSendResponse::Sent(ref details) if details.message_id == "msg_1"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/messages/send/sms");
        assert_eq!(
            transport.last_json_body(),
            json!({
                "from": "+14155164736",
                "to": "+14154746461",
                "text": "Hello from Pinnacle",
                "options": {"validate": true}
            })
        );
    }

    #[tokio::test]
    async fn schedule_cancel_deletes_by_id() {
        let transport = FakeTransport::new(200, r#"{"success": true}"#);
        let client = test_client(&transport);
        let result = client
            .messages()
            .schedule()
            .cancel("msg_sch_1234567890", &RequestOptions::default())
            .await
            .unwrap();
        assert!(result.success);

        let request = transport.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url.path(), "/messages/schedule/msg_sch_1234567890");
    }

    #[tokio::test]
    async fn blast_and_typing_hit_their_endpoints() {
        let transport = FakeTransport::new(
            200,
            r#"{"blastId": "blast_1", "audienceId": "aud_1", "totalRecipients": 20,
                "totalMessages": 20, "totalSegments": 20, "totalCost": 0.15}"#,
        )
        .then(
            200,
            r#"{"success": true, "agentId": "agent_1", "recipient": "+14154746461",
                "startedAt": "2025-06-01T12:00:00Z", "endedAt": "2025-06-01T12:00:20Z"}"#,
        );
        let client = test_client(&transport);
        let options = RequestOptions::default();

        let blast = client
            .messages()
            .blast()
            .sms(
                &BlastSms {
                    audience_id: "aud_1".to_owned(),
                    senders: vec!["+14155164736".to_owned()],
                    message: SmsContent {
                        text: "Sale ends tonight".to_owned(),
                    },
                    options: None,
                },
                &options,
            )
            .await
            .unwrap();
        assert!(matches!(blast, BlastResponse::Sent(ref details) if details.total_recipients == 20));
        assert_eq!(transport.last_request().url.path(), "/messages/blast/sms");

        let typing = client
            .messages()
            .rcs()
            .send_typing(
                &SendTypingIndicator {
                    agent_id: "agent_1".to_owned(),
                    to: "+14154746461".to_owned(),
                    options: None,
                },
                &options,
            )
            .await
            .unwrap();
        assert!(typing.success);
        assert_eq!(transport.last_request().url.path(), "/messages/send/typing");
    }

    #[tokio::test]
    async fn get_maps_not_found() {
        let transport = FakeTransport::new(404, r#"{"error": "message not found"}"#);
        let err = test_client(&transport)
            .messages()
            .get("msg_missing", &RequestOptions::default())
            .await
            .unwrap_err();
        let PinnacleError::Response(err) = err else {
            panic!("expected a response error");
        };
        assert_eq!(err.kind, ResponseErrorKind::NotFound);
        assert!(err.body.contains("not found"));
    }

    #[test]
    fn process_accepts_a_matching_secret() {
        let client = test_client(&FakeTransport::new(200, "{}"));
        let event = client
            .messages()
            .process(&secret_headers("whsec_1"), TYPING_EVENT, Some("whsec_1"))
            .unwrap();
        assert!(matches!(event, WebhookEvent::User(_)));
        assert_eq!(event.kind(), &WebhookEventKind::UserTyping);
    }

    #[test]
    fn process_rejects_missing_or_wrong_secrets() {
        let client = test_client(&FakeTransport::new(200, "{}"));
        let messages = client.messages();

        let missing = messages
            .process(&HeaderMap::new(), TYPING_EVENT, Some("whsec_1"))
            .unwrap_err();
        assert_eq!(missing.status(), Some(401));

        let wrong = messages
            .process(&secret_headers("whsec_2"), TYPING_EVENT, Some("whsec_1"))
            .unwrap_err();
        let PinnacleError::Response(wrong) = wrong else {
            panic!("expected a response error");
        };
        assert_eq!(wrong.kind, ResponseErrorKind::Unauthorized);
        assert_eq!(wrong.body, "Invalid webhook signature");
    }

    #[test]
    fn process_reports_malformed_bodies_as_client_errors() {
        let client = test_client(&FakeTransport::new(200, "{}"));
        let err = client
            .messages()
            .process(&secret_headers("whsec_1"), "{ nope", Some("whsec_1"))
            .unwrap_err();
        let PinnacleError::Response(err) = err else {
            panic!("expected a response error");
        };
        assert_eq!(err.kind, ResponseErrorKind::Client);
        assert_eq!(err.code, 400);
        assert!(err.body.starts_with("Invalid message event format"));
    }
}
