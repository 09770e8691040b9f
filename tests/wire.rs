//! Wire-level tests against a mock Pinnacle server.
//!
//! Each test checks the method, path, query and body the client puts on the
//! wire, tagged with an `X-Test-Id` header the way a recorded fixture would be.

use pinnacle::models::{
    AttachWebhookById, AttachWebhookParams, AudienceGetResponse, AudienceQuery, CreateShortUrl,
    GetWebhooks, MessageStatus, ReactMessageParams, ReactOptions, RefreshFiles,
};
use pinnacle::types::Nullable;
use pinnacle::{PinnacleClient, PinnacleError, RequestOptions, ResponseErrorKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PinnacleClient {
    PinnacleClient::builder("test-api-key")
        .base_url(server.uri())
        .build()
        .expect("mock server URI is a valid base URL")
}

fn tagged(test_id: &str) -> RequestOptions {
    RequestOptions::new().header("X-Test-Id", test_id)
}

#[tokio::test]
async fn messages_get_fetches_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/msg_1234567890"))
        .and(header("pinnacle-api-key", "test-api-key"))
        .and(header("x-test-id", "messages.get.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_1234567890",
            "content": {"text": "hello"},
            "cost": 0.0075,
            "deliveredAt": null,
            "error": null,
            "method": "API",
            "numSegments": 1,
            "receiver": "+14155550123",
            "sender": "+14155550100",
            "sentAt": "2025-06-01T12:00:00Z",
            "status": "SENT",
            "type": "SMS"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = client_for(&server)
        .messages()
        .get("msg_1234567890", &tagged("messages.get.0"))
        .await
        .unwrap();
    assert_eq!(message.status, MessageStatus::Sent);
    assert_eq!(message.num_segments, 1);
}

#[tokio::test]
async fn messages_react_posts_the_reaction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages/react"))
        .and(body_json(json!({
            "messageId": "msg_1234567890",
            "reaction": "👍",
            "options": {"force": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let params = ReactMessageParams {
        message_id: "msg_1234567890".to_owned(),
        reaction: Some(Nullable::Value("👍".to_owned())),
        options: Some(ReactOptions { force: Some(true) }),
    };
    let result = client_for(&server)
        .messages()
        .react(&params, &tagged("messages.react.0"))
        .await
        .unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn messages_react_can_send_an_explicit_null_reaction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages/react"))
        .and(body_json(json!({
            "messageId": "msg_1234567890",
            "reaction": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "messageId": "msg_1234567890",
            "reaction": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ReactMessageParams {
        message_id: "msg_1234567890".to_owned(),
        reaction: Some(Nullable::Null),
        options: None,
    };
    let result = client_for(&server)
        .messages()
        .react(&params, &tagged("messages.react.1"))
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.reaction, None);
}

#[tokio::test]
async fn audiences_get_sends_the_id_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/audiences"))
        .and(query_param("id", "aud_abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "aud_abc123",
            "name": "Newsletter",
            "description": null,
            "contactCount": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = AudienceQuery {
        id: "aud_abc123".to_owned(),
        page: None,
        limit: None,
    };
    let audience = client_for(&server)
        .audiences()
        .get(&query, &tagged("audiences.get.0"))
        .await
        .unwrap();
    let AudienceGetResponse::CountOnly(audience) = audience else {
        panic!("expected the count-only shape");
    };
    assert_eq!(audience.contact_count, 42);
}

#[tokio::test]
async fn webhook_attach_keeps_an_encoded_phone_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/phone-numbers/%2B14155551234/attach-webhook"))
        .and(body_json(json!({"webhookId": "wh_1234567890"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "webhook": {"id": "wh_1234567890", "name": "Inbound", "endpoint": "https://example.com/hook"},
            "event": null,
            "phoneNumber": "+14155551234"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = AttachWebhookParams::ById(AttachWebhookById {
        webhook_id: "wh_1234567890".to_owned(),
        event: None,
    });
    let attached = client_for(&server)
        .phone_numbers()
        .webhook()
        .attach(
            "%2B14155551234",
            &params,
            &tagged("phone_numbers.webhook.attach.0"),
        )
        .await
        .unwrap();
    assert_eq!(attached.phone_number, "+14155551234");
    assert_eq!(attached.webhook.endpoint, "https://example.com/hook");
}

#[tokio::test]
async fn webhooks_get_posts_identifiers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .and(body_json(json!({"identifiers": ["+14155551234"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "webhooks": [{"identifier": "+14155551234", "webhook": null, "event": null}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = GetWebhooks {
        identifiers: vec!["+14155551234".to_owned()],
    };
    let result = client_for(&server)
        .webhooks()
        .get(&params, &tagged("webhooks.get.0"))
        .await
        .unwrap();
    assert_eq!(result.webhooks.len(), 1);
    assert_eq!(result.webhooks[0].webhook, None);
}

#[tokio::test]
async fn tools_url_create_and_file_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tools/url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://pncl.to/abc",
            "destination": "https://example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tools/files/refresh"))
        .and(body_json(json!({"urls": ["https://files.example/a.png"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "urls": [{"original": "https://files.example/a.png", "refreshed": "https://files.example/a.png?v=2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let link = client
        .tools()
        .url()
        .create(
            &CreateShortUrl {
                url: "https://example.com".to_owned(),
                options: None,
            },
            &tagged("tools.url.create.0"),
        )
        .await
        .unwrap();
    assert_eq!(link.url, "https://pncl.to/abc");

    let refreshed = client
        .tools()
        .file()
        .refresh(
            &RefreshFiles {
                urls: vec!["https://files.example/a.png".to_owned()],
            },
            &tagged("tools.file.refresh.0"),
        )
        .await
        .unwrap();
    assert_eq!(refreshed.urls[0].refreshed, "https://files.example/a.png?v=2");
}

#[tokio::test]
async fn error_statuses_map_to_response_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error": "not found"}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/messages/forbidden"))
        .respond_with(ResponseTemplate::new(403).set_body_string("nope"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = RequestOptions::default();

    let err = client.messages().get("missing", &options).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    let PinnacleError::Response(err) = err else {
        panic!("expected a response error");
    };
    assert_eq!(err.kind, ResponseErrorKind::NotFound);
    assert_eq!(err.body, r#"{"error": "not found"}"#);

    let err = client.messages().get("forbidden", &options).await.unwrap_err();
    assert!(matches!(
        err,
        PinnacleError::Response(ref response) if response.kind == ResponseErrorKind::Forbidden
    ));
}

#[tokio::test]
async fn per_request_timeout_is_reported_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(5))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .messages()
        .get(
            "slow",
            &RequestOptions::new().timeout(std::time::Duration::from_millis(100)),
        )
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err:?}");
}
