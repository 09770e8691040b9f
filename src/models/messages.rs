//! Message send, validate, blast and lookup payloads.

use serde_json::Value;

use crate::models::shared::{MessageProtocol, MessageSchedule, MessageStatus, ScheduledMessage};
use crate::types::Nullable;

crate::model! {
    /// A previously sent or received message.
    pub struct Message {
        id: String => "id",
        content: Value => "content",
        cost: Option<f64> => "cost" (nullable),
        delivered_at: Option<String> => "deliveredAt" (nullable),
        error: Option<String> => "error" (nullable),
        method: String => "method",
        num_segments: i64 => "numSegments",
        receiver: String => "receiver",
        sender: String => "sender",
        sent_at: Option<String> => "sentAt" (nullable),
        status: MessageStatus => "status",
        protocol: MessageProtocol => "type",
    }
}

crate::model! {
    /// `reaction: Some(Nullable::Null)` removes the current reaction.
    pub struct ReactMessageParams {
        message_id: String => "messageId",
        reaction: Option<Nullable<String>> => "reaction" (optional, nullable),
        options: Option<ReactOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct ReactOptions {
        force: Option<bool> => "force" (optional),
    }
}

crate::model! {
    pub struct ReactionResult {
        success: bool => "success",
        message_id: Option<String> => "messageId" (optional),
        reaction: Option<String> => "reaction" (optional, nullable),
    }
}

crate::model! {
    pub struct Tracking {
        links: Option<bool> => "links" (optional),
    }
}

crate::model! {
    pub struct SendSmsOptions {
        schedule: Option<MessageSchedule> => "schedule" (optional),
        tracking: Option<Tracking> => "tracking" (optional),
        validate: Option<bool> => "validate" (optional),
    }
}

crate::model! {
    /// Body of `POST /messages/send/sms`.
    pub struct SendSms {
        from: String => "from",
        to: String => "to",
        text: String => "text",
        options: Option<SendSmsOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct SmsContent {
        text: String => "text",
    }
}

crate::model! {
    pub struct SentSmsDetails {
        message_id: String => "messageId",
        segments: Value => "segments",
        total_cost: f64 => "totalCost",
        sender: String => "sender",
        recipient: String => "recipient",
        status: String => "status",
    }
}

crate::union! {
    /// Delivery details, or the schedule when `options.schedule` was set.
    pub enum SmsSendResponse {
        Sent(SentSmsDetails),
        Scheduled(ScheduledMessage),
    }
}

crate::model! {
    pub struct SmsValidationResult {
        is_over_segment_limit: Option<bool> => "isOverSegmentLimit" (optional),
        segments: Value => "segments",
        total: Value => "total",
        unit: f64 => "unit",
    }
}

crate::model! {
    pub struct SendMmsOptions {
        multiple_messages: Option<bool> => "multiple_messages" (optional),
        schedule: Option<MessageSchedule> => "schedule" (optional),
        tracking: Option<Tracking> => "tracking" (optional),
        validate: Option<bool> => "validate" (optional),
    }
}

crate::model! {
    /// Body of `POST /messages/send/mms`.
    pub struct SendMms {
        from: String => "from",
        to: String => "to",
        media_urls: Vec<String> => "mediaUrls",
        text: String => "text",
        options: Option<SendMmsOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct MmsContent {
        media_urls: Vec<String> => "mediaUrls",
        text: Option<String> => "text" (optional),
    }
}

crate::model! {
    pub struct SentMmsDetails {
        message_ids: Vec<String> => "messageIds",
        segments: i64 => "segments",
        total_cost: f64 => "totalCost",
        sender: String => "sender",
        recipient: String => "recipient",
        status: String => "status",
    }
}

crate::union! {
    pub enum MmsSendResponse {
        Sent(SentMmsDetails),
        Scheduled(ScheduledMessage),
    }
}

crate::model! {
    pub struct MmsValidationSegments {
        count: i64 => "count",
        unsupported_files: Vec<String> => "unsupportedFiles",
        value: Value => "value",
    }
}

crate::model! {
    pub struct MmsValidationResult {
        segments: MmsValidationSegments => "segments",
        total: Option<Value> => "total" (optional),
        unit: Option<f64> => "unit" (optional),
    }
}

crate::model! {
    /// Button attached to an RCS card or offered as a quick reply.
    pub struct OpenUrlButton {
        title: String => "title",
        payload: String => "payload",
        metadata: Option<String> => "metadata" (optional),
        webview_mode: Option<WebviewMode> => "webviewMode" (optional),
    }
}

crate::enumeration! {
    pub enum WebviewMode {
        Half => "HALF",
        Tall => "TALL",
        Full => "FULL",
    }
}

crate::model! {
    pub struct PayloadButton {
        title: String => "title",
        payload: String => "payload",
        metadata: Option<String> => "metadata" (optional),
    }
}

crate::model! {
    pub struct RequestLocationButton {
        title: String => "title",
        metadata: Option<String> => "metadata" (optional),
    }
}

crate::model! {
    pub struct ScheduleEventButton {
        title: String => "title",
        event_title: String => "eventTitle",
        event_start_time: String => "eventStartTime",
        event_end_time: String => "eventEndTime",
        event_description: Option<String> => "eventDescription" (optional),
        metadata: Option<String> => "metadata" (optional),
    }
}

crate::model! {
    pub struct LatLong {
        lat: f64 => "lat",
        lng: f64 => "lng",
    }
}

crate::model! {
    pub struct SendLocationButton {
        title: String => "title",
        lat_long: LatLong => "latLong",
        name: Option<String> => "name" (optional),
        metadata: Option<String> => "metadata" (optional),
    }
}

crate::union! {
    pub enum RichButton tagged "type" {
        "OPEN_URL" => OpenUrl(OpenUrlButton),
        "CALL" => Call(PayloadButton),
        "TRIGGER" => Trigger(PayloadButton),
        "REQUEST_USER_LOCATION" => RequestUserLocation(RequestLocationButton),
        "SCHEDULE_EVENT" => ScheduleEvent(ScheduleEventButton),
        "SEND_LOCATION" => SendLocation(SendLocationButton),
    }
}

crate::model! {
    pub struct RcsCard {
        title: String => "title",
        subtitle: Option<String> => "subtitle" (optional),
        media: Option<String> => "media" (optional),
        buttons: Vec<RichButton> => "buttons",
    }
}

crate::model! {
    /// RCS content: exactly one of `text`, `media` or `cards`, plus quick replies.
    pub struct RcsContent {
        text: Option<String> => "text" (optional),
        media: Option<String> => "media" (optional),
        cards: Option<Vec<RcsCard>> => "cards" (optional),
        quick_replies: Vec<RichButton> => "quickReplies",
    }
}

crate::model! {
    /// SMS/MMS sent instead when the recipient cannot receive RCS.
    pub struct FallbackMessage {
        from: String => "from",
        text: Option<String> => "text" (optional),
        media_urls: Option<Vec<String>> => "mediaUrls" (optional),
    }
}

crate::model! {
    pub struct SendRcsOptions {
        schedule: Option<MessageSchedule> => "schedule" (optional),
        tracking: Option<Tracking> => "tracking" (optional),
        transcode: Option<bool> => "transcode" (optional),
        validate: Option<bool> => "validate" (optional),
        test_mode: Option<bool> => "test_mode" (optional),
        standalone_card: Option<Value> => "standalone_card" (optional),
    }
}

crate::model! {
    /// Body of `POST /messages/send/rcs`.
    pub struct SendRcs {
        from: String => "from",
        to: String => "to",
        text: Option<String> => "text" (optional),
        media: Option<String> => "media" (optional),
        cards: Option<Vec<RcsCard>> => "cards" (optional),
        quick_replies: Vec<RichButton> => "quickReplies",
        fallback: Option<FallbackMessage> => "fallback" (optional),
        options: Option<SendRcsOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct SentRcsDetails {
        message_id: String => "messageId",
        segments: Option<i64> => "segments" (optional),
        total_cost: f64 => "totalCost",
        sender: String => "sender",
        recipient: String => "recipient",
        status: String => "status",
    }
}

crate::union! {
    pub enum RcsSendResponse {
        Sent(SentRcsDetails),
        Scheduled(ScheduledMessage),
    }
}

crate::model! {
    pub struct TypingOptions {
        test_mode: Option<bool> => "test_mode" (optional),
    }
}

crate::model! {
    pub struct SendTypingIndicator {
        agent_id: String => "agentId",
        to: String => "to",
        options: Option<TypingOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct SendTypingIndicatorResponse {
        success: bool => "success",
        agent_id: String => "agentId",
        recipient: String => "recipient",
        started_at: String => "startedAt",
        ended_at: String => "endedAt",
    }
}

crate::model! {
    pub struct RcsValidationResult {
        is_valid: Option<bool> => "isValid" (optional),
        total: Option<Value> => "total" (optional),
        errors: Option<Vec<String>> => "errors" (optional),
        warnings: Option<Vec<String>> => "warnings" (optional),
    }
}

crate::model! {
    pub struct BlastOptions {
        schedule: Option<MessageSchedule> => "schedule" (optional),
        validate: Option<bool> => "validate" (optional),
        transcode: Option<bool> => "transcode" (optional),
        standalone_card: Option<Value> => "standalone_card" (optional),
    }
}

crate::model! {
    pub struct BlastSms {
        audience_id: String => "audienceId",
        senders: Vec<String> => "senders",
        message: SmsContent => "message",
        options: Option<BlastOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct BlastMms {
        audience_id: String => "audienceId",
        senders: Vec<String> => "senders",
        message: MmsContent => "message",
        options: Option<BlastOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct BlastRcs {
        audience_id: String => "audienceId",
        senders: Vec<String> => "senders",
        message: RcsContent => "message",
        options: Option<BlastOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct BlastDetails {
        blast_id: String => "blastId",
        audience_id: String => "audienceId",
        total_recipients: i64 => "totalRecipients",
        total_messages: i64 => "totalMessages",
        total_segments: i64 => "totalSegments",
        total_cost: f64 => "totalCost",
    }
}

crate::model! {
    pub struct ScheduledBlastConfig {
        send_at: Option<String> => "sendAt" (optional),
        recurrence: Option<String> => "recurrence" (optional),
        timezone: Option<String> => "timezone" (optional),
        end_date: Option<String> => "endDate" (optional),
    }
}

crate::model! {
    pub struct ScheduledBlast {
        schedule_id: String => "scheduleId",
        config: ScheduledBlastConfig => "config",
    }
}

crate::union! {
    pub enum BlastResponse {
        Sent(BlastDetails),
        Scheduled(ScheduledBlast),
    }
}

crate::model! {
    pub struct ScheduleCancelResult {
        success: bool => "success",
    }
}
