//! Shapes reused across resource areas.

use serde_json::Value;

crate::model! {
    /// When, and how often, a message or blast should go out.
    pub struct MessageSchedule {
        send_at: String => "sendAt",
        recurrence: Option<String> => "recurrence" (optional),
        timezone: Option<String> => "timezone" (optional),
        end_date: Option<String> => "endDate" (optional),
    }
}

crate::model! {
    /// Schedule echoed back for a scheduled single send.
    pub struct ScheduledSendConfig {
        send_at: String => "sendAt",
        recurrence: Option<String> => "recurrence" (optional),
        timezone: String => "timezone",
        end_date: Option<String> => "endDate" (optional),
    }
}

crate::model! {
    /// Returned instead of delivery details when a send was scheduled.
    pub struct ScheduledMessage {
        schedule_id: String => "scheduleId",
        config: ScheduledSendConfig => "config",
    }
}

crate::model! {
    pub struct Pagination {
        page: Option<i64> => "page" (optional),
        limit: Option<i64> => "limit" (optional),
        total: Option<i64> => "total" (optional),
        has_more: Option<bool> => "hasMore" (optional),
    }
}

crate::model! {
    /// Generic `{ "success": bool }` acknowledgement.
    pub struct SuccessResult {
        success: bool => "success",
        message: Option<String> => "message" (optional),
    }
}

crate::model! {
    /// Keyword responses configured on a campaign (`HELP`, `OPT_IN`, ...).
    pub struct KeywordResponse {
        message: Option<String> => "message" (optional),
        values: Option<Vec<String>> => "values" (optional),
        keywords: Option<Vec<String>> => "keywords" (optional),
    }
}

crate::model! {
    pub struct PolicyLinks {
        privacy_policy: Option<String> => "privacyPolicy" (optional),
        terms_of_service: Option<String> => "termsOfService" (optional),
    }
}

crate::model! {
    /// Result of a server-side validation pass on a brand or campaign.
    pub struct ValidationResults {
        is_valid: bool => "isValid",
        errors: Vec<ValidationIssue> => "errors",
    }
}

crate::model! {
    pub struct ValidationIssue {
        field: Option<String> => "field" (optional),
        message: String => "message",
        details: Option<Value> => "details" (optional),
    }
}

crate::model! {
    /// Free-form prompt for the autofill and validate endpoints.
    pub struct AdditionalInfoParams {
        additional_info: Option<String> => "additionalInfo" (optional),
        campaign_id: Option<String> => "campaignId" (optional),
    }
}

crate::enumeration! {
    pub enum MessageStatus {
        Pending => "PENDING",
        Queued => "QUEUED",
        Sent => "SENT",
        Delivered => "DELIVERED",
        Read => "READ",
        Failed => "FAILED",
        Undelivered => "UNDELIVERED",
        Received => "RECEIVED",
    }
}

crate::enumeration! {
    pub enum MessageProtocol {
        Sms => "SMS",
        Mms => "MMS",
        Rcs => "RCS",
    }
}

crate::enumeration! {
    /// Review state of a brand or campaign profile.
    pub enum ProfileStatus {
        Incomplete => "INCOMPLETE",
        InReview => "IN REVIEW",
        Verified => "VERIFIED",
        Failed => "FAILED",
    }
}

crate::enumeration! {
    pub enum CampaignKind {
        TollFree => "TOLL_FREE",
        TenDlc => "10DLC",
        Rcs => "RCS",
    }
}
