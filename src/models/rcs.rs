//! RCS capability checks, test whitelisting and deep links.

use std::collections::BTreeMap;

crate::model! {
    pub struct RcsCapabilitiesQuery {
        phone_numbers: Vec<String> => "phoneNumbers",
    }
}

crate::model! {
    pub struct RcsCapabilityActions {
        open_url: bool => "openUrl",
        call: bool => "call",
        trigger: bool => "trigger",
        request_user_location: bool => "requestUserLocation",
        schedule_event: bool => "scheduleEvent",
        send_location: bool => "sendLocation",
    }
}

crate::model! {
    pub struct RcsCapability {
        cards: Option<bool> => "cards" (optional),
        carousels: Option<bool> => "carousels" (optional),
        actions: Option<RcsCapabilityActions> => "actions" (optional),
    }
}

/// Capabilities keyed by phone number; `None` when the number is not RCS-enabled.
pub type RcsCapabilitiesResult = BTreeMap<String, Option<RcsCapability>>;

crate::model! {
    pub struct RcsWhitelist {
        agent_id: String => "agentId",
        phone_number: String => "phoneNumber",
    }
}

crate::model! {
    pub struct RcsWhitelistResponse {
        success: bool => "success",
    }
}

crate::model! {
    pub struct RcsLinkRequest {
        agent_id: String => "agentId",
        test_mode: Option<bool> => "testMode" (optional),
        phone_number: Option<String> => "phoneNumber" (optional),
        body: Option<String> => "body" (optional),
    }
}

crate::model! {
    pub struct RcsLinkResult {
        service_id: String => "serviceId",
        url: Option<String> => "url" (optional),
    }
}
