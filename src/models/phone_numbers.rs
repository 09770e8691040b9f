//! Phone number search, purchase, lookup and webhook/campaign attachment.

use serde_json::Value;

use crate::models::shared::CampaignKind;
use crate::models::webhooks::WebhookEventKind;

crate::model! {
    pub struct SearchByLocation {
        city: Option<String> => "city" (optional),
        state: Option<String> => "state" (optional),
        national_destination_code: Option<String> => "nationalDestinationCode" (optional),
    }
}

crate::model! {
    pub struct SearchByDigits {
        contains: Option<String> => "contains" (optional),
        starts_with: Option<String> => "startsWith" (optional),
        ends_with: Option<String> => "endsWith" (optional),
    }
}

crate::model! {
    pub struct SearchOptions {
        limit: Option<i64> => "limit" (optional),
    }
}

crate::model! {
    pub struct SearchPhoneNumbers {
        number_types: Vec<PhoneType> => "type",
        features: Option<Vec<PhoneFeature>> => "features" (optional),
        location: Option<SearchByLocation> => "location" (optional),
        number: Option<SearchByDigits> => "number" (optional),
        options: Option<SearchOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct PhoneNumberCost {
        monthly: f64 => "monthly",
        upfront: Option<f64> => "upfront" (optional),
        currency: Option<String> => "currency" (optional),
    }
}

crate::model! {
    pub struct PhoneNumberRegion {
        city: Option<String> => "city" (optional),
        state: Option<String> => "state" (optional),
        country: Option<String> => "country" (optional),
    }
}

crate::model! {
    /// A number available for purchase.
    pub struct PhoneNumberDetails {
        number: String => "number",
        phone_type: PhoneType => "type",
        cost: PhoneNumberCost => "cost",
        features: Vec<PhoneFeature> => "features",
        region: PhoneNumberRegion => "region",
    }
}

crate::model! {
    pub struct BuyPhoneNumbers {
        numbers: Vec<String> => "numbers",
    }
}

crate::model! {
    pub struct PurchasedNumber {
        number: String => "number",
        status: String => "status",
        capabilities: Option<Value> => "capabilities" (optional),
    }
}

crate::model! {
    pub struct EnhancedContactInfo {
        context: Option<String> => "context" (optional),
    }
}

crate::model! {
    pub struct PhoneDetailsOptions {
        force: Option<bool> => "force" (optional),
        risk: Option<bool> => "risk" (optional),
        enhanced_contact_info: Option<EnhancedContactInfo> => "enhancedContactInfo" (optional),
    }
}

crate::model! {
    /// Body of `POST /phone-numbers/details`.
    pub struct PhoneNumberLookup {
        phone: String => "phone",
        level: Option<String> => "level" (optional),
        options: Option<PhoneDetailsOptions> => "options" (optional),
    }
}

crate::model! {
    /// Lookup result; `basic` and `advanced` levels share this shape with
    /// the advanced-only fields left unset.
    pub struct PhoneInformation {
        is_valid: bool => "isValid",
        number_type: Value => "type",
        formats: Value => "formats",
        location: Value => "location",
        carrier: Value => "carrier",
        contact: Option<Value> => "contact" (optional, nullable),
        risk: Option<Value> => "risk" (optional),
    }
}

crate::model! {
    pub struct AttachWebhookById {
        webhook_id: String => "webhookId",
        event: Option<WebhookEventKind> => "event" (optional, nullable),
    }
}

crate::model! {
    pub struct CreateAndAttachWebhook {
        name: String => "name",
        url: String => "url",
        event: Option<WebhookEventKind> => "event" (optional, nullable),
    }
}

crate::union! {
    /// Attach an existing webhook, or create one from a URL and attach it.
    pub enum AttachWebhookParams {
        ById(AttachWebhookById),
        ByUrl(CreateAndAttachWebhook),
    }
}

crate::model! {
    pub struct AttachedWebhook {
        id: String => "id",
        name: String => "name",
        endpoint: String => "endpoint",
        signing_secret: Option<String> => "signingSecret" (optional),
    }
}

crate::model! {
    pub struct ConfiguredWebhook {
        webhook: AttachedWebhook => "webhook",
        event: Option<WebhookEventKind> => "event" (nullable),
        phone_number: String => "phoneNumber",
    }
}

crate::model! {
    pub struct DetachedWebhookInfo {
        success: bool => "success",
        webhook_id: Option<String> => "webhookId" (optional),
        phone_number: Option<String> => "phoneNumber" (optional),
    }
}

crate::model! {
    pub struct AttachCampaign {
        phones: Vec<String> => "phones",
        campaign_type: CampaignKind => "campaignType",
        campaign_id: String => "campaignId",
    }
}

crate::model! {
    pub struct DetachCampaign {
        phones: Vec<String> => "phones",
    }
}

crate::model! {
    pub struct CampaignAttachment {
        phone_number: String => "phoneNumber",
        campaign: Option<Value> => "campaign" (optional, nullable),
        status: Option<String> => "status" (optional),
    }
}

crate::model! {
    pub struct CampaignAttachmentResult {
        phone_numbers: Vec<CampaignAttachment> => "phoneNumbers",
    }
}

crate::enumeration! {
    pub enum PhoneType {
        Local => "LOCAL",
        TollFree => "TOLL_FREE",
    }
}

crate::enumeration! {
    pub enum PhoneFeature {
        Sms => "SMS",
        Mms => "MMS",
        Voice => "VOICE",
    }
}
