//! 10DLC, toll-free and RCS campaign payloads.

use crate::models::brands::ExtendedBrand;
use crate::models::shared::{KeywordResponse, PolicyLinks, ProfileStatus};

crate::model! {
    pub struct CampaignKeywords {
        help: Option<KeywordResponse> => "HELP" (optional),
        opt_in: Option<KeywordResponse> => "OPT_IN" (optional),
        opt_out: Option<KeywordResponse> => "OPT_OUT" (optional),
    }
}

crate::model! {
    pub struct DlcCampaignOptions {
        affiliate_marketing: Option<bool> => "affiliateMarketing" (optional),
        age_gated: Option<bool> => "ageGated" (optional),
        direct_lending: Option<bool> => "directLending" (optional),
        embedded_link: Option<String> => "embeddedLink" (optional),
        embedded_phone: Option<bool> => "embeddedPhone" (optional),
        number_pooling: Option<bool> => "numberPooling" (optional),
    }
}

crate::model! {
    pub struct DlcUseCase {
        value: String => "value",
        sub: Option<Vec<String>> => "sub" (optional),
    }
}

crate::model! {
    /// Body of `POST /campaigns/dlc`. Also returned by the autofill endpoint.
    pub struct UpsertDlcCampaign {
        campaign_id: Option<String> => "campaignId" (optional),
        auto_renew: Option<bool> => "autoRenew" (optional),
        brand: Option<String> => "brand" (optional),
        name: Option<String> => "name" (optional),
        description: Option<String> => "description" (optional),
        keywords: Option<CampaignKeywords> => "keywords" (optional),
        links: Option<PolicyLinks> => "links" (optional),
        message_flow: Option<String> => "messageFlow" (optional),
        options: Option<DlcCampaignOptions> => "options" (optional),
        sample_messages: Option<Vec<String>> => "sampleMessages" (optional),
        use_case: Option<DlcUseCase> => "useCase" (optional),
    }
}

crate::model! {
    pub struct DlcCampaign {
        campaign_id: String => "campaignId",
        auto_renew: bool => "autoRenew",
        brand: ExtendedBrand => "brand",
        status: ProfileStatus => "status",
        name: Option<String> => "name" (optional),
        description: Option<String> => "description" (optional),
        keywords: CampaignKeywords => "keywords",
        links: Option<PolicyLinks> => "links" (optional),
        message_flow: Option<String> => "messageFlow" (optional),
        options: DlcCampaignOptions => "options",
        sample_messages: Option<Vec<String>> => "sampleMessages" (optional),
        use_case: Option<DlcUseCase> => "useCase" (optional),
        mno_brand_tier: Option<String> => "mnoBrandTier" (optional),
        mno_tcr_tier: Option<String> => "mnoTcrTier" (optional),
    }
}

crate::model! {
    pub struct TollFreeOptIn {
        method: Option<String> => "method" (optional),
        url: Option<String> => "url" (optional),
        workflow_description: Option<String> => "workflowDescription" (optional),
    }
}

crate::model! {
    pub struct TollFreeOptions {
        age_gated: Option<bool> => "ageGated" (optional),
    }
}

crate::model! {
    pub struct TollFreeUseCase {
        value: String => "value",
        summary: Option<String> => "summary" (optional),
    }
}

crate::model! {
    /// Body of `POST /campaigns/toll-free`. Also returned by the autofill endpoint.
    pub struct UpsertTollFreeCampaign {
        campaign_id: Option<String> => "campaignId" (optional),
        brand: Option<String> => "brand" (optional),
        name: Option<String> => "name" (optional),
        keywords: Option<CampaignKeywords> => "keywords" (optional),
        links: Option<PolicyLinks> => "links" (optional),
        monthly_volume: Option<String> => "monthlyVolume" (optional),
        opt_in: Option<TollFreeOptIn> => "optIn" (optional),
        options: Option<TollFreeOptions> => "options" (optional),
        production_message_content: Option<String> => "productionMessageContent" (optional),
        use_case: Option<TollFreeUseCase> => "useCase" (optional),
    }
}

crate::model! {
    pub struct TollFreeCampaign {
        campaign_id: String => "campaignId",
        brand: ExtendedBrand => "brand",
        status: ProfileStatus => "status",
        name: Option<String> => "name" (optional),
        keywords: Option<CampaignKeywords> => "keywords" (optional),
        links: Option<PolicyLinks> => "links" (optional),
        monthly_volume: Option<String> => "monthlyVolume" (optional),
        opt_in: Option<TollFreeOptIn> => "optIn" (optional),
        options: Option<TollFreeOptions> => "options" (optional),
        production_message_content: Option<String> => "productionMessageContent" (optional),
        use_case: Option<TollFreeUseCase> => "useCase" (optional),
    }
}

crate::model! {
    pub struct LabeledEmail {
        email: String => "email",
        label: Option<String> => "label" (optional),
    }
}

crate::model! {
    pub struct LabeledPhone {
        phone: String => "phone",
        label: Option<String> => "label" (optional),
    }
}

crate::model! {
    pub struct LabeledWebsite {
        url: String => "url",
        label: Option<String> => "label" (optional),
    }
}

crate::model! {
    /// How the RCS agent presents itself on the handset.
    pub struct RcsAgent {
        name: Option<String> => "name" (optional),
        description: Option<String> => "description" (optional),
        color: Option<String> => "color" (optional),
        emails: Option<Vec<LabeledEmail>> => "emails" (optional),
        phones: Option<Vec<LabeledPhone>> => "phones" (optional),
        websites: Option<Vec<LabeledWebsite>> => "websites" (optional),
        hero_url: Option<String> => "heroUrl" (optional),
        icon_url: Option<String> => "iconUrl" (optional),
    }
}

crate::model! {
    pub struct RcsUseCase {
        value: RcsUseCaseKind => "value",
        behavior: Option<String> => "behavior" (optional),
    }
}

crate::model! {
    pub struct RcsTraffic {
        monthly_website: Option<i64> => "monthlyWebsite" (optional),
        monthly_rcs_estimate: Option<i64> => "monthlyRcsEstimate" (optional),
    }
}

crate::model! {
    /// Body of `POST /campaigns/rcs`. Also returned by the autofill endpoint.
    pub struct UpsertRcsCampaign {
        campaign_id: Option<String> => "campaignId" (optional),
        brand: Option<String> => "brand" (optional),
        agent: Option<RcsAgent> => "agent" (optional),
        expected_agent_responses: Option<Vec<String>> => "expectedAgentResponses" (optional),
        links: Option<PolicyLinks> => "links" (optional),
        use_case: Option<RcsUseCase> => "useCase" (optional),
        opt_in_terms_and_conditions: Option<String> => "optInTermsAndConditions" (optional),
        messaging_type: Option<String> => "messagingType" (optional),
        carrier_description: Option<String> => "carrierDescription" (optional),
        keywords: Option<CampaignKeywords> => "keywords" (optional),
        traffic: Option<RcsTraffic> => "traffic" (optional),
        agent_triggers: Option<String> => "agentTriggers" (optional),
        interaction_description: Option<String> => "interactionDescription" (optional),
        is_conversational: Option<bool> => "isConversational" (optional),
        cta_language: Option<String> => "ctaLanguage" (optional),
        demo_trigger: Option<String> => "demoTrigger" (optional),
    }
}

crate::model! {
    pub struct RcsCampaign {
        agent_id: String => "agentId",
        agent: RcsAgent => "agent",
        brand: ExtendedBrand => "brand",
        status: ProfileStatus => "status",
        campaign_id: Option<String> => "campaignId" (optional),
        expected_agent_responses: Option<Vec<String>> => "expectedAgentResponses" (optional),
        links: Option<PolicyLinks> => "links" (optional),
        use_case: Option<RcsUseCase> => "useCase" (optional),
        opt_in_terms_and_conditions: Option<String> => "optInTermsAndConditions" (optional),
        messaging_type: Option<String> => "messagingType" (optional),
        carrier_description: Option<String> => "carrierDescription" (optional),
        keywords: Option<CampaignKeywords> => "keywords" (optional),
        traffic: Option<RcsTraffic> => "traffic" (optional),
        agent_triggers: Option<String> => "agentTriggers" (optional),
        interaction_description: Option<String> => "interactionDescription" (optional),
        is_conversational: Option<bool> => "isConversational" (optional),
        cta_language: Option<String> => "ctaLanguage" (optional),
        demo_trigger: Option<String> => "demoTrigger" (optional),
    }
}

crate::enumeration! {
    pub enum RcsUseCaseKind {
        Entertainment => "ENTERTAINMENT",
        ShoppingAndRetail => "SHOPPING_AND_RETAIL",
        Games => "GAMES",
        News => "NEWS",
        Health => "HEALTH",
        Utilities => "UTILITIES",
        Finance => "FINANCE",
        Sports => "SPORTS",
        Social => "SOCIAL",
        FoodAndBeverage => "FOOD_AND_BEVERAGE",
        Uncategorized => "UNCATEGORIZED",
        Travel => "TRAVEL",
        Productivity => "PRODUCTIVITY",
        Misc => "OTHER",
    }
}
