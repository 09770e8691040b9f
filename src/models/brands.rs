//! Brand registration payloads.

use crate::models::shared::ValidationIssue;

crate::model! {
    pub struct BrandContact {
        name: Option<String> => "name" (optional),
        email: Option<String> => "email" (optional),
        phone: Option<String> => "phone" (optional),
        title: Option<String> => "title" (optional),
    }
}

crate::model! {
    /// Body of `POST /brands`; every field is optional so partial updates work.
    pub struct UpsertBrand {
        id: Option<String> => "id" (optional),
        name: Option<String> => "name" (optional),
        dba: Option<String> => "dba" (optional),
        address: Option<String> => "address" (optional),
        contact: Option<BrandContact> => "contact" (optional),
        description: Option<String> => "description" (optional),
        ein: Option<String> => "ein" (optional),
        email: Option<String> => "email" (optional),
        sector: Option<CompanySector> => "sector" (optional),
        company_type: Option<CompanyType> => "type" (optional),
        entity_type: Option<EntityType> => "entityType" (optional),
        website: Option<String> => "website" (optional),
    }
}

crate::model! {
    /// Brand fields the autofill endpoint could infer.
    pub struct OptionalBrandInfo {
        name: Option<String> => "name" (optional),
        dba: Option<String> => "dba" (optional),
        address: Option<String> => "address" (optional),
        contact: Option<BrandContact> => "contact" (optional),
        description: Option<String> => "description" (optional),
        ein: Option<String> => "ein" (optional),
        email: Option<String> => "email" (optional),
        sector: Option<CompanySector> => "sector" (optional),
        company_type: Option<CompanyType> => "type" (optional),
        entity_type: Option<EntityType> => "entityType" (optional),
        website: Option<String> => "website" (optional),
    }
}

crate::model! {
    pub struct AutofillBrandOptions {
        force_reload: Option<bool> => "forceReload" (optional),
    }
}

crate::model! {
    pub struct AutofillBrand {
        name: Option<String> => "name" (optional),
        website: Option<String> => "website" (optional),
        additional_info: Option<String> => "additionalInfo" (optional),
        options: Option<AutofillBrandOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct ExtendedBrand {
        id: String => "id",
        name: Option<String> => "name" (optional),
        status: BrandStatus => "status",
        is_archived: bool => "isArchived",
        created_at: String => "createdAt",
        updated_at: String => "updatedAt",
        dba: Option<String> => "dba" (optional),
        address: Option<String> => "address" (optional),
        contact: Option<BrandContact> => "contact" (optional),
        description: Option<String> => "description" (optional),
        ein: Option<String> => "ein" (optional, nullable),
        email: Option<String> => "email" (optional),
        sector: Option<CompanySector> => "sector" (optional),
        company_type: Option<CompanyType> => "type" (optional),
        entity_type: Option<EntityType> => "entityType" (optional),
        website: Option<String> => "website" (optional),
    }
}

crate::model! {
    pub struct VettingFeedback {
        id: Option<String> => "id" (optional),
        description: Option<String> => "description" (optional),
        display_name: Option<String> => "displayName" (optional),
    }
}

crate::model! {
    pub struct VettingHistory {
        provider: String => "provider",
        vetting_class: String => "vettingClass",
        status: Option<String> => "status" (optional),
        score: Option<i64> => "score" (optional, nullable),
        vetted_at: Option<String> => "vettedAt" (optional, nullable),
    }
}

crate::model! {
    /// `GET /brands/{id}` response: the brand plus its vetting record.
    pub struct ExtendedBrandWithVetting {
        id: String => "id",
        name: Option<String> => "name" (optional),
        status: BrandStatus => "status",
        is_archived: bool => "isArchived",
        created_at: String => "createdAt",
        updated_at: String => "updatedAt",
        ein: Option<String> => "ein" (optional, nullable),
        website: Option<String> => "website" (optional),
        last_tcr_vetting_date: Option<String> => "lastTcrVettingDate" (nullable),
        tcr_feedback: Option<Vec<VettingFeedback>> => "tcrFeedback" (nullable),
        vetting_history: Vec<VettingHistory> => "vettingHistory",
    }
}

crate::model! {
    pub struct SubmissionResults {
        success: bool => "success",
        errors: Option<Vec<ValidationIssue>> => "errors" (optional),
    }
}

crate::model! {
    pub struct VetBrand {
        vetting_type: String => "type",
        provider: String => "provider",
        vetting_class: String => "vettingClass",
    }
}

crate::model! {
    pub struct VettingResults {
        success: bool => "success",
        vetting_id: Option<String> => "vettingId" (optional),
    }
}

crate::enumeration! {
    pub enum BrandStatus {
        Pending => "PENDING",
        Unverified => "UNVERIFIED",
        Verified => "VERIFIED",
        Vetted => "VETTED",
        Failed => "FAILED",
        Incomplete => "INCOMPLETE",
    }
}

crate::enumeration! {
    pub enum CompanySector {
        Agriculture => "AGRICULTURE",
        Communication => "COMMUNICATION",
        Construction => "CONSTRUCTION",
        Education => "EDUCATION",
        Energy => "ENERGY",
        Entertainment => "ENTERTAINMENT",
        Financial => "FINANCIAL",
        Gambling => "GAMBLING",
        Government => "GOVERNMENT",
        Healthcare => "HEALTHCARE",
        Hospitality => "HOSPITALITY",
        HumanResources => "HUMAN_RESOURCES",
        Insurance => "INSURANCE",
        Legal => "LEGAL",
        Manufacturing => "MANUFACTURING",
        Ngo => "NGO",
        PoliticalCampaign => "POLITICAL_CAMPAIGN",
        RealEstate => "REAL_ESTATE",
        Retail => "RETAIL",
        Technology => "TECHNOLOGY",
        Transportation => "TRANSPORTATION",
    }
}

crate::enumeration! {
    pub enum CompanyType {
        PrivateProfit => "PRIVATE_PROFIT",
        PublicProfit => "PUBLIC_PROFIT",
        NonProfit => "NON_PROFIT",
        Government => "GOVERNMENT",
    }
}

crate::enumeration! {
    pub enum EntityType {
        Llc => "LLC",
        Corporation => "CORPORATION",
        Partnership => "PARTNERSHIP",
        SoleProprietor => "SOLE_PROPRIETOR",
    }
}
