//! Contacts and audiences (named contact lists).

use crate::models::shared::Pagination;

crate::model! {
    pub struct Contact {
        id: String => "id",
        phone_number: String => "phoneNumber",
        name: Option<String> => "name" (optional),
        email: Option<String> => "email" (optional),
        description: Option<String> => "description" (optional),
        tags: Option<Vec<String>> => "tags" (optional),
    }
}

crate::model! {
    /// Lookup key for `GET /contacts`; set one of the two.
    pub struct ContactQuery {
        id: Option<String> => "id" (optional),
        phone_number: Option<String> => "phoneNumber" (optional),
    }
}

crate::model! {
    pub struct CreateContact {
        phone_number: String => "phoneNumber",
        name: Option<String> => "name" (optional),
        email: Option<String> => "email" (optional),
        description: Option<String> => "description" (optional),
        tags: Option<Vec<String>> => "tags" (optional),
    }
}

crate::model! {
    pub struct UpdateContact {
        id: String => "id",
        name: Option<String> => "name" (optional),
        email: Option<String> => "email" (optional),
        description: Option<String> => "description" (optional),
        tags: Option<Vec<String>> => "tags" (optional),
    }
}

crate::model! {
    pub struct ContactId {
        id: String => "id",
    }
}

crate::model! {
    pub struct AudienceQuery {
        id: String => "id",
        page: Option<i64> => "page" (optional),
        limit: Option<i64> => "limit" (optional),
    }
}

crate::model! {
    pub struct AudienceWithPagination {
        id: String => "id",
        name: String => "name",
        description: Option<String> => "description" (nullable),
        contacts: Vec<Contact> => "contacts",
        contact_count: i64 => "contactCount",
        pagination: Pagination => "pagination",
    }
}

crate::model! {
    /// Audience summary returned by the mutating endpoints.
    pub struct AudienceCountOnly {
        id: String => "id",
        name: String => "name",
        description: Option<String> => "description" (nullable),
        contact_count: i64 => "contactCount",
    }
}

crate::model! {
    pub struct CreateAudience {
        name: String => "name",
        description: Option<String> => "description" (optional),
        contacts: Option<Vec<String>> => "contacts" (optional),
    }
}

crate::model! {
    pub struct UpdateAudience {
        id: String => "id",
        name: Option<String> => "name" (optional),
        description: Option<String> => "description" (optional),
    }
}

crate::model! {
    /// Phone numbers or contact ids to add to or remove from an audience.
    pub struct AudienceMembers {
        id: String => "id",
        contacts: Vec<String> => "contacts",
    }
}

crate::model! {
    pub struct DeleteAudienceResponse {
        success: bool => "success",
    }
}

crate::union! {
    /// `audiences.get` returns members only when a page was requested.
    pub enum AudienceGetResponse {
        WithPagination(AudienceWithPagination),
        CountOnly(AudienceCountOnly),
    }
}
