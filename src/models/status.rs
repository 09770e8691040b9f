//! Review and provisioning status lookups.

use crate::models::brands::BrandStatus;
use crate::models::shared::ProfileStatus;

crate::model! {
    pub struct BrandStatusResult {
        id: String => "id",
        status: BrandStatus => "status",
        error: Option<String> => "error" (optional, nullable),
    }
}

crate::model! {
    pub struct DlcNumberUpdate {
        number: String => "number",
        status: DlcAssignmentStatus => "status",
        errors: Vec<String> => "errors",
    }
}

crate::model! {
    pub struct DlcCampaignStatus {
        id: String => "id",
        status: ProfileStatus => "status",
        error: Option<String> => "error" (nullable),
        updates: Vec<DlcNumberUpdate> => "updates",
    }
}

crate::model! {
    pub struct TollFreeNumberUpdate {
        number: String => "number",
        status: TollFreeStatus => "status",
        errors: Vec<String> => "errors",
    }
}

crate::model! {
    pub struct TollFreeCampaignStatus {
        id: String => "id",
        status: ProfileStatus => "status",
        error: Option<String> => "error" (nullable),
        updates: Vec<TollFreeNumberUpdate> => "updates",
    }
}

crate::model! {
    pub struct RcsCampaignStatus {
        id: String => "id",
        status: ProfileStatus => "status",
        error: Option<String> => "error" (optional, nullable),
    }
}

crate::model! {
    pub struct PhoneNumberStatus {
        phone_number: String => "phoneNumber",
        status: PhoneNumberState => "status",
        error: Option<String> => "error" (optional, nullable),
    }
}

crate::enumeration! {
    pub enum DlcAssignmentStatus {
        Assigned => "ASSIGNED",
        FailedAssignment => "FAILED_ASSIGNMENT",
        FailedUnassignment => "FAILED_UNASSIGNMENT",
        PendingAssignment => "PENDING_ASSIGNMENT",
        PendingUnassignment => "PENDING_UNASSIGNMENT",
    }
}

crate::enumeration! {
    pub enum TollFreeStatus {
        WaitingForProvider => "WAITING_FOR_PROVIDER",
        WaitingForCustomer => "WAITING_FOR_CUSTOMER",
        WaitingForTeleco => "WAITING_FOR_TELECO",
        InProgress => "IN_PROGRESS",
        Verified => "VERIFIED",
        Rejected => "REJECTED",
    }
}

crate::enumeration! {
    pub enum PhoneNumberState {
        Pending => "PENDING",
        Active => "ACTIVE",
        Failure => "FAILURE",
    }
}
