//! URL shortener, file storage and contact card (vCard) tools.

use std::collections::BTreeMap;

use serde_json::Value;

crate::model! {
    pub struct ShortenUrlOptions {
        expires_at: Option<String> => "expiresAt" (optional),
    }
}

crate::model! {
    pub struct CreateShortUrl {
        url: String => "url",
        options: Option<ShortenUrlOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct UpdateShortUrl {
        url: Option<String> => "url" (optional),
        options: Option<ShortenUrlOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct ShortenedUrl {
        url: String => "url",
        destination: String => "destination",
        expires_at: Option<String> => "expiresAt" (optional, nullable),
    }
}

crate::model! {
    /// One recorded click on a shortened link; the server reports a long
    /// list of optional request attributes.
    pub struct LinkClickEvent {
        created_at: String => "created_at",
        country: Option<String> => "country" (optional),
        city: Option<String> => "city" (optional),
        ip_address: Option<String> => "ip_address" (optional),
        is_bot: Option<bool> => "is_bot" (optional),
        referrer: Option<String> => "referrer" (optional),
        user_agent: Option<String> => "user_agent" (optional),
        ua_browser: Option<String> => "ua_browser" (optional),
        ua_device: Option<String> => "ua_device" (optional),
        ua_os: Option<String> => "ua_os" (optional),
        utm_source: Option<String> => "utm_source" (optional),
        utm_medium: Option<String> => "utm_medium" (optional),
        utm_campaign: Option<String> => "utm_campaign" (optional),
        metadata: Option<BTreeMap<String, Value>> => "metadata" (optional),
    }
}

crate::model! {
    pub struct ShortenedUrlWithClickData {
        url: String => "url",
        destination: String => "destination",
        expires_at: Option<String> => "expiresAt" (optional, nullable),
        clicks: Vec<LinkClickEvent> => "clicks",
    }
}

crate::model! {
    pub struct DownloadOptions {
        expires_at: Option<String> => "expiresAt" (optional),
    }
}

crate::model! {
    pub struct UploadFileOptions {
        delete_at: Option<String> => "deleteAt" (optional),
        download: Option<DownloadOptions> => "download" (optional),
    }
}

crate::model! {
    /// Body of `POST /tools/files/upload`.
    pub struct UploadFile {
        content_type: String => "contentType",
        size: i64 => "size",
        name: Option<String> => "name" (optional),
        options: Option<UploadFileOptions> => "options" (optional),
    }
}

crate::model! {
    pub struct FileMetadata {
        file_name: String => "fileName",
        content_type: String => "contentType",
        expires_at: Option<String> => "expiresAt" (nullable),
        delete_at: Option<String> => "deleteAt" (optional),
    }
}

crate::model! {
    /// Signed URLs for a new upload: PUT the bytes to `upload_url`, share
    /// `download_url`.
    pub struct UploadResults {
        upload_url: Option<String> => "uploadUrl" (optional, nullable),
        download_url: Option<String> => "downloadUrl" (optional, nullable),
        metadata: Option<FileMetadata> => "metadata" (optional),
    }
}

crate::model! {
    pub struct RefreshFiles {
        urls: Vec<String> => "urls",
    }
}

crate::model! {
    pub struct RefreshedFile {
        original: String => "original",
        refreshed: String => "refreshed",
    }
}

crate::model! {
    pub struct RefreshedFiles {
        urls: Vec<RefreshedFile> => "urls",
    }
}

crate::model! {
    pub struct VCardName {
        family_name: Option<String> => "familyName" (optional),
        given_name: Option<String> => "givenName" (optional),
        additional_names: Option<Vec<String>> => "additionalNames" (optional),
        honorific_prefixes: Option<Vec<String>> => "honorificPrefixes" (optional),
        honorific_suffixes: Option<Vec<String>> => "honorificSuffixes" (optional),
    }
}

crate::model! {
    pub struct VCardAddress {
        country_name: Option<String> => "countryName" (optional),
        extended_address: Option<String> => "extendedAddress" (optional),
        fulladdress: Option<String> => "fulladdress" (optional),
        locality: Option<String> => "locality" (optional),
        postal_code: Option<String> => "postalCode" (optional),
        post_office_box: Option<String> => "postOfficeBox" (optional),
        region: Option<String> => "region" (optional),
        street_address: Option<String> => "streetAddress" (optional),
        kinds: Option<Vec<String>> => "type" (optional),
    }
}

crate::model! {
    /// Typed phone number or email entry.
    pub struct VCardEntry {
        value: String => "value",
        kinds: Option<Vec<String>> => "type" (optional),
    }
}

crate::model! {
    pub struct VCardGeo {
        latitude: f64 => "latitude",
        longitude: f64 => "longitude",
    }
}

crate::model! {
    pub struct VCardOrganization {
        name: Option<String> => "name" (optional),
        units: Option<Vec<String>> => "units" (optional),
    }
}

crate::model! {
    /// A contact card; the same shape is sent to upsert and returned by get.
    pub struct VCard {
        id: Option<String> => "id" (optional),
        formatted_name: Option<String> => "formattedName" (optional),
        name: Option<VCardName> => "name" (optional),
        nickname: Option<Vec<String>> => "nickname" (optional),
        birthday: Option<String> => "birthday" (optional),
        addresses: Option<Vec<VCardAddress>> => "addresses" (optional),
        url: Option<String> => "url" (optional),
        phones: Option<Vec<VCardEntry>> => "phones" (optional),
        emails: Option<Vec<VCardEntry>> => "emails" (optional),
        timezone: Option<String> => "timezone" (optional),
        geo: Option<VCardGeo> => "geo" (optional),
        title: Option<String> => "title" (optional),
        role: Option<String> => "role" (optional),
        organization: Option<VCardOrganization> => "organization" (optional),
        categories: Option<Vec<String>> => "categories" (optional),
        note: Option<String> => "note" (optional),
        photo: Option<String> => "photo" (optional),
    }
}

crate::model! {
    pub struct ContactCardQuery {
        id: String => "id",
    }
}
