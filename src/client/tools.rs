use std::path::Path;
use std::sync::OnceLock;

use url::Url;

use crate::client::error::PinnacleError;
use crate::client::raw::RawClient;
use crate::models::{
    ContactCardQuery, CreateShortUrl, RefreshFiles, RefreshedFiles, ShortenedUrl,
    ShortenedUrlWithClickData, UpdateShortUrl, UploadFile, UploadFileOptions, UploadResults, VCard,
};
use crate::transport::{Request, RequestOptions, segment};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Media types the messaging channels accept as attachments.
const SUPPORTED_MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp4",
    "audio/ogg",
    "audio/aac",
    "audio/webm",
    "audio/wav",
    "audio/3gpp",
    "audio/amr",
    "video/mp4",
    "video/mpeg",
    "video/quicktime",
    "video/webm",
    "video/3gpp",
    "video/H264",
    "video/x-m4v",
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/tiff",
    "image/webp",
    "application/pdf",
    "text/csv",
    "application/rtf",
    "text/vcard",
    "text/calendar",
];

/// Content type for `path`, judged by its extension.
///
/// Unknown extensions fall back to `application/octet-stream`. Audio, video
/// and image types outside the supported set are kept with a warning.
pub fn mime_type_for(path: &Path) -> &'static str {
    let Some(mime) = mime_guess::from_path(path).first_raw() else {
        return FALLBACK_MIME_TYPE;
    };
    if SUPPORTED_MIME_TYPES.contains(&mime) {
        return mime;
    }
    match mime.split('/').next() {
        Some("audio" | "video" | "image") => {
            tracing::warn!(mime, "MIME type may not be fully supported; uploading anyway");
            mime
        }
        _ => FALLBACK_MIME_TYPE,
    }
}

#[derive(Clone)]
pub struct ToolsClient {
    raw: RawClient,
    url: OnceLock<UrlClient>,
    file: OnceLock<FileClient>,
    contact_card: OnceLock<ContactCardClient>,
}

impl ToolsClient {
    pub(crate) fn new(raw: RawClient) -> Self {
        Self {
            raw,
            url: OnceLock::new(),
            file: OnceLock::new(),
            contact_card: OnceLock::new(),
        }
    }

    pub fn url(&self) -> &UrlClient {
        self.url.get_or_init(|| UrlClient {
            raw: self.raw.clone(),
        })
    }

    pub fn file(&self) -> &FileClient {
        self.file.get_or_init(|| FileClient {
            raw: self.raw.clone(),
        })
    }

    pub fn contact_card(&self) -> &ContactCardClient {
        self.contact_card.get_or_init(|| ContactCardClient {
            raw: self.raw.clone(),
        })
    }
}

/// Link shortener with click tracking.
#[derive(Clone)]
pub struct UrlClient {
    raw: RawClient,
}

impl UrlClient {
    pub async fn create(
        &self,
        params: &CreateShortUrl,
        options: &RequestOptions,
    ) -> Result<ShortenedUrl, PinnacleError> {
        let request = Request::post("tools/url").json(params).options(options);
        self.raw.call(request).await
    }

    pub async fn get(
        &self,
        link_id: &str,
        options: &RequestOptions,
    ) -> Result<ShortenedUrlWithClickData, PinnacleError> {
        let request = Request::get(format!("tools/url/{}", segment(link_id))).options(options);
        self.raw.call(request).await
    }

    pub async fn update(
        &self,
        link_id: &str,
        params: &UpdateShortUrl,
        options: &RequestOptions,
    ) -> Result<ShortenedUrl, PinnacleError> {
        let request = Request::put(format!("tools/url/{}", segment(link_id)))
            .json(params)
            .options(options);
        self.raw.call(request).await
    }
}

#[derive(Clone)]
pub struct FileClient {
    raw: RawClient,
}

impl FileClient {
    /// Reserve storage and get a signed upload URL.
    pub async fn upload(
        &self,
        params: &UploadFile,
        options: &RequestOptions,
    ) -> Result<UploadResults, PinnacleError> {
        let request = Request::post("tools/files/upload").json(params).options(options);
        self.raw.call(request).await
    }

    /// Issue fresh download links for expiring file URLs.
    pub async fn refresh(
        &self,
        params: &RefreshFiles,
        options: &RequestOptions,
    ) -> Result<RefreshedFiles, PinnacleError> {
        let request = Request::post("tools/files/refresh").json(params).options(options);
        self.raw.call(request).await
    }

    /// Upload a local file and return its download URL.
    ///
    /// Reserves the upload with [`upload`](Self::upload), then PUTs the bytes
    /// to the signed URL. `name` defaults to the file name on disk.
    pub async fn upload_from_path(
        &self,
        path: impl AsRef<Path>,
        name: Option<&str>,
        upload_options: Option<UploadFileOptions>,
        options: &RequestOptions,
    ) -> Result<Option<String>, PinnacleError> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|source| PinnacleError::File {
                path: path.to_path_buf(),
                source,
            })?;
        if metadata.is_dir() {
            return Err(PinnacleError::Config(format!(
                "path is a directory, not a file: {}",
                path.display()
            )));
        }

        let size = i64::try_from(metadata.len()).map_err(|_| {
            PinnacleError::Config(format!("file is too large: {}", path.display()))
        })?;
        let file_name = match name {
            Some(name) => name.to_owned(),
            None => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let content_type = mime_type_for(path);

        let reservation = self
            .upload(
                &UploadFile {
                    content_type: content_type.to_owned(),
                    size,
                    name: Some(file_name),
                    options: upload_options,
                },
                options,
            )
            .await?;

        if let Some(upload_url) = &reservation.upload_url {
            let url = Url::parse(upload_url).map_err(|err| {
                PinnacleError::Config(format!("server returned an invalid upload URL: {err}"))
            })?;
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| PinnacleError::File {
                    path: path.to_path_buf(),
                    source,
                })?;
            self.raw.put_bytes(url, content_type, bytes, options).await?;
        }
        Ok(reservation.download_url)
    }
}

/// Contact cards (vCards) shown for RCS agents.
#[derive(Clone)]
pub struct ContactCardClient {
    raw: RawClient,
}

impl ContactCardClient {
    pub async fn get(
        &self,
        params: &ContactCardQuery,
        options: &RequestOptions,
    ) -> Result<VCard, PinnacleError> {
        let request = Request::post("tools/contact-card").json(params).options(options);
        self.raw.call(request).await
    }

    /// Create a card, or replace it when `id` is set.
    pub async fn upsert(
        &self,
        params: &VCard,
        options: &RequestOptions,
    ) -> Result<VCard, PinnacleError> {
        let request = Request::post("tools/contact-card/upsert")
            .json(params)
            .options(options);
        self.raw.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::client::error::ResponseErrorKind;
    use crate::client::test_client;
    use crate::transport::fake::FakeTransport;

    const RESERVATION: &str = r#"{
        "uploadUrl": "https://storage.example/upload/abc?sig=1",
        "downloadUrl": "https://storage.example/download/abc",
        "metadata": {"fileName": "logo.png", "contentType": "image/png", "expiresAt": null}
    }"#;

    #[test]
    fn mime_types_follow_the_extension() {
        assert_eq!(mime_type_for(Path::new("a/photo.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("logo.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("terms.pdf")), "application/pdf");
        assert_eq!(mime_type_for(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(mime_type_for(Path::new("icon.svg")), "image/svg+xml");
        assert_eq!(mime_type_for(Path::new("archive.zip")), FALLBACK_MIME_TYPE);
        assert_eq!(mime_type_for(Path::new("README")), FALLBACK_MIME_TYPE);
    }

    #[tokio::test]
    async fn upload_from_path_reserves_then_puts_the_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\x89PNG fake")
            .unwrap();

        let transport = FakeTransport::new(200, RESERVATION).then(200, "");
        let url = test_client(&transport)
            .tools()
            .file()
            .upload_from_path(&path, None, None, &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(url.as_deref(), Some("https://storage.example/download/abc"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url.path(), "/tools/files/upload");
        let reservation: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            reservation,
            json!({"contentType": "image/png", "size": 9, "name": "logo.png"})
        );

        let put = &requests[1];
        assert_eq!(put.method, Method::PUT);
        assert_eq!(put.url.as_str(), "https://storage.example/upload/abc?sig=1");
        assert_eq!(put.headers.get("content-type").unwrap(), "image/png");
        assert_eq!(put.body.as_deref(), Some(&b"\x89PNG fake"[..]));
        assert!(put.headers.get("pinnacle-api-key").is_none());
    }

    #[tokio::test]
    async fn upload_from_path_reports_missing_files_and_directories() {
        let transport = FakeTransport::new(200, RESERVATION);
        let client = test_client(&transport);
        let dir = tempfile::tempdir().unwrap();

        let missing = client
            .tools()
            .file()
            .upload_from_path(dir.path().join("nope.png"), None, None, &RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(missing, PinnacleError::File { .. }));

        let directory = client
            .tools()
            .file()
            .upload_from_path(dir.path(), None, None, &RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(directory, PinnacleError::Config(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn failed_put_surfaces_the_storage_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let transport = FakeTransport::new(200, RESERVATION).then(403, "expired signature");
        let err = test_client(&transport)
            .tools()
            .file()
            .upload_from_path(&path, Some("renamed.pdf"), None, &RequestOptions::default())
            .await
            .unwrap_err();
        let PinnacleError::Response(err) = err else {
            panic!("expected a response error");
        };
        assert_eq!(err.kind, ResponseErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn url_update_puts_to_the_link() {
        let transport = FakeTransport::new(
            200,
            r#"{"url": "https://pncl.to/abc", "destination": "https://example.com/new"}"#,
        );
        let params = UpdateShortUrl {
            url: Some("https://example.com/new".to_owned()),
            options: None,
        };
        let link = test_client(&transport)
            .tools()
            .url()
            .update("abc", &params, &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(link.expires_at, None);

        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url.path(), "/tools/url/abc");
    }
}
