// src/services/storage_service.rs

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use reqwest::Client;

use crate::common::error::AppError;

/// Tipos MIME aceitos e a extensão gravada para cada um.
pub const ALLOWED_IMAGE_TYPES: [(&str, &str); 4] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const RANDOM_SUFFIX_LEN: usize = 8;

fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Content-Type declarado; se ausente ou genérico, deduz pela extensão.
pub fn resolve_mime(content_type: Option<&str>, file_name: &str) -> Option<String> {
    match content_type.map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase()) {
        Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => Some(ct),
        _ => mime_from_extension(file_name).map(str::to_string),
    }
}

/// Tipo de imagem já aceito pela allow-list. Só é criado por `image_kind`,
/// então o upload não precisa revalidar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageKind {
    mime: &'static str,
    ext: &'static str,
}

impl ImageKind {
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn ext(&self) -> &'static str {
        self.ext
    }
}

/// Checa o tipo contra a allow-list (sem olhar o conteúdo).
pub fn image_kind(content_type: Option<&str>, file_name: &str) -> Result<ImageKind, AppError> {
    let mime = resolve_mime(content_type, file_name).unwrap_or_default();
    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(allowed, _)| *allowed == mime)
        .map(|&(mime, ext)| ImageKind { mime, ext })
        .ok_or_else(|| {
            AppError::InvalidImageType(if mime.is_empty() { "desconhecido".into() } else { mime })
        })
}

pub fn check_image_size(size: usize) -> Result<(), AppError> {
    if size > MAX_IMAGE_BYTES {
        return Err(AppError::ImageTooLarge {
            size,
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Tipo e tamanho de uma vez, para quando o tamanho já é conhecido.
pub fn validate_image(
    content_type: Option<&str>,
    file_name: &str,
    size: usize,
) -> Result<ImageKind, AppError> {
    let kind = image_kind(content_type, file_name)?;
    check_image_size(size)?;
    Ok(kind)
}

/// `<millis>-<8 alfanuméricos>.<ext>`
pub fn generate_file_name(ext: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}-{}.{}", Utc::now().timestamp_millis(), suffix, ext)
}

#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub path: String,
    pub url: String,
    pub content_type: String,
    pub size: usize,
}

/// Cliente do bucket de imagens (API REST de storage).
#[derive(Clone)]
pub struct StorageService {
    client: Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl StorageService {
    pub fn new(client: Client, base_url: &str, api_key: String, bucket: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bucket,
        }
    }

    pub fn public_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, self.bucket, path)
    }

    /// Envia bytes já validados (`image_kind` + `check_image_size`).
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len(), mime = kind.mime()))]
    pub async fn upload(&self, bytes: Vec<u8>, kind: ImageKind) -> Result<UploadedImage, AppError> {
        let path = generate_file_name(kind.ext());
        let size = bytes.len();

        let response = self
            .client
            .post(format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path))
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, kind.mime())
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StorageRejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(%path, size, "Imagem enviada ao storage");

        Ok(UploadedImage {
            url: self.public_url(&path),
            path,
            content_type: kind.mime().to_string(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: usize = 1024 * 1024;

    #[test]
    fn oversized_png_is_rejected() {
        let err = validate_image(Some("image/png"), "foto.png", 6 * MB).unwrap_err();
        assert!(matches!(err, AppError::ImageTooLarge { size, max } if size == 6 * MB && max == 5 * MB));
    }

    #[test]
    fn bitmap_is_not_allowed() {
        let err = validate_image(Some("image/bmp"), "foto.bmp", 2 * MB).unwrap_err();
        assert!(matches!(err, AppError::InvalidImageType(ref t) if t == "image/bmp"));
    }

    #[test]
    fn small_png_passes() {
        let png = validate_image(Some("image/png"), "foto.png", 2 * MB).unwrap();
        assert_eq!((png.mime(), png.ext()), ("image/png", "png"));
        assert_eq!(validate_image(Some("image/jpeg"), "x", MAX_IMAGE_BYTES).unwrap().ext(), "jpg");
    }

    #[test]
    fn size_check_is_independent_of_type() {
        assert!(check_image_size(MAX_IMAGE_BYTES).is_ok());
        assert!(matches!(
            check_image_size(MAX_IMAGE_BYTES + 1),
            Err(AppError::ImageTooLarge { max, .. }) if max == MAX_IMAGE_BYTES
        ));
        assert!(image_kind(Some("image/gif"), "a.gif").is_ok());
    }

    #[test]
    fn generic_content_type_falls_back_to_extension() {
        assert_eq!(
            resolve_mime(Some("application/octet-stream"), "Foto.WEBP").as_deref(),
            Some("image/webp")
        );
        assert_eq!(resolve_mime(None, "a.gif").as_deref(), Some("image/gif"));
        assert_eq!(resolve_mime(Some("image/png; charset=binary"), "a").as_deref(), Some("image/png"));
        assert!(validate_image(None, "sem_extensao", 10).is_err());
    }

    #[test]
    fn generated_names_are_unique_and_shaped() {
        let a = generate_file_name("png");
        let b = generate_file_name("png");
        assert_ne!(a, b);

        let (stem, ext) = a.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");
        let (millis, suffix) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn public_url_points_to_bucket() {
        let svc = StorageService::new(Client::new(), "https://x.supabase.co/", "k".into(), "product-images".into());
        assert_eq!(
            svc.public_url("1-abc.png"),
            "https://x.supabase.co/storage/v1/object/public/product-images/1-abc.png"
        );
    }
}
