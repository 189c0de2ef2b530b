//! Projects, spaces, and photo payloads.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::material::Material;

/// Unique identifier for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Create a new unique project ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a space within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(Uuid);

impl SpaceId {
    /// Create a new unique space ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SpaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported photo formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
    /// WebP image.
    WebP,
}

impl ImageFormat {
    /// The MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// Parse a MIME type string.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }
}

/// An in-memory photo: a format plus base64-encoded pixel data.
///
/// Payloads travel as data URIs at the UI boundary and as raw base64 on the
/// wire to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Pixel data format.
    pub format: ImageFormat,
    /// Base64-encoded pixel data (no data-URI prefix).
    pub base64: String,
}

impl ImagePayload {
    /// Create a payload from already-encoded base64 data.
    #[must_use]
    pub fn new(format: ImageFormat, base64: impl Into<String>) -> Self {
        Self {
            format,
            base64: base64.into(),
        }
    }

    /// Create a payload by encoding raw bytes.
    #[must_use]
    pub fn from_bytes(format: ImageFormat, bytes: &[u8]) -> Self {
        Self {
            format,
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Render as a `data:` URI.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.base64)
    }

    /// Parse a `data:<mime>;base64,<data>` URI.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidImage`] if the URI is malformed or carries
    /// an unsupported MIME type.
    pub fn from_data_uri(uri: &str) -> CoreResult<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::InvalidImage("missing data: prefix".to_string()))?;
        let (mime, data) = rest
            .split_once(";base64,")
            .ok_or_else(|| CoreError::InvalidImage("missing ;base64, separator".to_string()))?;
        let format = ImageFormat::from_mime(mime)
            .ok_or_else(|| CoreError::InvalidImage(format!("unsupported MIME type: {mime}")))?;
        Ok(Self::new(format, data))
    }

    /// Decode the payload back to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidImage`] if the stored data is not valid
    /// base64.
    pub fn decode(&self) -> CoreResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.base64)
            .map_err(|e| CoreError::InvalidImage(e.to_string()))
    }

    /// Length of the encoded data in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.base64.len()
    }
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Quote drafted but not yet accepted.
    #[default]
    #[serde(rename = "Open Quote")]
    OpenQuote,
    /// Accepted and in progress.
    #[serde(rename = "Open Job")]
    OpenJob,
    /// Work finished.
    #[serde(rename = "Complete")]
    Complete,
}

impl ProjectStatus {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenQuote => "Open Quote",
            Self::OpenJob => "Open Job",
            Self::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named sub-area of a project carrying its own photos and selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSpace {
    /// Unique identifier.
    pub id: SpaceId,
    /// Display name, e.g. "Kitchen".
    pub name: String,
    /// Photo of the current condition. Set once via upload.
    pub before_image: Option<ImagePayload>,
    /// Generated visualization chosen at wizard completion.
    pub after_image: Option<ImagePayload>,
    /// Scope-of-work narrative for this space.
    pub description: String,
    /// Selected materials, in selection order.
    pub materials: Vec<Material>,
}

impl ProjectSpace {
    /// Create an empty space with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SpaceId::new(),
            name: name.into(),
            before_image: None,
            after_image: None,
            description: String::new(),
            materials: Vec::new(),
        }
    }
}

/// A renovation project: client details, quote, and its spaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// Display name, e.g. "Smith Kitchen".
    pub name: String,
    /// Cover photo shown on the dashboard card.
    pub cover_photo: Option<ImagePayload>,
    /// Creation time, Unix milliseconds.
    pub created_at_ms: u64,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Client name.
    pub client_name: String,
    /// Client email.
    pub client_email: String,
    /// Client street address.
    pub client_address: String,
    /// Client phone number.
    pub client_phone: String,
    /// Estimated quote in dollars.
    pub quote_amount: f64,
    /// Spaces in this project, in creation order.
    pub spaces: Vec<ProjectSpace>,
    /// Project-level description.
    pub description: String,
}

impl Project {
    /// Create an empty project with the given name and client.
    #[must_use]
    pub fn new(name: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            cover_photo: None,
            created_at_ms: current_timestamp_ms(),
            status: ProjectStatus::default(),
            client_name: client_name.into(),
            client_email: String::new(),
            client_address: String::new(),
            client_phone: String::new(),
            quote_amount: 0.0,
            spaces: Vec::new(),
            description: String::new(),
        }
    }
}

/// Get the current Unix timestamp in milliseconds.
#[must_use]
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| {
        // Timestamp will not exceed u64 max for millennia
        #[allow(clippy::cast_possible_truncation)]
        {
            d.as_millis() as u64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_round_trip() {
        let payload = ImagePayload::from_bytes(ImageFormat::Jpeg, b"not really pixels");
        let uri = payload.data_uri();
        assert!(uri.starts_with("data:image/jpeg;base64,"));

        let parsed = ImagePayload::from_data_uri(&uri).expect("parse data uri");
        assert_eq!(parsed, payload);
        assert_eq!(parsed.decode().expect("decode"), b"not really pixels");
    }

    #[test]
    fn test_from_data_uri_rejects_malformed() {
        assert!(ImagePayload::from_data_uri("image/png;base64,abcd").is_err());
        assert!(ImagePayload::from_data_uri("data:image/png,abcd").is_err());
        assert!(ImagePayload::from_data_uri("data:text/plain;base64,abcd").is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::OpenQuote.to_string(), "Open Quote");
        assert_eq!(ProjectStatus::OpenJob.to_string(), "Open Job");
        assert_eq!(ProjectStatus::Complete.to_string(), "Complete");
    }

    #[test]
    fn test_status_serde_uses_labels() {
        let json = serde_json::to_string(&ProjectStatus::OpenJob).expect("serialize");
        assert_eq!(json, "\"Open Job\"");
        let back: ProjectStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ProjectStatus::OpenJob);
    }

    #[test]
    fn test_new_project_defaults() {
        let project = Project::new("Smith Kitchen", "John Smith");
        assert_eq!(project.status, ProjectStatus::OpenQuote);
        assert!(project.spaces.is_empty());
        assert!(project.created_at_ms > 0);
    }
}
