//! File types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::link::ShareLink;

/// Variant name for the 200px rendition.
pub const VARIANT_THUMBNAIL: &str = "thumbnail";
/// Variant name for the 800px rendition.
pub const VARIANT_MEDIUM: &str = "medium";
/// Variant name for the untransformed upload.
pub const VARIANT_ORIGINAL: &str = "original";

/// A stored file as reported by the backend.
///
/// Records are read-only on the client: mutations (delete, share-link
/// create/revoke) go to the backend and the view re-fetches afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: Uuid,
    pub name: String,
    /// Mime type, e.g. `image/png`. Wire name is `type`.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    pub created_at: DateTime<Utc>,
    /// Absent on records that were never reprocessed.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Named renditions (thumbnail, medium, original) addressed by URL.
    #[serde(default)]
    pub variants: HashMap<String, String>,
    /// Active share link, if one exists.
    #[serde(default)]
    pub share: Option<ShareLink>,
}

impl FileRecord {
    /// The timestamp filters and views treat as "last modified".
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// URL of a named variant, if the backend has produced it.
    pub fn variant_url(&self, name: &str) -> Option<&str> {
        self.variants.get(name).map(String::as_str)
    }

    /// Display classification of this file's mime type.
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime_type)
    }
}

/// Coarse display category derived from a mime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Archive,
    Document,
    Other,
}

impl FileKind {
    /// Classify a mime type the way the file browser picks its icons.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            FileKind::Image
        } else if mime.starts_with("video/") {
            FileKind::Video
        } else if mime.starts_with("audio/") {
            FileKind::Audio
        } else if mime.contains("zip") || mime.contains("tar") {
            FileKind::Archive
        } else if mime.contains("pdf") || mime.contains("text") {
            FileKind::Document
        } else {
            FileKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Archive => "archive",
            FileKind::Document => "document",
            FileKind::Other => "other",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request for a presigned upload slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlRequest {
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}

/// Presigned upload slot: PUT the bytes to `presigned_url`, then confirm
/// completion with the `object_key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlResponse {
    pub object_key: String,
    pub presigned_url: String,
}

/// Upload confirmation sent after the storage PUT succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadRequest {
    pub object_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_record_decodes_wire_shape() {
        let json = r#"{
            "id": "7b2da883-0d72-4b6c-9c04-6ec75c4c7f5a",
            "name": "holiday.png",
            "type": "image/png",
            "size": 2048,
            "createdAt": "2025-03-01T10:00:00Z",
            "updatedAt": "2025-03-02T11:30:00Z",
            "variants": {"thumbnail": "https://cdn/thumb.png"},
            "share": null
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "holiday.png");
        assert_eq!(record.mime_type, "image/png");
        assert_eq!(record.size, 2048);
        assert_eq!(
            record.variant_url(VARIANT_THUMBNAIL),
            Some("https://cdn/thumb.png")
        );
        assert!(record.share.is_none());
        assert_eq!(record.kind(), FileKind::Image);
    }

    #[test]
    fn modified_at_falls_back_to_created_at() {
        let json = r#"{
            "id": "7b2da883-0d72-4b6c-9c04-6ec75c4c7f5a",
            "name": "notes.txt",
            "type": "text/plain",
            "size": 10,
            "createdAt": "2025-03-01T10:00:00Z"
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.modified_at(), record.created_at);
    }

    #[test]
    fn kind_classification_matches_icon_rules() {
        assert_eq!(FileKind::from_mime("image/jpeg"), FileKind::Image);
        assert_eq!(FileKind::from_mime("video/mp4"), FileKind::Video);
        assert_eq!(FileKind::from_mime("audio/mpeg"), FileKind::Audio);
        assert_eq!(FileKind::from_mime("application/zip"), FileKind::Archive);
        assert_eq!(FileKind::from_mime("application/x-tar"), FileKind::Archive);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Document);
        assert_eq!(FileKind::from_mime("text/plain"), FileKind::Document);
        assert_eq!(
            FileKind::from_mime("application/octet-stream"),
            FileKind::Other
        );
    }
}
