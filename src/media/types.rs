//! Request parameters and payloads of the media endpoints.

use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of entry returned by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    /// Current version of a file
    File,
    /// Older version of a file
    FileVersion,
    /// Folder
    Folder,
    /// Files and folders
    All,
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetSort {
    AscName,
    DescName,
    AscCreated,
    DescCreated,
    AscUpdated,
    DescUpdated,
    AscHeight,
    DescHeight,
    AscWidth,
    DescWidth,
    AscSize,
    DescSize,
}

/// File type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileTypeFilter {
    All,
    Image,
    NonImage,
}

/// Query of the asset listing endpoint. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsParam {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<AssetSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Search expression, e.g. `createdAt >= "7d"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileTypeFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Identifies a file and optionally one of its versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetVersionsParam {
    pub file_id: String,
    pub version_id: Option<String>,
}

impl AssetVersionsParam {
    /// All versions of `file_id`.
    pub fn new(file_id: impl Into<String>) -> Self {
        AssetVersionsParam {
            file_id: file_id.into(),
            version_id: None,
        }
    }

    /// Narrow to a single version.
    pub fn with_version(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// Version of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Tag assigned by automatic image tagging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiTag {
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub source: String,
}

/// A file or file version stored in the media library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    pub file_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    pub name: String,
    pub file_path: String,
    #[serde(alias = "Tags")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "AITags", alias = "aiTags")]
    pub ai_tags: Option<Vec<AiTag>>,
    pub version_info: VersionInfo,
    pub is_private_file: bool,
    pub custom_coordinates: Option<String>,
    pub url: String,
    pub thumbnail: String,
    pub file_type: String,
    pub mime: String,
    pub height: u32,
    #[serde(alias = "Width")]
    pub width: u32,
    pub size: u64,
    pub has_alpha: bool,
    pub custom_metadata: Map<String, Value>,
    pub embedded_metadata: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// Changes applied by `update_asset`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetParam {
    #[serde(rename = "removeAITags", skip_serializing_if = "Vec::is_empty")]
    pub remove_ai_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<Map<String, Value>>,
}

/// Tags to add to or remove from files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsParam {
    pub file_ids: Vec<String>,
    pub tags: Vec<String>,
}

/// AI tags to remove from files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTagsParam {
    pub file_ids: Vec<String>,
    #[serde(rename = "AITags")]
    pub ai_tags: Vec<String>,
}

/// Files affected by a tag operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedIds {
    #[serde(rename = "successfullyUpdatedFileIds", default)]
    pub file_ids: Vec<String>,
}

/// Files to delete in bulk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileIdsParam {
    pub file_ids: Vec<String>,
}

/// Files removed by a bulk delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedIds {
    #[serde(rename = "successfullyDeletedFileIds", default)]
    pub file_ids: Vec<String>,
}

/// Copy a file to another folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyAssetParam {
    #[serde(rename = "sourceFilePath")]
    pub source_path: String,
    pub destination_path: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_file_versions: bool,
}

/// Move a file to another folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveAssetParam {
    #[serde(rename = "sourceFilePath")]
    pub source_path: String,
    pub destination_path: String,
}

/// Rename a file in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameAssetParam {
    pub file_path: String,
    pub new_file_name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub purge_cache: bool,
}

/// Result of a rename; carries the cache purge request when one was made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameAssetResult {
    #[serde(rename = "purgeRequestId", default)]
    pub request_id: String,
}

/// State of an asynchronous bulk job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobStatus {
    pub job_id: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub status: String,
}

pub type AssetResponse = ApiResponse<Asset>;
pub type AssetsResponse = ApiResponse<Vec<Asset>>;
pub type TagsResponse = ApiResponse<UpdatedIds>;
pub type DeleteAssetsResponse = ApiResponse<DeletedIds>;
pub type RenameAssetResponse = ApiResponse<RenameAssetResult>;
pub type JobStatusResponse = ApiResponse<JobStatus>;
