//! Asset operations of the media library.

use crate::build_path;
use crate::client::{MediaClient, RequestBody};
use crate::error::{MediaError, Result};
use crate::media::types::*;
use crate::protocol::{struct_to_params, QueryParams};
use crate::response::{ApiResponse, Response};
use http::Method;
use serde::Deserialize;

/// A versions listing, or a single version when one was requested.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Asset>),
    One(Box<Asset>),
}

impl MediaClient {
    /// List and search assets.
    pub async fn assets(&self, params: &AssetsParam) -> Result<AssetsResponse> {
        let query = struct_to_params(params)?;
        self.call(Method::GET, "files", &query, &RequestBody::Empty)
            .await
    }

    /// Details of one asset.
    pub async fn asset_by_id(&self, file_id: &str) -> Result<AssetResponse> {
        let path = build_path!("files", file_id, "details");
        self.call(Method::GET, &path, &QueryParams::new(), &RequestBody::Empty)
            .await
    }

    /// All versions of a file, or the single version named in `params`.
    pub async fn asset_versions(&self, params: &AssetVersionsParam) -> Result<AssetsResponse> {
        let version_id = params.version_id.as_deref().unwrap_or_default();
        let path = build_path!("files", params.file_id, "versions", version_id);

        let mut result = ApiResponse::<Vec<Asset>>::default();
        self.send_into(
            Method::GET,
            &path,
            &QueryParams::new(),
            &RequestBody::Empty,
            &mut result,
        )
        .await?;

        let raw = result.response.body();
        if !raw.is_empty() {
            let decoded = serde_json::from_slice::<OneOrMany>(raw)
                .map_err(|e| MediaError::Decode(e).with_response(result.response.clone()))?;
            result.data = match decoded {
                OneOrMany::Many(assets) => assets,
                OneOrMany::One(asset) => vec![*asset],
            };
        }

        Ok(result)
    }

    /// Update tags, custom coordinates, custom metadata or extensions of an asset.
    pub async fn update_asset(&self, file_id: &str, params: &UpdateAssetParam) -> Result<AssetResponse> {
        let path = build_path!("files", file_id, "details");
        let body = RequestBody::json(params)?;
        self.call(Method::PATCH, &path, &QueryParams::new(), &body).await
    }

    /// Add tags to several files.
    pub async fn add_tags(&self, params: &TagsParam) -> Result<TagsResponse> {
        let body = RequestBody::json(params)?;
        self.call(Method::POST, "files/addTags", &QueryParams::new(), &body)
            .await
    }

    /// Remove tags from several files.
    pub async fn remove_tags(&self, params: &TagsParam) -> Result<TagsResponse> {
        let body = RequestBody::json(params)?;
        self.call(Method::POST, "files/removeTags", &QueryParams::new(), &body)
            .await
    }

    /// Remove AI tags from several files.
    pub async fn remove_ai_tags(&self, params: &AiTagsParam) -> Result<TagsResponse> {
        let body = RequestBody::json(params)?;
        self.call(Method::POST, "files/removeAITags", &QueryParams::new(), &body)
            .await
    }

    /// Delete a file with all its versions.
    pub async fn delete_asset(&self, file_id: &str) -> Result<Response> {
        let path = build_path!("files", file_id);
        self.call_empty(Method::DELETE, &path, &QueryParams::new(), &RequestBody::Empty)
            .await
    }

    /// Delete a non-current version of a file.
    pub async fn delete_asset_version(&self, file_id: &str, version_id: &str) -> Result<Response> {
        let path = build_path!("files", file_id, "versions", version_id);
        self.call_empty(Method::DELETE, &path, &QueryParams::new(), &RequestBody::Empty)
            .await
    }

    /// Delete several files at once.
    pub async fn delete_bulk_assets(&self, params: &FileIdsParam) -> Result<DeleteAssetsResponse> {
        let body = RequestBody::json(params)?;
        self.call(Method::POST, "files/batch/deleteByFileIds", &QueryParams::new(), &body)
            .await
    }

    /// Copy a file into another folder.
    pub async fn copy_asset(&self, params: &CopyAssetParam) -> Result<Response> {
        let body = RequestBody::json(params)?;
        self.call_empty(Method::POST, "files/copy", &QueryParams::new(), &body)
            .await
    }

    /// Move a file into another folder.
    pub async fn move_asset(&self, params: &MoveAssetParam) -> Result<Response> {
        let body = RequestBody::json(params)?;
        self.call_empty(Method::POST, "files/move", &QueryParams::new(), &body)
            .await
    }

    /// Rename a file, optionally purging its cached URLs.
    pub async fn rename_asset(&self, params: &RenameAssetParam) -> Result<RenameAssetResponse> {
        let body = RequestBody::json(params)?;
        self.call(Method::PUT, "files/rename", &QueryParams::new(), &body)
            .await
    }

    /// Make an older version the current one.
    pub async fn restore_version(&self, file_id: &str, version_id: &str) -> Result<AssetResponse> {
        let path = build_path!("files", file_id, "versions", version_id, "restore");
        self.call(Method::PUT, &path, &QueryParams::new(), &RequestBody::Empty)
            .await
    }

    /// Status of a bulk copy, move or rename job.
    pub async fn bulk_job_status(&self, job_id: &str) -> Result<JobStatusResponse> {
        let path = build_path!("bulkJobs", job_id);
        self.call(Method::GET, &path, &QueryParams::new(), &RequestBody::Empty)
            .await
    }
}
