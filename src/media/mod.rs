//! Media library resources.
//!
//! Every operation follows the same shape: build the path with
//! [`build_path!`](crate::build_path), encode the request struct as query
//! parameters or a JSON body, send it through
//! [`MediaClient`](crate::client::MediaClient), and return an
//! [`ApiResponse`](crate::response::ApiResponse) with the decoded payload and the
//! raw response.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `assets` | `GET files?…` |
//! | `asset_by_id` | `GET files/{id}/details` |
//! | `asset_versions` | `GET files/{id}/versions[/{version}]` |
//! | `update_asset` | `PATCH files/{id}/details` |
//! | `add_tags`, `remove_tags` | `POST files/addTags`, `POST files/removeTags` |
//! | `remove_ai_tags` | `POST files/removeAITags` |
//! | `delete_asset` | `DELETE files/{id}` |
//! | `delete_asset_version` | `DELETE files/{id}/versions/{version}` |
//! | `delete_bulk_assets` | `POST files/batch/deleteByFileIds` |
//! | `copy_asset`, `move_asset` | `POST files/copy`, `POST files/move` |
//! | `rename_asset` | `PUT files/rename` |
//! | `restore_version` | `PUT files/{id}/versions/{version}/restore` |
//! | `bulk_job_status` | `GET bulkJobs/{job}` |

mod assets;
mod types;

pub use types::*;
