use crate::api::{ApiClient, ApiError, ApiResult};
use crate::models::ContactMessage;

pub const LIST_FAILED: &str = "Unauthorized or error";
pub const DELETE_FAILED: &str = "Delete failed";

/// Inbox operations behind the admin token.
#[derive(Clone)]
pub struct MessageManager {
    api: ApiClient,
}

impl MessageManager {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every non-success status collapses into one `Unauthorized` condition;
    /// 401 and 403 are not told apart from other failures.
    pub async fn list(&self) -> ApiResult<Vec<ContactMessage>> {
        self.api.list_messages().await.map_err(|e| match e {
            ApiError::Unauthorized(_) | ApiError::Rejected { .. } => {
                ApiError::Unauthorized(LIST_FAILED.to_string())
            }
            other => other,
        })
    }

    /// Deletes one message, then re-lists the inbox.
    ///
    /// The outer error is the delete itself (no retry, nothing re-listed).
    /// The inner result is the refresh, which fails like `list`. Nothing is
    /// removed locally ahead of the server.
    pub async fn delete(&self, id: i64) -> ApiResult<ApiResult<Vec<ContactMessage>>> {
        self.api.delete_message(id).await.map_err(|e| match e {
            ApiError::Unauthorized(_) => ApiError::Unauthorized(DELETE_FAILED.to_string()),
            ApiError::Rejected { status, .. } => ApiError::Rejected {
                status,
                message: DELETE_FAILED.to_string(),
            },
            other => other,
        })?;
        Ok(self.list().await)
    }
}
