// src/api/notifications.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::api::{ApiClient, QueryParams, ResourceApi};
use crate::common::error::AppError;
use crate::models::notification::{Notification, NotificationDraft, UnreadCount};
use crate::models::MessageResponse;

#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub is_read: Option<bool>,
    pub kind: Option<String>,
    pub limit: Option<u32>,
}

impl QueryParams for NotificationFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(is_read) = self.is_read {
            pairs.push(("is_read", is_read.to_string()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[derive(Clone)]
pub struct NotificationsApi {
    client: Arc<ApiClient>,
}

impl NotificationsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<Notification, AppError> {
        self.client
            .patch_json(&format!("/notifications/{}/read", id))
            .await
    }

    pub async fn mark_all_read(&self) -> Result<(), AppError> {
        let _msg: MessageResponse = self
            .client
            .patch_json("/notifications/mark-all-read")
            .await?;
        Ok(())
    }

    pub async fn unread_count(&self) -> Result<u32, AppError> {
        let response: UnreadCount = self
            .client
            .get_json("/notifications/unread/count", &[])
            .await?;
        Ok(response.unread_count)
    }
}

impl ResourceApi for NotificationsApi {
    type Entity = Notification;
    type Draft = NotificationDraft;
    type Filter = NotificationFilter;

    fn base_path(&self) -> &'static str {
        "/notifications"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}
