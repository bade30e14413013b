// src/models/notification.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Payment,
    Followup,
    Inquiry,
    Meeting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,

    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,

    pub is_read: bool,
    // Entidade relacionada (cliente, imóvel...), quando houver
    pub related_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Notification {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct NotificationDraft {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,
    #[validate(length(min = 1, message = "required"))]
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub related_id: Option<Uuid>,
}

// Resposta de GET /notifications/unread/count
#[derive(Debug, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u32,
}
