// src/models/event.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Visit,
    Call,
    Meeting,
    Documentation,
    Registry,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Visit => "visit",
            EventType::Call => "call",
            EventType::Meeting => "meeting",
            EventType::Documentation => "documentation",
            EventType::Registry => "registry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

// Compromisso da agenda: visita, ligação, reunião, documentação ou cartório.
// `customer`/`phone` são cópias de exibição, não vínculos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,

    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,

    pub date: DateTime<Utc>,
    // Horário de exibição ("10:30 AM"), separado da data
    pub time: String,

    pub customer: String,
    pub phone: String,
    pub location: String,
    pub notes: Option<String>,
    pub status: EventStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Event {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct EventDraft {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub date: DateTime<Utc>,
    #[validate(length(min = 1, message = "required"))]
    pub time: String,
    #[validate(length(min = 1, message = "required"))]
    pub customer: String,
    #[validate(length(min = 1, message = "required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "required"))]
    pub location: String,
    pub notes: Option<String>,
}
