// src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Identified;

// Funil de atendimento do corretor. Os rótulos do fio têm espaço/hífen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerStatus {
    Interested,
    Call,
    Visit,
    #[serde(rename = "Visit Done")]
    VisitDone,
    #[serde(rename = "Follow-up")]
    FollowUp,
    #[serde(rename = "Deal Lost")]
    DealLost,
    Closed,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Interested => "Interested",
            CustomerStatus::Call => "Call",
            CustomerStatus::Visit => "Visit",
            CustomerStatus::VisitDone => "Visit Done",
            CustomerStatus::FollowUp => "Follow-up",
            CustomerStatus::DealLost => "Deal Lost",
            CustomerStatus::Closed => "Closed",
        }
    }

    /// Status que contam como "em andamento" no card de pipeline.
    pub fn in_pipeline(&self) -> bool {
        matches!(
            self,
            CustomerStatus::Interested
                | CustomerStatus::Call
                | CustomerStatus::Visit
                | CustomerStatus::VisitDone
                | CustomerStatus::FollowUp
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub user_id: Uuid,

    pub name: String,
    pub phone: String,
    pub email: Option<String>,

    // Faixa de orçamento em texto livre ("₹20-30k/month"): nenhuma
    // aritmética é feita sobre este campo.
    pub budget: String,
    pub interest: String,

    pub status: CustomerStatus,
    pub is_important: bool,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Customer {
    fn id(&self) -> Uuid {
        self.id
    }
}

// Dados para criação/edição de um cliente
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CustomerDraft {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    #[validate(length(min = 1, message = "required"))]
    pub phone: String,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub budget: String,
    #[validate(length(min = 1, message = "required"))]
    pub interest: String,

    pub status: CustomerStatus,
    #[serde(default)]
    pub is_important: bool,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&CustomerStatus::FollowUp).unwrap(),
            "\"Follow-up\""
        );
        let parsed: CustomerStatus = serde_json::from_str("\"Visit Done\"").unwrap();
        assert_eq!(parsed, CustomerStatus::VisitDone);
    }

    #[test]
    fn test_pipeline_membership() {
        assert!(CustomerStatus::Interested.in_pipeline());
        assert!(CustomerStatus::FollowUp.in_pipeline());
        assert!(!CustomerStatus::DealLost.in_pipeline());
        assert!(!CustomerStatus::Closed.in_pipeline());
    }
}
