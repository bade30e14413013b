// src/models/deal.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Identified;

// Estágio da negociação. O mesmo enum serve ao `deal_status` do imóvel e ao
// status do negócio em si.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealStatus {
    Interested,
    Call,
    #[serde(rename = "Visit Done")]
    VisitDone,
    #[serde(rename = "Follow-up")]
    FollowUp,
    Agreement,
    Registry,
    #[serde(rename = "Brokerage Received")]
    BrokerageReceived,
    Finalized,
    Closed,
    Cancelled,
}

impl DealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStatus::Interested => "Interested",
            DealStatus::Call => "Call",
            DealStatus::VisitDone => "Visit Done",
            DealStatus::FollowUp => "Follow-up",
            DealStatus::Agreement => "Agreement",
            DealStatus::Registry => "Registry",
            DealStatus::BrokerageReceived => "Brokerage Received",
            DealStatus::Finalized => "Finalized",
            DealStatus::Closed => "Closed",
            DealStatus::Cancelled => "Cancelled",
        }
    }

    /// Estados terminais: o servidor carimba `close_date` ao chegar aqui.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DealStatus::Closed | DealStatus::Finalized | DealStatus::Cancelled
        )
    }

    /// Negócios concluídos com sucesso (entram na soma de corretagem).
    pub fn is_won(&self) -> bool {
        matches!(self, DealStatus::Closed | DealStatus::Finalized)
    }
}

// Além do par de cópias desnormalizadas que a API transporta
// (`property_title`/`customer_name`), o negócio carrega as identidades
// tipadas — a resolução de exibição acontece na camada de tela.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub user_id: Uuid,

    pub property_id: Uuid,
    pub customer_id: Uuid,
    pub property_title: String,
    pub customer_name: String,

    pub status: DealStatus,
    pub deal_value: String,
    pub brokerage_amount: String,

    pub start_date: DateTime<Utc>,
    // Presente apenas quando o status alcança um estado terminal
    pub close_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Deal {
    fn id(&self) -> Uuid {
        self.id
    }
}

// Dados para criação/edição de um negócio. `start_date`/`close_date` são
// atribuídos pelo servidor.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct DealDraft {
    pub property_id: Uuid,
    pub customer_id: Uuid,
    #[validate(length(min = 1, message = "required"))]
    pub property_title: String,
    #[validate(length(min = 1, message = "required"))]
    pub customer_name: String,

    pub status: DealStatus,
    #[validate(length(min = 1, message = "required"))]
    pub deal_value: String,
    #[validate(length(min = 1, message = "required"))]
    pub brokerage_amount: String,
    pub notes: Option<String>,
}
