// src/models/project.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::property::Facing;
use crate::models::Identified;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotStatus {
    Available,
    Reserved,
    Sold,
}

impl PlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotStatus::Available => "Available",
            PlotStatus::Reserved => "Reserved",
            PlotStatus::Sold => "Sold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutApproval {
    Approved,
    Pending,
}

// --- PAGAMENTOS ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub date: DateTime<Utc>,
    pub amount: String,
    // "Booking", "Installment", "Token"...
    #[serde(rename = "type")]
    pub kind: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct PaymentDraft {
    pub date: DateTime<Utc>,
    #[validate(length(min = 1, message = "required"))]
    pub amount: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "required"))]
    pub kind: String,
    pub status: PaymentStatus,
}

// --- LOTES ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotBuyer {
    pub name: String,
    pub phone: String,
    pub govt_id: String,
    pub broker: Option<String>,
}

// `plot_number` é único dentro do empreendimento; o comprador existe
// se e somente se o lote não está mais disponível.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plot {
    pub plot_number: String,
    pub size: String,
    pub price: String,
    pub facing: Facing,
    pub status: PlotStatus,

    pub has_garden: bool,
    pub is_corner: bool,
    pub is_hot: bool,

    pub buyer: Option<PlotBuyer>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = "buyer_matches_status"))]
pub struct PlotDraft {
    #[validate(length(min = 1, message = "required"))]
    pub plot_number: String,
    #[validate(length(min = 1, message = "required"))]
    pub size: String,
    #[validate(length(min = 1, message = "required"))]
    pub price: String,
    pub facing: Facing,
    pub status: PlotStatus,

    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub is_corner: bool,
    #[serde(default)]
    pub is_hot: bool,

    pub buyer: Option<PlotBuyer>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

fn buyer_matches_status(draft: &PlotDraft) -> Result<(), ValidationError> {
    match (draft.status, draft.buyer.is_some()) {
        (PlotStatus::Available, true) => {
            let mut err = ValidationError::new("buyer_on_available_plot");
            err.message = Some("Lote disponível não pode ter comprador.".into());
            Err(err)
        }
        (PlotStatus::Reserved | PlotStatus::Sold, false) => {
            let mut err = ValidationError::new("buyer_required");
            err.message = Some("Lote reservado/vendido exige os dados do comprador.".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

// --- EMPREENDIMENTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,

    pub name: String,
    pub area: String,

    pub total_plots: u32,
    pub sold_plots: u32,
    pub available_plots: u32,
    pub reserved_plots: u32,

    pub price_range: String,
    pub layout_approval: LayoutApproval,
    pub completion_date: DateTime<Utc>,

    #[serde(default)]
    pub plots: Vec<Plot>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Project {
    /// Invariante dos contadores: vendidos + disponíveis + reservados ≤ total.
    pub fn plot_counts_consistent(&self) -> bool {
        self.sold_plots + self.available_plots + self.reserved_plots <= self.total_plots
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = "counts_within_total"))]
pub struct ProjectDraft {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    #[validate(length(min = 1, message = "required"))]
    pub area: String,
    pub total_plots: u32,
    pub available_plots: u32,
    #[validate(length(min = 1, message = "required"))]
    pub price_range: String,
    pub layout_approval: LayoutApproval,
    pub completion_date: DateTime<Utc>,
}

fn counts_within_total(draft: &ProjectDraft) -> Result<(), ValidationError> {
    if draft.available_plots > draft.total_plots {
        let mut err = ValidationError::new("plots_exceed_total");
        err.message = Some("Lotes disponíveis não podem exceder o total.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_draft(status: PlotStatus, buyer: Option<PlotBuyer>) -> PlotDraft {
        PlotDraft {
            plot_number: "A-12".to_string(),
            size: "2400 sq ft".to_string(),
            price: "₹80 Lakh".to_string(),
            facing: Facing::East,
            status,
            has_garden: false,
            is_corner: true,
            is_hot: false,
            buyer,
            payments: vec![],
        }
    }

    fn buyer() -> PlotBuyer {
        PlotBuyer {
            name: "Ramesh Patil".to_string(),
            phone: "+91 98220 11223".to_string(),
            govt_id: "ABCDE1234F".to_string(),
            broker: None,
        }
    }

    #[test]
    fn test_available_plot_rejects_buyer() {
        assert!(plot_draft(PlotStatus::Available, Some(buyer())).validate().is_err());
        assert!(plot_draft(PlotStatus::Available, None).validate().is_ok());
    }

    #[test]
    fn test_sold_plot_requires_buyer() {
        assert!(plot_draft(PlotStatus::Sold, None).validate().is_err());
        assert!(plot_draft(PlotStatus::Sold, Some(buyer())).validate().is_ok());
    }

    #[test]
    fn test_project_draft_counts() {
        let mut draft = ProjectDraft {
            name: "Green Valley Plots".to_string(),
            area: "Wagholi".to_string(),
            total_plots: 50,
            available_plots: 60,
            price_range: "₹40-80 Lakh".to_string(),
            layout_approval: LayoutApproval::Approved,
            completion_date: Utc::now(),
        };
        assert!(draft.validate().is_err());
        draft.available_plots = 50;
        assert!(draft.validate().is_ok());
    }
}
