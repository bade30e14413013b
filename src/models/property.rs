// src/models/property.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::deal::DealStatus;
use crate::models::Identified;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Villa,
    Apartment,
    Plot,
    House,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::Apartment => "Apartment",
            PropertyType::Plot => "Plot",
            PropertyType::House => "House",
        }
    }
}

// O formato do fio usa os rótulos com espaço ("For Sale"/"For Rent")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "North",
            Facing::South => "South",
            Facing::East => "East",
            Facing::West => "West",
        }
    }
}

// --- PROPRIETÁRIO (registro embutido, não é entidade própria) ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PropertyOwner {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    #[validate(length(min = 1, message = "required"))]
    pub phone: String,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
}

// --- IMÓVEL (O Dado) ---

// `status` (anúncio) e `deal_status` (negociação) são acompanhados de forma
// independente: um imóvel pode seguir "For Sale" com a negociação finalizada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub user_id: Uuid,

    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub status: PropertyStatus,

    // Valores monetários circulam como texto formatado ("₹2.5 Cr");
    // a aritmética passa pelo parse canônico em services::currency.
    pub price: String,
    pub size: String,
    pub facing: Facing,
    pub address: String,
    pub area: String,

    pub bedrooms: u32,
    pub bathrooms: u32,

    pub is_hot: bool,
    pub has_garden: bool,
    pub is_corner: bool,
    pub vastu_compliant: bool,

    pub owner: PropertyOwner,

    #[serde(default)]
    pub images: Vec<String>,
    pub next_follow_up: Option<DateTime<Utc>>,
    pub deal_status: DealStatus,
    pub brokerage_amount: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Property {
    fn id(&self) -> Uuid {
        self.id
    }
}

// Dados para criação/edição de um imóvel
#[derive(Debug, Clone, Serialize, Validate)]
pub struct PropertyDraft {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub status: PropertyStatus,

    #[validate(length(min = 1, message = "required"))]
    pub price: String,
    #[validate(length(min = 1, message = "required"))]
    pub size: String,
    pub facing: Facing,
    #[validate(length(min = 1, message = "required"))]
    pub address: String,
    #[validate(length(min = 1, message = "required"))]
    pub area: String,

    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,

    #[serde(default)]
    pub is_hot: bool,
    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub is_corner: bool,
    #[serde(default)]
    pub vastu_compliant: bool,

    #[validate(nested)]
    pub owner: PropertyOwner,

    #[serde(default)]
    pub images: Vec<String>,
    pub next_follow_up: Option<DateTime<Utc>>,
    pub deal_status: DealStatus,
    #[validate(length(min = 1, message = "required"))]
    pub brokerage_amount: String,
}
