pub mod auth;
pub use auth::{LoginPayload, SignupPayload, TokenResponse, User, UserRole};
pub mod property;
pub use property::{Facing, Property, PropertyDraft, PropertyOwner, PropertyStatus, PropertyType};
pub mod customer;
pub use customer::{Customer, CustomerDraft, CustomerStatus};
pub mod deal;
pub use deal::{Deal, DealDraft, DealStatus};
pub mod project;
pub use project::{
    LayoutApproval, Payment, PaymentDraft, PaymentStatus, Plot, PlotBuyer, PlotDraft, PlotStatus,
    Project, ProjectDraft,
};
pub mod event;
pub use event::{Event, EventDraft, EventStatus, EventType};
pub mod notification;
pub use notification::{Notification, NotificationDraft, NotificationType};
pub mod dashboard;
pub use dashboard::{BrokerStats, BrokerageMonth, BuilderStats, DashboardStats};

use uuid::Uuid;

/// Toda entidade sincronizada com a API tem uma identidade atribuída pelo servidor.
pub trait Identified {
    fn id(&self) -> Uuid;
}

// Resposta padrão das rotas de remoção ({"message": "..."}).
#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
