// src/api/events.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::api::{ApiClient, QueryParams, ResourceApi};
use crate::common::error::AppError;
use crate::models::event::{Event, EventDraft};

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    // Dia específico, no formato YYYY-MM-DD
    pub date: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
}

impl QueryParams for EventFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = &self.date {
            pairs.push(("date_filter", date.clone()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

#[derive(Clone)]
pub struct EventsApi {
    client: Arc<ApiClient>,
}

impl EventsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Marca o compromisso como concluído; devolve a entidade atualizada.
    pub async fn mark_completed(&self, id: Uuid) -> Result<Event, AppError> {
        self.client
            .patch_json(&format!("/events/{}/complete", id))
            .await
    }

    pub async fn today(&self) -> Result<Vec<Event>, AppError> {
        self.client.get_json("/events/today/list", &[]).await
    }

    pub async fn upcoming(&self, limit: u32) -> Result<Vec<Event>, AppError> {
        self.client
            .get_json("/events/upcoming/list", &[("limit", limit.to_string())])
            .await
    }
}

impl ResourceApi for EventsApi {
    type Entity = Event;
    type Draft = EventDraft;
    type Filter = EventFilter;

    fn base_path(&self) -> &'static str {
        "/events"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}
