// src/api.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::Identified;

pub mod http;
pub use http::ApiClient;

pub mod auth;
pub use auth::AuthApi;
pub mod properties;
pub use properties::{PropertiesApi, PropertyFilter};
pub mod customers;
pub use customers::{CustomerFilter, CustomersApi};
pub mod deals;
pub use deals::{DealFilter, DealsApi};
pub mod projects;
pub use projects::ProjectsApi;
pub mod events;
pub use events::{EventFilter, EventsApi};
pub mod notifications;
pub use notifications::{NotificationFilter, NotificationsApi};
pub mod dashboard;
pub use dashboard::DashboardApi;

/// Filtros de listagem repassados como query string. O servidor pode ignorar
/// qualquer um deles — a tela reaplica os mesmos filtros localmente.
pub trait QueryParams: Default + Send + Sync {
    fn to_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Filtro vazio para recursos sem parâmetros de listagem.
#[derive(Debug, Clone, Default)]
pub struct NoFilter;

impl QueryParams for NoFilter {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// Uma família CRUD por tipo de recurso, espelhando as rotas da API.
// Toda resposta de escrita devolve a entidade do servidor — é ela que a
// CollectionStore reconcilia, nunca um palpite local.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Entity: Identified + Clone + Send + Sync + DeserializeOwned;
    type Draft: Serialize + Send + Sync;
    type Filter: QueryParams;

    /// Caminho base do recurso ("/properties", "/customers"...).
    fn base_path(&self) -> &'static str;

    fn client(&self) -> &ApiClient;

    async fn list(&self, filter: &Self::Filter) -> Result<Vec<Self::Entity>, AppError> {
        self.client()
            .get_json(self.base_path(), &filter.to_pairs())
            .await
    }

    async fn get(&self, id: Uuid) -> Result<Self::Entity, AppError> {
        self.client()
            .get_json(&format!("{}/{}", self.base_path(), id), &[])
            .await
    }

    async fn create(&self, draft: &Self::Draft) -> Result<Self::Entity, AppError> {
        self.client().post_json(self.base_path(), draft).await
    }

    async fn update(&self, id: Uuid, draft: &Self::Draft) -> Result<Self::Entity, AppError> {
        self.client()
            .put_json(&format!("{}/{}", self.base_path(), id), draft)
            .await
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let _msg: crate::models::MessageResponse = self
            .client()
            .delete_json(&format!("{}/{}", self.base_path(), id))
            .await?;
        Ok(())
    }
}

// Ações rápidas de alternância de flag (PATCH /recurso/:id/<flag>).
// O valor novo vem do servidor; o cliente nunca inverte por conta própria.
#[async_trait]
pub trait FlagToggle: ResourceApi {
    fn flag_path(&self) -> &'static str;

    async fn toggle_flag(&self, id: Uuid) -> Result<Self::Entity, AppError> {
        self.client()
            .patch_json(&format!("{}/{}/{}", self.base_path(), id, self.flag_path()))
            .await
    }
}
