// src/api/dashboard.rs

use std::sync::Arc;

use crate::api::ApiClient;
use crate::common::error::AppError;
use crate::models::dashboard::DashboardStats;

#[derive(Clone)]
pub struct DashboardApi {
    client: Arc<ApiClient>,
}

impl DashboardApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Cards do topo, no formato do papel do usuário autenticado.
    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        self.client.get_json("/dashboard/stats", &[]).await
    }
}
