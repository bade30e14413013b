// src/api/projects.rs

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::api::{ApiClient, NoFilter, ResourceApi};
use crate::common::error::AppError;
use crate::models::project::{Payment, PaymentDraft, Plot, PlotDraft, Project, ProjectDraft};

// As rotas aninhadas de lote devolvem confirmações parciais
// ({"message", "plot"}); a tela reconcilia buscando o empreendimento
// atualizado em seguida.
#[derive(Debug, Deserialize)]
pub struct PlotAck {
    pub message: String,
    pub plot: Plot,
}

#[derive(Debug, Deserialize)]
pub struct PaymentAck {
    pub message: String,
    pub payment: Payment,
}

#[derive(Debug, Deserialize)]
pub struct BulkUploadAck {
    pub message: String,
    pub total_plots: u32,
}

#[derive(Clone)]
pub struct ProjectsApi {
    client: Arc<ApiClient>,
}

impl ProjectsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lotes de um empreendimento, com filtro opcional de status.
    pub async fn plots(&self, id: Uuid, status: Option<&str>) -> Result<Vec<Plot>, AppError> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.client
            .get_json(&format!("/projects/{}/plots", id), &query)
            .await
    }

    pub async fn add_plot(&self, id: Uuid, draft: &PlotDraft) -> Result<PlotAck, AppError> {
        self.client
            .post_json(&format!("/projects/{}/plots", id), draft)
            .await
    }

    pub async fn update_plot(
        &self,
        id: Uuid,
        plot_number: &str,
        draft: &PlotDraft,
    ) -> Result<PlotAck, AppError> {
        self.client
            .put_json(&format!("/projects/{}/plots/{}", id, plot_number), draft)
            .await
    }

    pub async fn add_payment(
        &self,
        id: Uuid,
        plot_number: &str,
        draft: &PaymentDraft,
    ) -> Result<PaymentAck, AppError> {
        self.client
            .post_json(
                &format!("/projects/{}/plots/{}/payments", id, plot_number),
                draft,
            )
            .await
    }

    /// Carga em lote; números de lote duplicados são recusados pelo servidor.
    pub async fn bulk_upload_plots(
        &self,
        id: Uuid,
        drafts: &[PlotDraft],
    ) -> Result<BulkUploadAck, AppError> {
        self.client
            .post_json(&format!("/projects/{}/bulk-upload", id), drafts)
            .await
    }
}

impl ResourceApi for ProjectsApi {
    type Entity = Project;
    type Draft = ProjectDraft;
    type Filter = NoFilter;

    fn base_path(&self) -> &'static str {
        "/projects"
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}
