// src/screens/projects.rs

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::api::{NoFilter, ProjectsApi, ResourceApi};
use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::UserRole;
use crate::models::project::{PaymentDraft, Plot, PlotDraft, PlotStatus, Project, ProjectDraft};
use crate::screens::state::{DialogState, Frame};
use crate::services::filter::{visible_subset, FACET_ALL};
use crate::services::store::CollectionStore;
use crate::session::Session;

// Tela de empreendimentos (lado construtor): projetos com seus lotes e
// pagamentos. As rotas aninhadas devolvem confirmações parciais, então toda
// mutação de lote é seguida de uma rebusca do projeto — reconciliação
// confirmada, nunca recontagem por palpite local.
pub struct ProjectsScreen {
    session: Arc<Session>,
    store: CollectionStore<ProjectsApi>,

    pub search: String,
    pub area_facet: String,
    pub selected: Option<Uuid>,

    pub frame: Frame,
    pub dialog: DialogState,
}

impl ProjectsScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            store: CollectionStore::new(state.projects_api.clone()),
            search: String::new(),
            area_facet: FACET_ALL.to_string(),
            selected: None,
            frame: Frame::default(),
            dialog: DialogState::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.frame.begin_load();
        let result = async {
            self.session.require_role(UserRole::Builder)?;
            self.store.load(&NoFilter).await
        }
        .await;
        self.frame.finish_load(result);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_area_facet(&mut self, value: impl Into<String>) {
        self.area_facet = value.into();
    }

    pub fn visible(&self) -> Vec<Project> {
        let facets = HashMap::from([("area".to_string(), self.area_facet.clone())]);
        visible_subset(self.store.items(), &self.search, &facets)
    }

    pub fn all(&self) -> &[Project] {
        self.store.items()
    }

    pub fn select(&mut self, id: Uuid) {
        self.selected = self.store.find(id).map(|p| p.id);
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.and_then(|id| self.store.find(id))
    }

    /// Lotes do projeto selecionado, opcionalmente por status.
    pub fn plots(&self, status: Option<PlotStatus>) -> Vec<&Plot> {
        let Some(project) = self.selected_project() else {
            return Vec::new();
        };
        project
            .plots
            .iter()
            .filter(|plot| status.is_none_or(|s| plot.status == s))
            .collect()
    }

    pub fn open_dialog(&mut self) {
        self.dialog.open();
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.cancel();
    }

    pub async fn submit_new(&mut self, draft: ProjectDraft) {
        self.dialog.submitting();
        let result = async {
            draft.validate()?;
            self.store.add(&draft).await.map(|_| ())
        }
        .await;
        self.dialog.settle(result, &mut self.frame);
    }

    pub async fn submit_update(&mut self, id: Uuid, draft: ProjectDraft) {
        self.dialog.submitting();
        let result = async {
            draft.validate()?;
            self.store.apply_update(id, &draft).await
        }
        .await;
        self.dialog.settle(result, &mut self.frame);
    }

    pub async fn delete(&mut self, id: Uuid) {
        let result = self.store.remove(id).await;
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.frame.note_action(result);
    }

    pub async fn add_plot(&mut self, project_id: Uuid, draft: PlotDraft) {
        let result = async {
            draft.validate()?;
            self.store.api().add_plot(project_id, &draft).await?;
            self.refresh_project(project_id).await
        }
        .await;
        self.frame.note_action(result);
    }

    pub async fn update_plot(&mut self, project_id: Uuid, plot_number: &str, draft: PlotDraft) {
        let result = async {
            draft.validate()?;
            self.store
                .api()
                .update_plot(project_id, plot_number, &draft)
                .await?;
            self.refresh_project(project_id).await
        }
        .await;
        self.frame.note_action(result);
    }

    pub async fn add_payment(&mut self, project_id: Uuid, plot_number: &str, draft: PaymentDraft) {
        let result = async {
            draft.validate()?;
            self.store
                .api()
                .add_payment(project_id, plot_number, &draft)
                .await?;
            self.refresh_project(project_id).await
        }
        .await;
        self.frame.note_action(result);
    }

    /// Carga em lote de lotes; o servidor recusa números duplicados.
    pub async fn bulk_upload(&mut self, project_id: Uuid, drafts: Vec<PlotDraft>) {
        let result = async {
            for draft in &drafts {
                draft.validate()?;
            }
            let ack = self
                .store
                .api()
                .bulk_upload_plots(project_id, &drafts)
                .await?;
            tracing::info!("📦 {} ({} lotes no total)", ack.message, ack.total_plots);
            self.refresh_project(project_id).await
        }
        .await;
        self.frame.note_action(result);
    }

    async fn refresh_project(&mut self, project_id: Uuid) -> Result<(), AppError> {
        let fresh = self.store.api().get(project_id).await?;
        if !fresh.plot_counts_consistent() {
            tracing::warn!(
                "Contadores de lotes inconsistentes no projeto {} (vendidos+disponíveis+reservados > total)",
                project_id
            );
        }
        self.store.accept(fresh);
        Ok(())
    }
}
