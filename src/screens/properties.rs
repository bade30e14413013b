// src/screens/properties.rs

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::api::{PropertiesApi, PropertyFilter};
use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::UserRole;
use crate::models::property::{Property, PropertyDraft};
use crate::screens::state::{DialogState, Frame};
use crate::services::filter::{visible_subset, FACET_ALL};
use crate::services::metrics::count_by;
use crate::services::store::CollectionStore;
use crate::session::Session;

// Tela do gerenciador de imóveis (lado corretor): busca textual + facetas
// de área/status/tipo sobre a coleção completa, com o diálogo de cadastro
// independente do carregamento da lista.
pub struct PropertiesScreen {
    session: Arc<Session>,
    store: CollectionStore<PropertiesApi>,

    pub search: String,
    pub area_facet: String,
    pub status_facet: String,
    pub type_facet: String,

    // Valores distintos para os seletores, vindos da API
    pub areas: Vec<String>,
    pub types: Vec<String>,

    pub frame: Frame,
    pub dialog: DialogState,
}

impl PropertiesScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            store: CollectionStore::new(state.properties_api.clone()),
            search: String::new(),
            area_facet: FACET_ALL.to_string(),
            status_facet: FACET_ALL.to_string(),
            type_facet: FACET_ALL.to_string(),
            areas: Vec::new(),
            types: Vec::new(),
            frame: Frame::default(),
            dialog: DialogState::default(),
        }
    }

    /// Carga inicial: coleção completa + listas de seletores.
    pub async fn mount(&mut self) {
        self.frame.begin_load();
        let result = self.load_all().await;
        self.frame.finish_load(result);
    }

    pub async fn reload(&mut self) {
        self.mount().await;
    }

    async fn load_all(&mut self) -> Result<(), AppError> {
        self.session.require_role(UserRole::Broker)?;
        self.store.load(&PropertyFilter::default()).await?;
        self.areas = self.store.api().areas().await?;
        self.types = self.store.api().types().await?;
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_area_facet(&mut self, value: impl Into<String>) {
        self.area_facet = value.into();
    }

    pub fn set_status_facet(&mut self, value: impl Into<String>) {
        self.status_facet = value.into();
    }

    pub fn set_type_facet(&mut self, value: impl Into<String>) {
        self.type_facet = value.into();
    }

    /// Subconjunto visível, recalculado a cada tecla/seleção.
    pub fn visible(&self) -> Vec<Property> {
        let facets = HashMap::from([
            ("area".to_string(), self.area_facet.clone()),
            ("status".to_string(), self.status_facet.clone()),
            ("type".to_string(), self.type_facet.clone()),
        ]);
        visible_subset(self.store.items(), &self.search, &facets)
    }

    pub fn all(&self) -> &[Property] {
        self.store.items()
    }

    pub fn status_counts(&self) -> HashMap<&'static str, usize> {
        count_by(self.store.items(), |p| p.status.as_str())
    }

    pub fn open_dialog(&mut self) {
        self.dialog.open();
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.cancel();
    }

    pub async fn submit_new(&mut self, draft: PropertyDraft) {
        self.dialog.submitting();
        let result = self.create(draft).await;
        self.dialog.settle(result, &mut self.frame);
    }

    async fn create(&mut self, draft: PropertyDraft) -> Result<(), AppError> {
        draft.validate()?;
        let id = self.store.add(&draft).await?;
        tracing::info!("🏠 Imóvel cadastrado ({})", id);
        Ok(())
    }

    pub async fn submit_update(&mut self, id: Uuid, draft: PropertyDraft) {
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
        self.frame.note_action(result);
    }

    /// Alternância confirmada do destaque "hot" — o servidor decide o valor.
    pub async fn toggle_hot(&mut self, id: Uuid) {
        let result = self.store.toggle(id).await;
        self.frame.note_action(result);
    }
}
