// src/screens/customers.rs

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::api::{CustomerFilter, CustomersApi};
use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::UserRole;
use crate::models::customer::{Customer, CustomerDraft};
use crate::screens::state::{DialogState, Frame};
use crate::services::export::{customers_csv, CsvExport};
use crate::services::filter::{visible_subset, FACET_ALL};
use crate::services::metrics::count_by;
use crate::services::store::CollectionStore;
use crate::session::Session;

// Tela de clientes/leads do corretor: busca por nome/telefone/e-mail,
// faceta de status, marcação de importante e exportação CSV local.
pub struct CustomersScreen {
    session: Arc<Session>,
    store: CollectionStore<CustomersApi>,

    pub search: String,
    pub status_facet: String,

    pub frame: Frame,
    pub dialog: DialogState,
}

impl CustomersScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            store: CollectionStore::new(state.customers_api.clone()),
            search: String::new(),
            status_facet: FACET_ALL.to_string(),
            frame: Frame::default(),
            dialog: DialogState::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.frame.begin_load();
        let result = async {
            self.session.require_role(UserRole::Broker)?;
            self.store.load(&CustomerFilter::default()).await
        }
        .await;
        self.frame.finish_load(result);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_status_facet(&mut self, value: impl Into<String>) {
        self.status_facet = value.into();
    }

    pub fn visible(&self) -> Vec<Customer> {
        let facets = HashMap::from([("status".to_string(), self.status_facet.clone())]);
        visible_subset(self.store.items(), &self.search, &facets)
    }

    pub fn all(&self) -> &[Customer] {
        self.store.items()
    }

    pub fn status_counts(&self) -> HashMap<&'static str, usize> {
        count_by(self.store.items(), |c| c.status.as_str())
    }

    /// Quantos clientes ainda estão no funil (nem fechados, nem perdidos).
    pub fn pipeline_count(&self) -> usize {
        self.store
            .items()
            .iter()
            .filter(|c| c.status.in_pipeline())
            .count()
    }

    pub fn important_count(&self) -> usize {
        self.store.items().iter().filter(|c| c.is_important).count()
    }

    pub fn open_dialog(&mut self) {
        self.dialog.open();
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.cancel();
    }

    pub async fn submit_new(&mut self, draft: CustomerDraft) {
        self.dialog.submitting();
        let result = async {
            draft.validate()?;
            self.store.add(&draft).await.map(|_| ())
        }
        .await;
        self.dialog.settle(result, &mut self.frame);
    }

    pub async fn submit_update(&mut self, id: Uuid, draft: CustomerDraft) {
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

    pub async fn toggle_important(&mut self, id: Uuid) {
        let result = self.store.toggle(id).await;
        self.frame.note_action(result);
    }

    /// Gera customers.csv com a coleção completa, não só o subconjunto
    /// visível.
    pub fn export_csv(&self) -> Result<CsvExport, AppError> {
        customers_csv(self.store.items())
    }
}
