// src/screens/deals.rs

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::api::{DealFilter, DealsApi};
use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::UserRole;
use crate::models::customer::Customer;
use crate::models::deal::{Deal, DealDraft};
use crate::models::property::Property;
use crate::screens::state::{DialogState, Frame};
use crate::services::export::{deals_csv, CsvExport};
use crate::services::filter::{visible_subset, FACET_ALL};
use crate::services::metrics::{count_by, sum_money};
use crate::services::store::CollectionStore;
use crate::session::Session;

// Linha resolvida para exibição: o vínculo forte é o par de ids; as cópias
// desnormalizadas que vêm no fio são apenas o plano B quando a entidade
// vinculada não está carregada.
#[derive(Debug, Clone)]
pub struct DealRow {
    pub deal: Deal,
    pub property_title: String,
    pub customer_name: String,
}

// Tela de histórico de negócios do corretor.
pub struct DealsScreen {
    session: Arc<Session>,
    store: CollectionStore<DealsApi>,

    pub search: String,
    pub status_facet: String,

    pub frame: Frame,
    pub dialog: DialogState,
}

impl DealsScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            store: CollectionStore::new(state.deals_api.clone()),
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
            self.store.load(&DealFilter::default()).await
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

    pub fn visible(&self) -> Vec<Deal> {
        let facets = HashMap::from([("status".to_string(), self.status_facet.clone())]);
        visible_subset(self.store.items(), &self.search, &facets)
    }

    pub fn all(&self) -> &[Deal] {
        self.store.items()
    }

    /// Resolve os nomes de exibição pelas identidades tipadas, caindo nas
    /// cópias desnormalizadas quando o vínculo não está carregado.
    pub fn resolved_rows(&self, properties: &[Property], customers: &[Customer]) -> Vec<DealRow> {
        self.visible()
            .into_iter()
            .map(|deal| resolve_display(deal, properties, customers))
            .collect()
    }

    pub fn status_counts(&self) -> HashMap<&'static str, usize> {
        count_by(self.store.items(), |d| d.status.as_str())
    }

    /// Negócios ainda em andamento (sem estado terminal).
    pub fn active_count(&self) -> usize {
        self.store
            .items()
            .iter()
            .filter(|d| !d.status.is_terminal())
            .count()
    }

    /// Soma do valor dos negócios ganhos, via parse canônico de moeda.
    pub fn won_value(&self) -> rust_decimal::Decimal {
        let won: Vec<&Deal> = self
            .store
            .items()
            .iter()
            .filter(|d| d.status.is_won())
            .collect();
        sum_money(&won, |d| d.deal_value.as_str())
    }

    pub fn open_dialog(&mut self) {
        self.dialog.open();
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.cancel();
    }

    pub async fn submit_new(&mut self, draft: DealDraft) {
        self.dialog.submitting();
        let result = async {
            draft.validate()?;
            self.store.add(&draft).await.map(|_| ())
        }
        .await;
        self.dialog.settle(result, &mut self.frame);
    }

    /// O servidor é quem carimba `close_date` quando o status passa a ser
    /// terminal — a entidade devolvida substitui a local como veio.
    pub async fn submit_update(&mut self, id: Uuid, draft: DealDraft) {
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

    pub fn export_csv(&self) -> Result<CsvExport, AppError> {
        deals_csv(self.store.items())
    }
}

/// Passo explícito de resolução de vínculos na fronteira da visão.
pub fn resolve_display(deal: Deal, properties: &[Property], customers: &[Customer]) -> DealRow {
    let property_title = properties
        .iter()
        .find(|p| p.id == deal.property_id)
        .map(|p| p.title.clone())
        .unwrap_or_else(|| deal.property_title.clone());
    let customer_name = customers
        .iter()
        .find(|c| c.id == deal.customer_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| deal.customer_name.clone());
    DealRow {
        property_title,
        customer_name,
        deal,
    }
}
