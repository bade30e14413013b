// src/screens/calendar.rs

use std::collections::HashMap;

use uuid::Uuid;
use validator::Validate;

use crate::api::{EventFilter, EventsApi};
use crate::config::AppState;
use crate::models::event::{Event, EventDraft, EventStatus};
use crate::models::Identified;
use crate::screens::state::{DialogState, Frame};
use crate::services::filter::{visible_subset, FACET_ALL};
use crate::services::store::CollectionStore;

// Agenda de follow-ups: a coleção completa mais as listas de "hoje" e
// "próximos", que são consultas separadas do servidor. A agenda existe
// para os dois papéis, então não há porteiro de papel aqui.
pub struct CalendarScreen {
    store: CollectionStore<EventsApi>,

    pub search: String,
    pub type_facet: String,

    pub today: Vec<Event>,
    pub upcoming: Vec<Event>,

    pub frame: Frame,
    pub dialog: DialogState,
}

const UPCOMING_LIMIT: u32 = 10;

impl CalendarScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: CollectionStore::new(state.events_api.clone()),
            search: String::new(),
            type_facet: FACET_ALL.to_string(),
            today: Vec::new(),
            upcoming: Vec::new(),
            frame: Frame::default(),
            dialog: DialogState::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.frame.begin_load();
        let result = async {
            self.store.load(&EventFilter::default()).await?;
            self.today = self.store.api().today().await?;
            self.upcoming = self.store.api().upcoming(UPCOMING_LIMIT).await?;
            Ok(())
        }
        .await;
        self.frame.finish_load(result);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_type_facet(&mut self, value: impl Into<String>) {
        self.type_facet = value.into();
    }

    pub fn visible(&self) -> Vec<Event> {
        let facets = HashMap::from([("type".to_string(), self.type_facet.clone())]);
        visible_subset(self.store.items(), &self.search, &facets)
    }

    pub fn all(&self) -> &[Event] {
        self.store.items()
    }

    pub fn scheduled_count(&self) -> usize {
        self.store
            .items()
            .iter()
            .filter(|e| e.status == EventStatus::Scheduled)
            .count()
    }

    pub fn open_dialog(&mut self) {
        self.dialog.open();
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.cancel();
    }

    pub async fn submit_new(&mut self, draft: EventDraft) {
        self.dialog.submitting();
        let result = async {
            draft.validate()?;
            self.store.add(&draft).await.map(|_| ())
        }
        .await;
        self.dialog.settle(result, &mut self.frame);
    }

    pub async fn submit_update(&mut self, id: Uuid, draft: EventDraft) {
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
        if result.is_ok() {
            self.today.retain(|e| e.id() != id);
            self.upcoming.retain(|e| e.id() != id);
        }
        self.frame.note_action(result);
    }

    /// Conclusão confirmada: a entidade devolvida substitui a local e sai
    /// da lista de próximos (que só contém agendados).
    pub async fn mark_completed(&mut self, id: Uuid) {
        let result = async {
            let updated = self.store.api().mark_completed(id).await?;
            self.store.accept(updated.clone());
            self.upcoming.retain(|e| e.id() != id);
            if let Some(entry) = self.today.iter_mut().find(|e| e.id() == id) {
                *entry = updated;
            }
            Ok(())
        }
        .await;
        self.frame.note_action(result);
    }
}
