// src/screens/dashboard.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::api::{
    CustomerFilter, CustomersApi, DashboardApi, NotificationFilter, NotificationsApi,
    PropertiesApi, PropertyFilter,
};
use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::UserRole;
use crate::models::customer::Customer;
use crate::models::dashboard::DashboardStats;
use crate::models::property::Property;
use crate::screens::state::Frame;
use crate::services::store::CollectionStore;
use crate::session::Session;

const RECENT_LIMIT: usize = 5;
const NOTIFICATION_LIMIT: u32 = 20;

// Painel inicial. Na montagem dispara requisições independentes (stats,
// imóveis recentes, clientes recentes, notificações) e resolve cada uma
// separadamente — a ordem de chegada não é garantida e cada bloco tem o
// próprio estado de carregamento.
pub struct DashboardScreen {
    session: Arc<Session>,
    dashboard_api: DashboardApi,

    pub stats: Option<DashboardStats>,
    pub stats_frame: Frame,

    properties: CollectionStore<PropertiesApi>,
    pub properties_frame: Frame,

    customers: CollectionStore<CustomersApi>,
    pub customers_frame: Frame,

    notifications: CollectionStore<NotificationsApi>,
    pub notifications_frame: Frame,

    // Contador do sino da barra superior, confirmado pelo servidor
    pub unread_badge: u32,
}

impl DashboardScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            dashboard_api: state.dashboard_api.clone(),
            stats: None,
            stats_frame: Frame::default(),
            properties: CollectionStore::new(state.properties_api.clone()),
            properties_frame: Frame::default(),
            customers: CollectionStore::new(state.customers_api.clone()),
            customers_frame: Frame::default(),
            notifications: CollectionStore::new(state.notifications_api.clone()),
            notifications_frame: Frame::default(),
            unread_badge: 0,
        }
    }

    pub async fn mount(&mut self) {
        self.stats_frame.begin_load();
        self.properties_frame.begin_load();
        self.customers_frame.begin_load();
        self.notifications_frame.begin_load();

        let notification_filter = NotificationFilter {
            limit: Some(NOTIFICATION_LIMIT),
            ..NotificationFilter::default()
        };

        // As listas de recentes só existem no painel do corretor
        if self.session.role() == Some(UserRole::Broker) {
            let property_filter = PropertyFilter::default();
            let customer_filter = CustomerFilter::default();
            let (stats, properties, customers, notifications) = tokio::join!(
                self.dashboard_api.stats(),
                self.properties.load(&property_filter),
                self.customers.load(&customer_filter),
                self.notifications.load(&notification_filter),
            );
            self.settle_stats(stats);
            self.properties_frame.finish_load(properties);
            self.customers_frame.finish_load(customers);
            self.notifications_frame.finish_load(notifications);
        } else {
            let (stats, notifications) = tokio::join!(
                self.dashboard_api.stats(),
                self.notifications.load(&notification_filter),
            );
            self.settle_stats(stats);
            self.properties_frame.finish_load(Ok(()));
            self.customers_frame.finish_load(Ok(()));
            self.notifications_frame.finish_load(notifications);
        }
    }

    fn settle_stats(&mut self, result: Result<DashboardStats, AppError>) {
        let outcome = result.map(|stats| {
            self.stats = Some(stats);
        });
        self.stats_frame.finish_load(outcome);
    }

    /// As coleções chegam do servidor em ordem "mais novo primeiro".
    pub fn recent_properties(&self) -> &[Property] {
        let items = self.properties.items();
        &items[..items.len().min(RECENT_LIMIT)]
    }

    pub fn recent_customers(&self) -> &[Customer] {
        let items = self.customers.items();
        &items[..items.len().min(RECENT_LIMIT)]
    }

    pub fn notifications(&self) -> &[crate::models::notification::Notification] {
        self.notifications.items()
    }

    /// Contagem local de não lidas, derivada da coleção carregada.
    pub fn unread_count(&self) -> usize {
        self.notifications
            .items()
            .iter()
            .filter(|n| !n.is_read)
            .count()
    }

    /// Atualiza o contador do sino com o valor do servidor.
    pub async fn refresh_unread_badge(&mut self) {
        let result = async {
            self.unread_badge = self.notifications.api().unread_count().await?;
            Ok(())
        }
        .await;
        self.notifications_frame.note_action(result);
    }

    pub async fn mark_notification_read(&mut self, id: Uuid) {
        let result = async {
            let updated = self.notifications.api().mark_read(id).await?;
            self.notifications.accept(updated);
            Ok(())
        }
        .await;
        self.notifications_frame.note_action(result);
    }

    /// Marca todas como lidas no servidor e recarrega a coleção para
    /// refletir o estado confirmado.
    pub async fn mark_all_notifications_read(&mut self) {
        let result = async {
            self.notifications.api().mark_all_read().await?;
            self.notifications
                .load(&NotificationFilter {
                    limit: Some(NOTIFICATION_LIMIT),
                    ..NotificationFilter::default()
                })
                .await
        }
        .await;
        self.notifications_frame.note_action(result);
    }
}
