// src/config.rs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use std::env;

use crate::api::{
    ApiClient, AuthApi, CustomersApi, DashboardApi, DealsApi, EventsApi, NotificationsApi,
    PropertiesApi, ProjectsApi,
};
use crate::services::auth::AuthService;
use crate::session::Session;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_FILE: &str = ".imobcrm_session.json";

// Configuração lida do ambiente (.env em desenvolvimento)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // Base da API, já incluindo o prefixo /api
    pub base_url: String,
    pub timeout: Duration,
    pub session_file: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("API_BASE_URL").expect("API_BASE_URL deve ser definida");
        let timeout_secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let session_file = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
    pub auth_service: AuthService,

    pub properties_api: PropertiesApi,
    pub customers_api: CustomersApi,
    pub deals_api: DealsApi,
    pub projects_api: ProjectsApi,
    pub events_api: EventsApi,
    pub notifications_api: NotificationsApi,
    pub dashboard_api: DashboardApi,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env();
        Self::with_config(config)
    }

    /// Monta o gráfico de dependências: sessão → cliente HTTP → APIs por
    /// recurso → serviço de autenticação.
    pub fn with_config(config: ClientConfig) -> anyhow::Result<Self> {
        let session = Arc::new(Session::load(config.session_file.clone()));

        let client = Arc::new(ApiClient::new(
            config.base_url.clone(),
            config.timeout,
            session.clone(),
        )?);
        tracing::info!("✅ Cliente da API configurado para {}", config.base_url);

        let auth_service = AuthService::new(AuthApi::new(client.clone()), session.clone());

        Ok(Self {
            session,
            auth_service,
            properties_api: PropertiesApi::new(client.clone()),
            customers_api: CustomersApi::new(client.clone()),
            deals_api: DealsApi::new(client.clone()),
            projects_api: ProjectsApi::new(client.clone()),
            events_api: EventsApi::new(client.clone()),
            notifications_api: NotificationsApi::new(client.clone()),
            dashboard_api: DashboardApi::new(client),
        })
    }
}
