//src/main.rs

use imobcrm::config::AppState;
use imobcrm::models::dashboard::DashboardStats;
use imobcrm::screens::DashboardScreen;

// Binário de demonstração: autentica (sessão restaurada do disco ou
// credenciais do ambiente), monta o painel e registra o resumo no log.
#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    if let Err(e) = run(&app_state).await {
        tracing::error!("🔥 Execução interrompida: {}", e);
        std::process::exit(1);
    }
}

async fn run(app_state: &AppState) -> anyhow::Result<()> {
    // 1. Sessão: tenta restaurar a persistida; senão, credenciais do .env
    let user = match app_state.auth_service.restore().await? {
        Some(user) => user,
        None => {
            let email = std::env::var("CRM_EMAIL")
                .expect("Sem sessão salva: defina CRM_EMAIL e CRM_PASSWORD");
            let password =
                std::env::var("CRM_PASSWORD").expect("CRM_PASSWORD deve ser definida");
            app_state.auth_service.login(&email, &password).await?
        }
    };

    tracing::info!("🚀 Conectado como {} ({:?})", user.full_name, user.role);

    // 2. Painel inicial: quatro cargas independentes
    let mut dashboard = DashboardScreen::new(app_state);
    dashboard.mount().await;
    dashboard.refresh_unread_badge().await;

    match &dashboard.stats {
        Some(DashboardStats::Broker(stats)) => {
            tracing::info!(
                "🏠 {} imóveis | {} clientes | {} negócios ativos | corretagem do mês {}",
                stats.total_properties,
                stats.total_customers,
                stats.active_deals,
                stats.monthly_brokerage,
            );
        }
        Some(DashboardStats::Builder(stats)) => {
            tracing::info!(
                "🏗️ {} empreendimentos | {}/{} lotes vendidos | receita do mês {}",
                stats.total_projects,
                stats.sold_plots,
                stats.total_plots,
                stats.monthly_revenue,
            );
        }
        None => tracing::warn!("Painel sem estatísticas ({:?})", dashboard.stats_frame.load),
    }

    tracing::info!(
        "📌 {} imóveis recentes, {} clientes recentes, {} notificações não lidas",
        dashboard.recent_properties().len(),
        dashboard.recent_customers().len(),
        dashboard.unread_badge,
    );

    Ok(())
}
