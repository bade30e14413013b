// tests/auth_flow.rs
//
// Fluxo de autenticação e a montagem do painel com requisições
// independentes resolvendo separadamente.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;
use uuid::Uuid;

use imobcrm::common::error::AppError;
use imobcrm::config::{AppState, ClientConfig};
use imobcrm::models::auth::UserRole;
use imobcrm::screens::DashboardScreen;

const TIMEOUT: Duration = Duration::from_secs(2);

fn state_for(server: &mockito::ServerGuard) -> AppState {
    let config = ClientConfig {
        base_url: server.url(),
        timeout: TIMEOUT,
        session_file: std::env::temp_dir().join(format!("imobcrm-test-{}.json", Uuid::new_v4())),
    };
    AppState::with_config(config).unwrap()
}

fn user_json(role: &str) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "email": "rajesh@realestate.in",
        "full_name": "Rajesh Kumar",
        "phone": "+91 98765 00001",
        "role": role,
        "is_active": true,
        "created_at": "2025-06-01T08:00:00Z"
    })
}

#[tokio::test]
async fn test_login_persists_token_and_user() {
    let mut server = mockito::Server::new_async().await;
    let state = state_for(&server);

    let _login = server
        .mock("POST", "/auth/login")
        .with_body(
            json!({
                "access_token": "tok-novo",
                "token_type": "bearer",
                "user": user_json("broker")
            })
            .to_string(),
        )
        .create_async()
        .await;

    let user = state
        .auth_service
        .login("rajesh@realestate.in", "segredo1")
        .await
        .unwrap();

    assert_eq!(user.full_name, "Rajesh Kumar");
    assert_eq!(state.session.token().as_deref(), Some("tok-novo"));
    assert_eq!(state.session.role(), Some(UserRole::Broker));

    state.session.clear();
}

#[tokio::test]
async fn test_login_rejects_invalid_payload_before_any_request() {
    let server = mockito::Server::new_async().await;
    let state = state_for(&server);

    // E-mail inválido: falha na validação local, nenhuma requisição sai
    let err = state
        .auth_service
        .login("nao-e-email", "segredo1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_invalid_credentials_surface_as_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    let state = state_for(&server);

    let _login = server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(json!({"detail": "Incorrect email or password"}).to_string())
        .create_async()
        .await;

    let err = state
        .auth_service
        .login("rajesh@realestate.in", "senha-errada")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
    assert!(state.session.token().is_none());
}

#[tokio::test]
async fn test_restore_revalidates_against_me() {
    let mut server = mockito::Server::new_async().await;
    let state = state_for(&server);

    // Sem sessão salva, restore não faz requisição nenhuma
    assert!(state.auth_service.restore().await.unwrap().is_none());

    state
        .session
        .store(
            "tok-salvo".to_string(),
            serde_json::from_value(user_json("broker")).unwrap(),
        )
        .unwrap();

    let me = server
        .mock("GET", "/auth/me")
        .match_header("authorization", "Bearer tok-salvo")
        .with_body(user_json("broker").to_string())
        .expect(1)
        .create_async()
        .await;

    let user = state.auth_service.restore().await.unwrap().unwrap();
    assert_eq!(user.email, "rajesh@realestate.in");
    me.assert_async().await;

    state.session.clear();
}

// As quatro cargas do painel são independentes: a falha das estatísticas
// não impede notificações e recentes de chegarem ao estado Loaded.
#[tokio::test]
async fn test_dashboard_requests_resolve_separately() {
    let mut server = mockito::Server::new_async().await;
    let state = state_for(&server);

    state
        .session
        .store(
            "tok-abc".to_string(),
            serde_json::from_value(user_json("broker")).unwrap(),
        )
        .unwrap();

    let _stats = server
        .mock("GET", "/dashboard/stats")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    let _properties = server
        .mock("GET", "/properties")
        .match_query(Matcher::Any)
        .with_body(json!([]).to_string())
        .create_async()
        .await;
    let _customers = server
        .mock("GET", "/customers")
        .match_query(Matcher::Any)
        .with_body(json!([]).to_string())
        .create_async()
        .await;
    let _notifications = server
        .mock("GET", "/notifications")
        .match_query(Matcher::Any)
        .with_body(
            json!([{
                "id": Uuid::new_v4(),
                "user_id": Uuid::new_v4(),
                "title": "Pagamento pendente",
                "message": "Parcela do lote A-12 vence hoje",
                "type": "payment",
                "is_read": false,
                "related_id": null,
                "created_at": "2025-07-03T12:00:00Z",
                "updated_at": "2025-07-03T12:00:00Z"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let mut dashboard = DashboardScreen::new(&state);
    dashboard.mount().await;

    assert!(dashboard.stats_frame.load.is_failed());
    assert!(dashboard.stats.is_none());

    assert!(dashboard.properties_frame.load.is_loaded());
    assert!(dashboard.customers_frame.load.is_loaded());
    assert!(dashboard.notifications_frame.load.is_loaded());
    assert_eq!(dashboard.unread_count(), 1);

    state.session.clear();
}
