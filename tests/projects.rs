// tests/projects.rs
//
// Lado construtor: mutações aninhadas de lote com reconciliação por
// rebusca do empreendimento.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;
use uuid::Uuid;

use imobcrm::api::ProjectsApi;
use imobcrm::config::{AppState, ClientConfig};
use imobcrm::models::project::{PlotBuyer, PlotDraft, PlotStatus};
use imobcrm::models::property::Facing;
use imobcrm::screens::ProjectsScreen;

const TIMEOUT: Duration = Duration::from_secs(2);

fn state_for(server: &mockito::ServerGuard) -> AppState {
    let config = ClientConfig {
        base_url: server.url(),
        timeout: TIMEOUT,
        session_file: std::env::temp_dir().join(format!("imobcrm-test-{}.json", Uuid::new_v4())),
    };
    AppState::with_config(config).unwrap()
}

fn builder_json() -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "email": "vikram@builders.in",
        "full_name": "Vikram Singh",
        "phone": null,
        "role": "builder",
        "is_active": true,
        "created_at": "2025-06-01T08:00:00Z"
    })
}

fn plot_json(number: &str, status: &str) -> serde_json::Value {
    let buyer = if status == "Available" {
        serde_json::Value::Null
    } else {
        json!({
            "name": "Ramesh Patil",
            "phone": "+91 98220 11223",
            "govt_id": "ABCDE1234F",
            "broker": null
        })
    };
    json!({
        "plot_number": number,
        "size": "2400 sq ft",
        "price": "₹80 Lakh",
        "facing": "East",
        "status": status,
        "has_garden": false,
        "is_corner": false,
        "is_hot": false,
        "buyer": buyer,
        "payments": []
    })
}

fn project_json(id: Uuid, plots: Vec<serde_json::Value>) -> serde_json::Value {
    let available = plots
        .iter()
        .filter(|p| p["status"] == "Available")
        .count();
    let sold = plots.iter().filter(|p| p["status"] == "Sold").count();
    let reserved = plots.iter().filter(|p| p["status"] == "Reserved").count();
    json!({
        "id": id,
        "user_id": Uuid::new_v4(),
        "name": "Green Valley Plots",
        "area": "Wagholi",
        "total_plots": plots.len(),
        "sold_plots": sold,
        "available_plots": available,
        "reserved_plots": reserved,
        "price_range": "₹40-80 Lakh",
        "layout_approval": "Approved",
        "completion_date": "2026-12-31T00:00:00Z",
        "plots": plots,
        "created_at": "2025-05-01T08:00:00Z",
        "updated_at": "2025-07-01T08:00:00Z"
    })
}

fn plot_draft(number: &str, status: PlotStatus) -> PlotDraft {
    let buyer = match status {
        PlotStatus::Available => None,
        _ => Some(PlotBuyer {
            name: "Ramesh Patil".to_string(),
            phone: "+91 98220 11223".to_string(),
            govt_id: "ABCDE1234F".to_string(),
            broker: None,
        }),
    };
    PlotDraft {
        plot_number: number.to_string(),
        size: "2400 sq ft".to_string(),
        price: "₹80 Lakh".to_string(),
        facing: Facing::East,
        status,
        has_garden: false,
        is_corner: false,
        is_hot: false,
        buyer,
        payments: vec![],
    }
}

#[tokio::test]
async fn test_add_plot_reconciles_by_refetching_project() {
    let mut server = mockito::Server::new_async().await;
    let state = state_for(&server);
    state
        .session
        .store(
            "tok-builder".to_string(),
            serde_json::from_value(builder_json()).unwrap(),
        )
        .unwrap();

    let project_id = Uuid::new_v4();
    let _list = server
        .mock("GET", "/projects")
        .match_query(Matcher::Any)
        .with_body(json!([project_json(project_id, vec![plot_json("A-1", "Sold")])]).to_string())
        .create_async()
        .await;

    let mut screen = ProjectsScreen::new(&state);
    screen.mount().await;
    assert!(screen.frame.load.is_loaded());
    screen.select(project_id);
    assert_eq!(screen.plots(None).len(), 1);

    let _add = server
        .mock("POST", format!("/projects/{}/plots", project_id).as_str())
        .with_body(
            json!({"message": "Plot added successfully", "plot": plot_json("A-2", "Available")})
                .to_string(),
        )
        .create_async()
        .await;
    // A confirmação é parcial; a tela rebusca o projeto com os contadores
    let refreshed = server
        .mock("GET", format!("/projects/{}", project_id).as_str())
        .with_body(
            project_json(
                project_id,
                vec![plot_json("A-1", "Sold"), plot_json("A-2", "Available")],
            )
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    screen.add_plot(project_id, plot_draft("A-2", PlotStatus::Available)).await;

    assert!(screen.frame.alert.is_none());
    let project = screen.selected_project().unwrap();
    assert_eq!(project.total_plots, 2);
    assert_eq!(project.available_plots, 1);
    assert_eq!(screen.plots(Some(PlotStatus::Available)).len(), 1);
    refreshed.assert_async().await;

    state.session.clear();
}

#[tokio::test]
async fn test_invalid_plot_draft_never_reaches_server() {
    let mut server = mockito::Server::new_async().await;
    let state = state_for(&server);
    state
        .session
        .store(
            "tok-builder".to_string(),
            serde_json::from_value(builder_json()).unwrap(),
        )
        .unwrap();

    let project_id = Uuid::new_v4();
    let _list = server
        .mock("GET", "/projects")
        .match_query(Matcher::Any)
        .with_body(json!([project_json(project_id, vec![])]).to_string())
        .create_async()
        .await;
    let never_called = server
        .mock("POST", format!("/projects/{}/plots", project_id).as_str())
        .expect(0)
        .create_async()
        .await;

    let mut screen = ProjectsScreen::new(&state);
    screen.mount().await;

    // Lote vendido sem comprador viola o invariante e para na validação
    let mut draft = plot_draft("B-1", PlotStatus::Sold);
    draft.buyer = None;
    screen.add_plot(project_id, draft).await;

    assert!(screen.frame.alert.is_some());
    never_called.assert_async().await;

    state.session.clear();
}

#[tokio::test]
async fn test_plots_endpoint_filters_by_status() {
    let mut server = mockito::Server::new_async().await;
    let state = state_for(&server);

    let project_id = Uuid::new_v4();
    let filtered = server
        .mock("GET", format!("/projects/{}/plots", project_id).as_str())
        .match_query(Matcher::UrlEncoded("status".into(), "Available".into()))
        .with_body(json!([plot_json("A-2", "Available")]).to_string())
        .expect(1)
        .create_async()
        .await;

    let api = ProjectsApi::new(std::sync::Arc::new(
        imobcrm::api::ApiClient::new(server.url(), TIMEOUT, state.session.clone()).unwrap(),
    ));
    let plots = api.plots(project_id, Some("Available")).await.unwrap();

    assert_eq!(plots.len(), 1);
    assert_eq!(plots[0].plot_number, "A-2");
    filtered.assert_async().await;
}
