use std::net::SocketAddr;
use anyhow::Context;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::Method;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::ServeConfig;
use crate::controllers::{health, transactions};
use crate::services::ledger_service::LedgerService;
use crate::services::register_service::ServiceRegister;

pub fn app(services: ServiceRegister) -> Router {
    Router::new()
        .merge(health::router())
        .merge(transactions::router())
        .with_state(services) // Inject services into handlers as state
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::OPTIONS,
                    ])
                    .allow_headers([AUTHORIZATION, ACCEPT, COOKIE, CONTENT_TYPE])
                    .allow_origin(cors::Any)
            ),
        )
}

pub async fn serve(config: ServeConfig, ledger_service: LedgerService) -> anyhow::Result<()> {
    let services = ServiceRegister::new(ledger_service);

    info!("Starting server at port {}", config.port);

    axum::Server::bind(&SocketAddr::from(([0, 0, 0, 0], config.port)))
        .serve(app(services).into_make_service())
        .await
        .context("Error starting server")
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use serde_json::{json, Value};
    use crate::charts::JsonChartWidget;
    use crate::models::chart::ChartConfig;
    use crate::repositories::transaction_repository::TransactionRepository;
    use crate::services::chart_loader::ChartLoader;
    use super::*;

    async fn spawn_app() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let services = ServiceRegister::new(LedgerService::new());
        tokio::spawn(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app(services).into_make_service())
                .await
                .unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let url = spawn_app().await;
        let res = reqwest::get(format!("{}/health", url)).await.unwrap();
        assert_eq!(res.status(), 200);
    }

    #[tokio::test]
    async fn deposits_and_withdrawals_show_up_in_last20() {
        let url = spawn_app().await;
        let client = reqwest::Client::new();

        let res = client
            .post(format!("{}/api/transactions/deposit", url))
            .json(&json!({"amount": 1500}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        let created: Value = res.json().await.unwrap();
        assert_eq!(created["idTransaction"], 1);
        assert_eq!(created["balanceAfter"], 1500);

        client
            .post(format!("{}/api/transactions/withdraw", url))
            .json(&json!({"amount": 200, "description": "Change"}))
            .send()
            .await
            .unwrap();

        let last20: Value = reqwest::get(format!("{}/api/transactions/last20", url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            last20,
            json!([
                {"idTransaction": 1, "balanceAfter": 1500},
                {"idTransaction": 2, "balanceAfter": 1300}
            ])
        );

        let balance: Value = reqwest::get(format!("{}/api/transactions/balance", url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(balance, json!({"balance": 1300}));
    }

    #[tokio::test]
    async fn ledger_errors_map_to_statuses() {
        let url = spawn_app().await;
        let client = reqwest::Client::new();

        let res = client
            .post(format!("{}/api/transactions/deposit", url))
            .json(&json!({"amount": 0}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "error");

        let res = client
            .post(format!("{}/api/transactions/withdraw", url))
            .json(&json!({"amount": 50}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 409);
    }

    #[tokio::test]
    async fn last20_serves_integer_balances() {
        let url = spawn_app().await;
        reqwest::Client::new()
            .post(format!("{}/api/transactions/deposit", url))
            .json(&json!({"amount": 1500}))
            .send()
            .await
            .unwrap();

        let body = reqwest::get(format!("{}/api/transactions/last20", url))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, r#"[{"idTransaction":1,"balanceAfter":1500}]"#);
    }

    #[tokio::test]
    async fn show_and_delete_reverse_a_transaction() {
        let url = spawn_app().await;
        let client = reqwest::Client::new();
        for amount in [1000, 400] {
            client
                .post(format!("{}/api/transactions/deposit", url))
                .json(&json!({"amount": amount}))
                .send()
                .await
                .unwrap();
        }

        let res = client
            .post(format!("{}/api/transactions/delete/2", url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        let reversal: Value = res.json().await.unwrap();
        assert_eq!(reversal["idTransaction"], 3);
        assert_eq!(reversal["amount"], -400);
        assert_eq!(reversal["balanceAfter"], 1000);

        let shown: Value = reqwest::get(format!("{}/api/transactions/show/2", url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(shown["deleted"], true);

        let res = client
            .post(format!("{}/api/transactions/delete/2", url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 409);

        let res = reqwest::get(format!("{}/api/transactions/show/42", url)).await.unwrap();
        assert_eq!(res.status(), 404);
    }

    #[tokio::test]
    async fn overflowing_deposit_is_a_bad_request() {
        let url = spawn_app().await;
        let client = reqwest::Client::new();
        for amount in [i64::MAX, 1] {
            let res = client
                .post(format!("{}/api/transactions/deposit", url))
                .json(&json!({"amount": amount}))
                .send()
                .await
                .unwrap();
            let expected: u16 = if amount == 1 { 400 } else { 200 };
            assert_eq!(res.status(), expected);
        }
    }

    #[tokio::test]
    async fn chart_renders_from_a_live_ledger() {
        let url = spawn_app().await;
        let client = reqwest::Client::new();
        for amount in [500, 250, 1000] {
            client
                .post(format!("{}/api/transactions/deposit", url))
                .json(&json!({"amount": amount}))
                .send()
                .await
                .unwrap();
        }

        let dir = std::env::temp_dir().join(format!("balance-chart-live-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let loader = ChartLoader::new(
            TransactionRepository::new(url),
            JsonChartWidget::new(dir.clone()),
        );

        loader.load_data_and_create_chart().await;

        let written = std::fs::read_to_string(dir.join("AreaChartBalanceBefore.json")).unwrap();
        let config: ChartConfig = serde_json::from_str(&written).unwrap();
        assert_eq!(config.labels(), ["1", "2", "3"]);
        assert_eq!(config.values(), [500.0, 750.0, 1750.0]);
        std::fs::remove_dir_all(dir).ok();
    }
}
