use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::app::App;

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub web_app_url: String,
    pub uptime_seconds: u64,
}

#[tracing::instrument(skip_all)]
async fn health_handler(State(app): State<&'static App>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        web_app_url: app.config().web_app_url().to_string(),
        uptime_seconds: app.started_at().elapsed().as_secs(),
    })
}

async fn root_handler() -> &'static str {
    "TeleMarket bot is running"
}

pub fn router(app: &'static App) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(app)
}

pub async fn work(app: &'static App) {
    let address = app.config().server_http_address();

    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(err = ?err, address, "Cannot bind health server. Continuing without it");

            return;
        },
    };

    tracing::info!(address, "Health server listening");

    if let Err(err) = axum::serve(listener, router(app))
        .with_graceful_shutdown(crate::utils::ctrl_c())
        .await
    {
        tracing::error!(err = ?err, "Health server failed");
    }
}

#[cfg(test)]
mod tests {
    use teloxide::Bot;

    use super::*;
    use crate::app::Config;

    fn app() -> &'static App {
        let config = Config::new(Some("https://market.example.com"), None, None);

        Box::leak(Box::new(App::new(Bot::new("1234567890:test-token"), config)))
    }

    #[tokio::test]
    async fn health_reports_web_app_url() {
        let Json(status) = health_handler(State(app())).await;

        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "telemarket");
        assert_eq!(status.web_app_url, "https://market.example.com/");
        assert!(status.uptime_seconds < 60);
    }

    #[tokio::test]
    async fn health_serializes_as_json() {
        let Json(status) = health_handler(State(app())).await;

        let value = serde_json::to_value(&status).unwrap();

        assert_eq!(value["status"], "ok");
        assert!(value["uptime_seconds"].is_u64());
    }

    #[tokio::test]
    async fn root_names_the_service() {
        assert_eq!(root_handler().await, "TeleMarket bot is running");
    }
}
