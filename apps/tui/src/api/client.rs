use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiError, BlankspotBackend};
use crate::report::ReportPayload;
use crate::towers::{decode_towers, TowerRecord};

const USER_AGENT: &str = concat!("blankspot-tui/", env!("CARGO_PKG_VERSION"));

/// reqwest client for the blank spot REST API.
#[derive(Debug, Clone)]
pub struct BlankspotClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlankspotClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BlankspotBackend for BlankspotClient {
    async fn list_towers(&self) -> Result<Vec<TowerRecord>, ApiError> {
        let url = self.endpoint("/api/towers");
        tracing::debug!(%url, "fetching towers");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "tower listing failed");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        let towers = decode_towers(&value)
            .ok_or_else(|| ApiError::Decode("expected a JSON array of towers".to_string()))?;

        tracing::info!(count = towers.len(), "towers loaded");
        Ok(towers)
    }

    async fn submit_report(&self, payload: &ReportPayload) -> Result<(), ApiError> {
        let url = self.endpoint("/api/report");
        tracing::debug!(%url, lokasi = %payload.lokasi, "submitting report");

        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "report rejected");
            return Err(ApiError::Status(status.as_u16()));
        }

        tracing::info!("report accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportField, ReportForm};
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    async fn serve(router: Router) -> Result<SocketAddr, Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(addr)
    }

    fn client_for(addr: SocketAddr) -> Result<BlankspotClient, ApiError> {
        BlankspotClient::new(&format!("http://{addr}/"), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn lists_towers_from_server() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route(
            "/api/towers",
            get(|| async {
                Json(serde_json::json!([
                    {"id": 1, "operator": "XL", "status": "Aktif", "latitude": -8.6, "longitude": 116.1},
                    {"id": 2, "operator": "XL", "status": "Aktif", "latitude": "oops", "longitude": 116.1}
                ]))
            }),
        );
        let client = client_for(serve(router).await?)?;

        let towers = client.list_towers().await?;
        assert_eq!(towers.len(), 1);
        assert_eq!(towers[0].operator, "XL");
        Ok(())
    }

    #[tokio::test]
    async fn tower_listing_errors_are_typed() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new()
            .route(
                "/api/towers",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );
        let client = client_for(serve(router).await?)?;
        assert!(matches!(client.list_towers().await, Err(ApiError::Status(500))));

        let router = Router::new().route("/api/towers", get(|| async { "not json" }));
        let client = client_for(serve(router).await?)?;
        assert!(matches!(client.list_towers().await, Err(ApiError::Decode(_))));
        Ok(())
    }

    #[tokio::test]
    async fn posts_report_as_json() -> Result<(), Box<dyn std::error::Error>> {
        let received = Arc::new(Mutex::new(None::<serde_json::Value>));
        let router = Router::new()
            .route(
                "/api/report",
                post(
                    |State(received): State<Arc<Mutex<Option<serde_json::Value>>>>,
                     Json(body): Json<serde_json::Value>| async move {
                        if let Ok(mut slot) = received.lock() {
                            *slot = Some(body);
                        }
                        StatusCode::CREATED
                    },
                ),
            )
            .with_state(received.clone());
        let client = client_for(serve(router).await?)?;

        let mut form = ReportForm::new();
        form.set_field(ReportField::Nama, "Lalu Ahmad");
        form.set_field(ReportField::Operator, "Indosat");
        client.submit_report(&form.payload()).await?;

        let body = received
            .lock()
            .map_err(|_| "lock poisoned")?
            .clone()
            .ok_or("server saw no body")?;
        assert_eq!(body["nama"], "Lalu Ahmad");
        assert_eq!(body["operator"], "Indosat");
        assert_eq!(body["imgUrl"], "");
        Ok(())
    }

    #[tokio::test]
    async fn rejected_report_is_status_error() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route("/api/report", post(|| async { StatusCode::BAD_REQUEST }));
        let client = client_for(serve(router).await?)?;

        let result = client.submit_report(&ReportForm::new().payload()).await;
        assert!(matches!(result, Err(ApiError::Status(400))));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() -> Result<(), Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let client = client_for(addr)?;
        assert!(matches!(client.list_towers().await, Err(ApiError::Transport(_))));
        Ok(())
    }
}
