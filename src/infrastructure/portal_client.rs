// Portal backend client over HTTP/JSON
use crate::application::error::ApiError;
use crate::application::portal_api::PortalApi;
use crate::domain::portal::{
    AccessToken, AiTicket, FranchiseSummary, KpiSummary, UserProfile, WeeklyChartPoint,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: reqwest::Client,
}

impl PortalClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", path);

        let response = self
            .http
            .get(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Portal request {} failed with status {}", path, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: LOGIN_PATH.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_client_error() {
            return Err(ApiError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: LOGIN_PATH.to_string(),
            });
        }

        let token = response
            .json::<AccessToken>()
            .await
            .map_err(|source| ApiError::Decode {
                path: LOGIN_PATH.to_string(),
                source,
            })?;

        tracing::debug!("Received {} token", token.token_type);
        Ok(token.access_token)
    }

    async fn fetch_kpis(&self, token: &str) -> Result<KpiSummary, ApiError> {
        self.get_json("/dashboard/kpis", token).await
    }

    async fn fetch_ai_tickets(&self, token: &str) -> Result<Vec<AiTicket>, ApiError> {
        self.get_json("/dashboard/ai-tickets", token).await
    }

    async fn fetch_franchise_summary(&self, token: &str) -> Result<FranchiseSummary, ApiError> {
        self.get_json("/franchise/summary", token).await
    }

    async fn fetch_weekly_chart(&self, token: &str) -> Result<Vec<WeeklyChartPoint>, ApiError> {
        self.get_json("/charts/weekly", token).await
    }

    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.get_json("/auth/me", token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Form, Json, Router,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::{get, post},
    };
    use serde_json::json;
    use std::collections::HashMap;

    const GOOD_TOKEN: &str = "good-token";

    async fn login(Form(form): Form<HashMap<String, String>>) -> Response {
        if form.get("username").map(String::as_str) == Some("demo@portal.local")
            && form.get("password").map(String::as_str) == Some("demo1234")
        {
            Json(json!({ "access_token": GOOD_TOKEN, "token_type": "bearer" })).into_response()
        } else {
            (StatusCode::BAD_REQUEST, Json(json!({ "detail": "Incorrect email or password" })))
                .into_response()
        }
    }

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {}", GOOD_TOKEN))
            .unwrap_or(false)
    }

    async fn kpis(headers: HeaderMap) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!({
            "revenue_today": 184500.0,
            "revenue_plan_percent": 12.0,
            "labor_cost_percent": 29.5,
            "food_cost_percent": 31.2,
            "profit_forecast": 960000.0,
            "lfl_percent": 4.2
        }))
        .into_response()
    }

    async fn weekly(headers: HeaderMap) -> Response {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        Json(json!([
            { "day": "2024-05-06", "revenue": 100.0, "checks": 10 },
            { "day": "2024-05-07", "revenue": 200.0, "checks": 20 }
        ]))
        .into_response()
    }

    async fn broken() -> &'static str {
        "not json"
    }

    async fn spawn_backend() -> PortalClient {
        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/dashboard/kpis", get(kpis))
            .route("/charts/weekly", get(weekly))
            .route("/franchise/summary", get(broken));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        PortalClient::new(&format!("http://{}/", addr), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = PortalClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url("/auth/me"), "http://localhost:8000/auth/me");
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let client = spawn_backend().await;
        let token = client.login("demo@portal.local", "demo1234").await.unwrap();
        assert_eq!(token, GOOD_TOKEN);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let client = spawn_backend().await;
        let err = client.login("demo@portal.local", "nope").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_fetch_with_bearer_token() {
        let client = spawn_backend().await;

        let kpis = client.fetch_kpis(GOOD_TOKEN).await.unwrap();
        assert_eq!(kpis.labor_cost_percent, 29.5);

        let weekly = client.fetch_weekly_chart(GOOD_TOKEN).await.unwrap();
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[1].checks, 20);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let client = spawn_backend().await;

        let err = client.fetch_kpis("stale").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 401, .. }));

        let err = client.fetch_current_user(GOOD_TOKEN).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = spawn_backend().await;
        let err = client.fetch_franchise_summary(GOOD_TOKEN).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
