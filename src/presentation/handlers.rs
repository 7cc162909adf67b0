// HTTP request handlers
use crate::application::error::{ApiError, PortalError};
use crate::domain::fastboard::BoardFilter;
use crate::domain::layout::Screen;
use crate::presentation::app_state::AppState;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct BoardQuery {
    pub filter: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/", get(dashboard))
        .route("/dashboard", get(dashboard))
        .route("/fastboard", get(fastboard))
        .route("/reports", get(section_page))
        .route("/knowledge", get(section_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn login(State(state): State<Arc<AppState>>, Json(form): Json<LoginForm>) -> Response {
    match state.auth_service.login(&form.email, &form.password).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Response {
    match state.auth_service.logout() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// Partner dashboard; sends the browser to the login page when there is no usable session
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    let now = chrono::Local::now().naive_local();
    match state.dashboard_service.get_dashboard(now).await {
        Ok(view) => Json(view).into_response(),
        Err(PortalError::Unauthenticated | PortalError::SessionExpired(_)) => {
            Redirect::to("/login").into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn fastboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BoardQuery>,
) -> Response {
    let filter = match query.filter.as_deref().map(str::parse::<BoardFilter>) {
        None => BoardFilter::default(),
        Some(Ok(filter)) => filter,
        Some(Err(message)) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response();
        }
    };

    match state.page_service.get_board(filter) {
        Ok(view) => Json(view).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn section_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match Screen::from_path(uri.path()).and_then(|screen| state.page_service.get_page(screen)) {
        Some(view) => Json(view).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn error_response(error: PortalError) -> Response {
    let status = match &error {
        PortalError::Unauthenticated
        | PortalError::SessionExpired(_)
        | PortalError::Api(ApiError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        PortalError::Api(_) => StatusCode::BAD_GATEWAY,
        PortalError::Session(_) | PortalError::Geometry(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("Request failed: {}", error);
    }

    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
