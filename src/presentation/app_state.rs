// Application state for HTTP handlers
use crate::application::auth_service::AuthService;
use crate::application::dashboard_service::DashboardService;
use crate::application::page_service::PageService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub dashboard_service: DashboardService,
    pub page_service: PageService,
}
