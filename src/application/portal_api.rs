// Portal API trait - the backend the dashboard reads from
use crate::application::error::ApiError;
use crate::domain::portal::{
    AiTicket, FranchiseSummary, KpiSummary, UserProfile, WeeklyChartPoint,
};
use async_trait::async_trait;

#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    async fn fetch_kpis(&self, token: &str) -> Result<KpiSummary, ApiError>;

    async fn fetch_ai_tickets(&self, token: &str) -> Result<Vec<AiTicket>, ApiError>;

    async fn fetch_franchise_summary(&self, token: &str) -> Result<FranchiseSummary, ApiError>;

    /// Last seven days, oldest first
    async fn fetch_weekly_chart(&self, token: &str) -> Result<Vec<WeeklyChartPoint>, ApiError>;

    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile, ApiError>;
}
