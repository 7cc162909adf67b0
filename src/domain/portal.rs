// Portal API records, as returned by the backend
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KpiSummary {
    pub revenue_today: f64,
    pub revenue_plan_percent: f64,
    pub labor_cost_percent: f64,
    pub food_cost_percent: f64,
    pub profit_forecast: f64,
    pub lfl_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketSeverity {
    Critical,
    Warning,
    Advice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Done,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AiTicket {
    pub id: i64,
    pub severity: TicketSeverity,
    pub status: TicketStatus,
    pub title: String,
    pub body: String,
    pub action_label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FranchiseSummary {
    pub royalty_due: f64,
    pub marketing_due: f64,
    pub supplies_due: f64,
    pub qsc_index: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyChartPoint {
    pub day: NaiveDate,
    pub revenue: f64,
    pub checks: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartnerInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutletInfo {
    pub id: i64,
    pub external_id: Option<String>,
}

/// Current viewer. Fields the portal never shows, such as email, are skipped on decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    pub partner: Option<PartnerInfo>,
    pub outlet: Option<OutletInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Everything the dashboard screen needs, fetched in one pass.
#[derive(Debug, Clone)]
pub struct PortalSnapshot {
    pub kpis: KpiSummary,
    pub tickets: Vec<AiTicket>,
    pub franchise: FranchiseSummary,
    pub weekly: Vec<WeeklyChartPoint>,
    pub user: UserProfile,
}
