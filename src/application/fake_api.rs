// In-memory PortalApi used by service and handler tests
use crate::application::error::ApiError;
use crate::application::portal_api::PortalApi;
use crate::domain::portal::{
    AiTicket, FranchiseSummary, KpiSummary, TicketSeverity, TicketStatus, UserProfile,
    WeeklyChartPoint,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct FakePortalApi {
    fail_path: Option<&'static str>,
    pub fetches: AtomicUsize,
}

impl FakePortalApi {
    pub const TOKEN: &'static str = "fake-token";
    pub const PASSWORD: &'static str = "demo1234";

    pub fn healthy() -> Self {
        Self {
            fail_path: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Every call to `path` answers 401.
    pub fn failing(path: &'static str) -> Self {
        Self {
            fail_path: Some(path),
            fetches: AtomicUsize::new(0),
        }
    }

    fn check(&self, path: &'static str, token: &str) -> Result<(), ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if token != Self::TOKEN || self.fail_path == Some(path) {
            return Err(ApiError::Status {
                status: 401,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PortalApi for FakePortalApi {
    async fn login(&self, _email: &str, password: &str) -> Result<String, ApiError> {
        if password == Self::PASSWORD {
            Ok(Self::TOKEN.to_string())
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }

    async fn fetch_kpis(&self, token: &str) -> Result<KpiSummary, ApiError> {
        self.check("/dashboard/kpis", token)?;
        Ok(KpiSummary {
            revenue_today: 184500.0,
            revenue_plan_percent: 12.0,
            labor_cost_percent: 29.5,
            food_cost_percent: 31.2,
            profit_forecast: 960000.0,
            lfl_percent: 4.2,
        })
    }

    async fn fetch_ai_tickets(&self, token: &str) -> Result<Vec<AiTicket>, ApiError> {
        self.check("/dashboard/ai-tickets", token)?;
        Ok(vec![AiTicket {
            id: 1,
            severity: TicketSeverity::Critical,
            status: TicketStatus::Open,
            title: "ФОТ выше нормы".to_string(),
            body: "Сократите смены в будни.".to_string(),
            action_label: "Открыть график".to_string(),
        }])
    }

    async fn fetch_franchise_summary(&self, token: &str) -> Result<FranchiseSummary, ApiError> {
        self.check("/franchise/summary", token)?;
        Ok(FranchiseSummary {
            royalty_due: 52000.0,
            marketing_due: 18000.0,
            supplies_due: 118400.0,
            qsc_index: 92.5,
        })
    }

    async fn fetch_weekly_chart(&self, token: &str) -> Result<Vec<WeeklyChartPoint>, ApiError> {
        self.check("/charts/weekly", token)?;
        Ok([(6, 100.0, 10), (7, 200.0, 20), (8, 150.0, 15)]
            .into_iter()
            .filter_map(|(d, revenue, checks)| {
                NaiveDate::from_ymd_opt(2024, 5, d).map(|day| WeeklyChartPoint {
                    day,
                    revenue,
                    checks,
                })
            })
            .collect())
    }

    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.check("/auth/me", token)?;
        Ok(UserProfile {
            id: 1,
            full_name: "Demo Partner".to_string(),
            partner: None,
            outlet: None,
        })
    }
}
