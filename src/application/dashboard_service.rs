// Dashboard service - Use case for building the partner dashboard
use crate::application::error::{ApiError, PortalError};
use crate::application::portal_api::PortalApi;
use crate::application::session::SessionStore;
use crate::domain::dashboard::DashboardView;
use crate::domain::portal::PortalSnapshot;
use crate::domain::watermark::Watermark;
use chrono::NaiveDateTime;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn PortalApi>,
    session: Arc<dyn SessionStore>,
    watermark_enabled: bool,
}

impl DashboardService {
    pub fn new(
        api: Arc<dyn PortalApi>,
        session: Arc<dyn SessionStore>,
        watermark_enabled: bool,
    ) -> Self {
        Self {
            api,
            session,
            watermark_enabled,
        }
    }

    pub async fn get_dashboard(&self, now: NaiveDateTime) -> Result<DashboardView, PortalError> {
        let token = self.session.get()?.ok_or(PortalError::Unauthenticated)?;

        let snapshot = match self.fetch_snapshot(&token).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // Any failed fetch invalidates the session; the user signs in again.
                tracing::warn!("Dashboard fetch failed, clearing session: {}", e);
                self.session.clear()?;
                return Err(PortalError::SessionExpired(e));
            }
        };

        tracing::debug!(
            "Fetched dashboard data: {} tickets, {} weekly points",
            snapshot.tickets.len(),
            snapshot.weekly.len()
        );

        let watermark = self
            .watermark_enabled
            .then(|| Watermark::for_user(&snapshot.user, now));

        Ok(DashboardView::assemble(snapshot, watermark)?)
    }

    async fn fetch_snapshot(&self, token: &str) -> Result<PortalSnapshot, ApiError> {
        let (kpis, tickets, franchise, weekly, user) = tokio::try_join!(
            self.api.fetch_kpis(token),
            self.api.fetch_ai_tickets(token),
            self.api.fetch_franchise_summary(token),
            self.api.fetch_weekly_chart(token),
            self.api.fetch_current_user(token),
        )?;

        Ok(PortalSnapshot {
            kpis,
            tickets,
            franchise,
            weekly,
            user,
        })
    }
}
