// Auth service - Use case for signing in and out
use crate::application::error::PortalError;
use crate::application::portal_api::PortalApi;
use crate::application::session::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn PortalApi>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<dyn PortalApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), PortalError> {
        let token = self.api.login(email, password).await?;
        self.session.set(&token)?;
        tracing::info!("Signed in as {}", email);
        Ok(())
    }

    pub fn logout(&self) -> Result<(), PortalError> {
        self.session.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApiError;
    use crate::application::fake_api::FakePortalApi;
    use crate::application::session::MemorySessionStore;

    #[tokio::test]
    async fn test_login_stores_token() {
        let session = Arc::new(MemorySessionStore::new());
        let service = AuthService::new(Arc::new(FakePortalApi::healthy()), session.clone());

        service.login("demo@portal.local", "demo1234").await.unwrap();
        assert_eq!(session.get().unwrap().as_deref(), Some(FakePortalApi::TOKEN));

        service.logout().unwrap();
        assert_eq!(session.get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let session = Arc::new(MemorySessionStore::new());
        session.set("previous").unwrap();
        let service = AuthService::new(Arc::new(FakePortalApi::healthy()), session.clone());

        let err = service.login("demo@portal.local", "wrong").await.unwrap_err();
        assert!(matches!(err, PortalError::Api(ApiError::InvalidCredentials)));
        assert_eq!(session.get().unwrap().as_deref(), Some("previous"));
    }
}
