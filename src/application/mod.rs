// Application layer - Use cases over the portal API and session
pub mod auth_service;
pub mod dashboard_service;
pub mod error;
#[cfg(test)]
pub mod fake_api;
pub mod page_service;
pub mod portal_api;
pub mod session;
