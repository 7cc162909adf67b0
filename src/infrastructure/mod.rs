// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod portal_client;
pub mod session_store;
