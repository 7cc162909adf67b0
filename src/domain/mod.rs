// Domain layer - Portal records, formatting and chart geometry
pub mod chart;
pub mod cost_structure;
pub mod dashboard;
pub mod fastboard;
pub mod layout;
pub mod metrics;
pub mod portal;
pub mod watermark;
