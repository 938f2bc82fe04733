pub mod analytics_service;
pub mod auth;
pub mod charts;
pub mod formatter;
pub mod list_service;
pub mod storage_service;

pub use analytics_service::AnalyticsService;
pub use auth::AuthService;
pub use storage_service::StorageService;
