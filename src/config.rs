pub mod app_config;
pub mod export_config;
pub mod sheets_config;
