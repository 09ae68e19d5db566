pub mod auth;
pub mod http_client;
pub mod into_grid;
pub mod spreadsheet_manager;
pub mod spreadsheet_read;
