pub mod config;
pub mod api_config;
pub mod export_config;
