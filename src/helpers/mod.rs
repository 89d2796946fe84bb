pub mod config_helper;
pub mod last_query;
pub mod table;
