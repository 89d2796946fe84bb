pub mod cli;
pub mod respondent;
pub mod distribution;
pub mod statistic;
pub mod chart_item;
pub mod search_session;
pub mod chat_event;
pub mod api;
pub mod config;
