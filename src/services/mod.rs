pub mod aggregator;
pub mod classifier;
pub mod record_filter;
pub mod csv_exporter;
pub mod search_client;
pub mod requery_client;
