pub mod commands;
pub mod dimension;
pub mod sort_order;
pub mod chart_type;
pub mod category;
pub mod job_status;
