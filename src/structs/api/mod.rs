pub mod search_request;
pub mod search_response;
pub mod statistics_response;
pub mod job_status_response;
pub mod requery_request;
pub mod api_error_body;
