pub mod report_service;
pub mod report_store;
pub mod report_summary;
