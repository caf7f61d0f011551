pub mod data_store;
pub mod range_summarizer;
pub mod dashboard_service;
