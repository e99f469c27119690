pub mod export_service;
pub mod query_service;
