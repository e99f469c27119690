pub mod query_api;
