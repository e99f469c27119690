pub mod figure;
pub mod pagination;
pub mod query;
pub mod table;
pub mod toast;
