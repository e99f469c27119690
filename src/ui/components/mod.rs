pub mod content_area;
pub mod dynamic_table;
pub mod excel_export;
pub mod figure;
pub mod header;
pub mod results_content;
pub mod search_form;
pub mod summary;
