pub mod app_state;
pub mod results_state;
