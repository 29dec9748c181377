pub mod get_latest_run;
pub mod submit_run;
