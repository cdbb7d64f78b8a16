pub mod config;
pub mod lab_api;
