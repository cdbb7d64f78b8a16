pub mod convert;
pub mod lab_client;
pub mod models;
