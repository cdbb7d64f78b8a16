pub mod response;

pub mod lab_event;
pub mod unified_error_message;
pub mod value_list_format_metadata;
