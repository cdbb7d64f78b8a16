pub mod list_of_lab_events_response;
