use crate::lab_api::convert::coerce_sequence;
use crate::lab_api::models::lab_event::LabEvent;
use crate::lab_api::models::unified_error_message::UnifiedErrorMessage;
use crate::lab_api::models::value_list_format_metadata::ValueListFormatMetadata;
use serde_json::Value;

/// Envelope returned by the "list lab events" endpoint. Every field is
/// optional; a field is set only when the wire object carried its key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListOfLabEventsResponse {
    pub metadata: Option<ValueListFormatMetadata>,
    pub data: Option<Vec<LabEvent>>,
    pub errors: Option<UnifiedErrorMessage>,
}

impl ListOfLabEventsResponse {
    /// Builds a fresh envelope from a decoded response body.
    pub fn construct_from_object(data: Option<&Value>) -> Self {
        Self::populate_from_object(data, Self::default())
    }

    /// Copies the recognized keys from `data` onto `obj` and returns it.
    /// Assignment is decided by key presence, not value truthiness: an
    /// explicit `null` still overwrites the field, while an absent key leaves
    /// whatever `obj` already held. Unrecognized keys are ignored.
    pub fn populate_from_object(data: Option<&Value>, mut obj: Self) -> Self {
        if let Some(map) = data.and_then(Value::as_object) {
            if map.contains_key("metadata") {
                obj.metadata = Some(ValueListFormatMetadata::construct_from_object(
                    map.get("metadata"),
                ));
            }
            if map.contains_key("data") {
                obj.data = Some(coerce_sequence(
                    &map["data"],
                    LabEvent::construct_from_object,
                ));
            }
            if map.contains_key("errors") {
                obj.errors = Some(UnifiedErrorMessage::construct_from_object(
                    map.get("errors"),
                ));
            }
        }
        obj
    }
}
