use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabEvent {
    pub name: Option<String>,
    pub event_type: Option<String>,
    pub timestamp: Option<i64>,
    pub attributes: Option<Map<String, Value>>,
}

impl LabEvent {
    /// Copies recognized keys out of a decoded JSON value. Anything that is
    /// not an object, including `null`, produces an all-unset event.
    pub fn construct_from_object(data: Option<&Value>) -> Self {
        let mut obj = Self::default();
        if let Some(map) = data.and_then(Value::as_object) {
            if map.contains_key("name") {
                obj.name = map["name"].as_str().map(str::to_owned);
            }
            if map.contains_key("eventType") {
                obj.event_type = map["eventType"].as_str().map(str::to_owned);
            }
            if map.contains_key("timestamp") {
                obj.timestamp = map["timestamp"].as_i64();
            }
            if map.contains_key("attributes") {
                obj.attributes = map["attributes"].as_object().cloned();
            }
        }
        obj
    }
}
