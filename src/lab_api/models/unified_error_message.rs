use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnifiedErrorMessage {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub details: Option<String>,
}

impl UnifiedErrorMessage {
    pub fn construct_from_object(data: Option<&Value>) -> Self {
        let mut obj = Self::default();
        if let Some(map) = data.and_then(Value::as_object) {
            if map.contains_key("code") {
                obj.code = map["code"].as_i64();
            }
            if map.contains_key("message") {
                obj.message = map["message"].as_str().map(str::to_owned);
            }
            if map.contains_key("details") {
                obj.details = map["details"].as_str().map(str::to_owned);
            }
        }
        obj
    }
}
