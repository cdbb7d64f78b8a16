use serde_json::Value;

/// Pagination and format details attached to list responses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueListFormatMetadata {
    pub page: Option<i64>,
    pub page_count: Option<i64>,
    pub item_count: Option<i64>,
    pub limit: Option<i64>,
}

impl ValueListFormatMetadata {
    pub fn construct_from_object(data: Option<&Value>) -> Self {
        let mut obj = Self::default();
        if let Some(map) = data.and_then(Value::as_object) {
            if map.contains_key("page") {
                obj.page = map["page"].as_i64();
            }
            if map.contains_key("pageCount") {
                obj.page_count = map["pageCount"].as_i64();
            }
            if map.contains_key("itemCount") {
                obj.item_count = map["itemCount"].as_i64();
            }
            if map.contains_key("limit") {
                obj.limit = map["limit"].as_i64();
            }
        }
        obj
    }
}
