use serde_json::Value;

/// Maps each element of a JSON array through `convert`, preserving server order.
/// Non-array input yields an empty sequence; element shape is the converter's concern.
pub fn coerce_sequence<T>(raw: &Value, convert: impl Fn(Option<&Value>) -> T) -> Vec<T> {
    match raw.as_array() {
        Some(items) => items.iter().map(|item| convert(Some(item))).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_string(raw: Option<&Value>) -> Option<String> {
        raw.and_then(Value::as_str).map(str::to_owned)
    }

    #[test]
    fn maps_elements_in_order() {
        let raw = json!(["a", "b", "c"]);
        let converted = coerce_sequence(&raw, as_string);
        assert_eq!(
            converted,
            vec![
                Some("a".to_string()),
                Some("b".to_string()),
                Some("c".to_string())
            ]
        );
    }

    #[test]
    fn empty_array_yields_empty_sequence() {
        let raw = json!([]);
        let converted = coerce_sequence(&raw, as_string);
        assert!(converted.is_empty());
    }

    #[test]
    fn non_array_yields_empty_sequence() {
        for raw in [json!(null), json!(42), json!({"a": 1})] {
            assert!(coerce_sequence(&raw, as_string).is_empty());
        }
    }
}
