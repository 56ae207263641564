use serde_json::{Map, Value};

// The parse_*_field helpers read one field of a stored json object. A missing or null field
// yields the default, a field of the wrong type is an error.

pub(crate) fn parse_string_field(name: &str, map: &Map<String, Value>) -> Result<String, String> {
    match map.get(name) {
        None | Some(Value::Null) => Ok("".to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("field {} is not a string {:?}", name, other)),
    }
}

pub(crate) fn parse_bool_field(name: &str, map: &Map<String, Value>) -> Result<bool, String> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(format!("field {} is not a bool {:?}", name, other)),
    }
}

// integers may also be stored as numeric strings, e.g. "780"
pub(crate) fn parse_number_field(name: &str, map: &Map<String, Value>) -> Result<i64, String> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n.as_i64()
            .ok_or_else(|| format!("field {} is not an integer {}", name, n)),
        Some(Value::String(s)) => s.trim().parse::<i64>()
            .map_err(|_| format!("field {} is not an integer {:?}", name, s)),
        Some(other) => Err(format!("field {} is not an integer {:?}", name, other)),
    }
}
