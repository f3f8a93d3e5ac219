use serde_json::{Map, Value};
use crate::error::StyleError;

// Copy of `obj` without its null-valued keys. Only the top level is
// inspected; nested objects are kept as they are, even when empty.
pub fn trim_empty_properties(obj: &Map<String, Value>) -> Map<String, Value> {
    obj.iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub fn trim_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        other => other,
    }
}

pub fn try_construct<T, O: Default>(
    constructor: impl FnOnce(O) -> Result<T, StyleError>,
    options: Option<O>,
) -> Option<T> {
    match constructor(options.unwrap_or_default()) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(kind = std::any::type_name::<T>(), error = %err, "style construction failed");
            None
        }
    }
}
