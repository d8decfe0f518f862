//! Lenient deserializers for server fields whose JSON type drifts between
//! endpoints (numbers sent as strings, arrays sent as JSON text, ...).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn opt_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(v.and_then(scalar_to_string))
}

pub(crate) fn string_list<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(v.map(value_to_list).unwrap_or_default())
}

pub(crate) fn flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s == "true",
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

fn scalar_to_string(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn value_to_list(v: Value) -> Vec<String> {
    match v {
        Value::Array(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.starts_with('[') {
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
                    return items.into_iter().filter_map(scalar_to_string).collect();
                }
            }
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
        Value::Null => Vec::new(),
        other => scalar_to_string(other).into_iter().collect(),
    }
}
