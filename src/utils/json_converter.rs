use serde_json::Value;

/// Convert a JSON value to a short string representation
fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => {
            let mut parts = Vec::new();
            for (key, val) in obj {
                parts.push(format!("{}: {}", key, value_to_short_string(val)));
            }
            parts.join(", ")
        }
        Value::Null => String::new(),
    }
}

/// First non-empty field among `keys`, rendered short. Nested keys use `.`,
/// e.g. `WorkspaceProperties.RunningMode`.
pub fn first_field(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| lookup_path(obj, key))
        .map(value_to_short_string)
        .find(|s| !s.trim().is_empty())
}

fn lookup_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(obj, |node, part| node.get(part))
}
