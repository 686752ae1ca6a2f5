use serde_json::Value;

/// Looks up `key` on a serialized row.
///
/// One level of dotted traversal is supported: `"a.b"` reads `row.a.b`.
/// Missing segments and JSON `null` both resolve to `None`.
pub fn resolve<'a>(row: &'a Value, key: &str) -> Option<&'a Value> {
    let value = match key.split_once('.') {
        Some((head, tail)) => row.get(head)?.get(tail)?,
        None => row.get(key)?,
    };
    (!value.is_null()).then_some(value)
}

/// Plain text of a resolved value, `None` when it is undefined.
pub fn search_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| search_text(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        other @ Value::Object(_) => other.to_string(),
    };
    Some(text)
}

/// Cell text for a resolved value: its string form, or `-` when it is
/// undefined or empty.
pub fn display_text(value: Option<&Value>) -> String {
    match search_text(value) {
        Some(text) if !text.is_empty() => text,
        _ => "-".to_owned(),
    }
}
