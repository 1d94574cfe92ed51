//! JavaScript literal rendering shared by the emitters.

use serde_json::Value;

/// Render a single-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Render an object key, quoting it only when it is not a plain identifier.
pub fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// Convert JSON to a JavaScript expression.
pub fn json_to_js(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => js_string(s),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(json_to_js).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(obj) if obj.is_empty() => "{}".to_string(),
        Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{}: {}", js_key(k), json_to_js(v)))
                .collect();
            format!("{{ {} }}", items.join(", "))
        }
    }
}

/// A pixel quantity as JSON, integral when the value is whole.
pub fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string("a\\b\nc"), r"'a\\b\nc'");
    }

    #[test]
    fn test_js_key() {
        assert_eq!(js_key("fontSize"), "fontSize");
        assert_eq!(js_key("brand-primary"), "'brand-primary'");
        assert_eq!(js_key("2xl"), "'2xl'");
    }

    #[test]
    fn test_json_to_js() {
        let value = json!({
            "shadowOffset": { "width": 0, "height": 2 },
            "fontFamily": "Inter",
            "sizes": [1, 2.5],
            "empty": {},
        });
        assert_eq!(
            json_to_js(&value),
            "{ shadowOffset: { width: 0, height: 2 }, fontFamily: 'Inter', sizes: [1, 2.5], empty: {} }"
        );
    }

    #[test]
    fn test_number_drops_trailing_zero() {
        assert_eq!(number(16.0).to_string(), "16");
        assert_eq!(number(1.5).to_string(), "1.5");
        assert_eq!(number(-4.0).to_string(), "-4");
    }
}
