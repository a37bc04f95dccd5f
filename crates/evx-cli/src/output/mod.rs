use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut rows = Vec::with_capacity(map.len());
            for (key, value) in map {
                rows.push(vec![key, value_to_cell(&value)]);
            }
            Ok(table::render_entity_table(&headers, &rows))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows))
        }
    }
}

fn render_array_table(items: &[Value]) -> anyhow::Result<String> {
    if items.is_empty() {
        return Ok("(no rows)".to_string());
    }

    // Column order follows first appearance across the item objects.
    let mut headers: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        // Array of scalars.
        let rows: Vec<Vec<String>> = items.iter().map(|v| vec![value_to_cell(v)]).collect();
        return Ok(table::render_entity_table(&["value"], &rows));
    }

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|key| {
                    item.get(key)
                        .map_or_else(|| "-".to_string(), value_to_cell)
                })
                .collect()
        })
        .collect();

    Ok(table::render_entity_table(&header_refs, &rows))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| "?".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_format_is_pretty_printed() {
        let rendered = render(&json!({"a": 1}), OutputFormat::Json).unwrap();
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn raw_format_is_compact() {
        let rendered = render(&json!({"a": 1}), OutputFormat::Raw).unwrap();
        assert_eq!(rendered, r#"{"a":1}"#);
    }

    #[test]
    fn table_format_renders_object_rows() {
        let rendered = render(&json!({"name": "Research", "color": "blue"}), OutputFormat::Table)
            .unwrap();
        assert!(rendered.contains("key"));
        assert!(rendered.contains("Research"));
    }

    #[test]
    fn table_format_handles_empty_array() {
        let rendered = render(&json!([]), OutputFormat::Table).unwrap();
        assert_eq!(rendered, "(no rows)");
    }

    #[test]
    fn array_table_unions_columns_in_first_seen_order() {
        let rendered = render(
            &json!([{"id": "aut-1", "name": "A"}, {"id": "aut-2", "email": "x@y"}]),
            OutputFormat::Table,
        )
        .unwrap();
        let header_line = rendered.lines().next().unwrap();
        let id_pos = header_line.find("id").unwrap();
        let name_pos = header_line.find("name").unwrap();
        let email_pos = header_line.find("email").unwrap();
        assert!(id_pos < name_pos && name_pos < email_pos);
    }
}
