pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("JSON serialization error: {}", e),
        },
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// A calculator result split into its summary fields and its row sections
/// (schedule, series, breakup), each an array of flat objects.
pub struct ResultParts<'a> {
    pub scalars: Vec<(&'a str, &'a Value)>,
    pub sections: Vec<(&'a str, &'a [Value])>,
}

/// Split the `result` object of an envelope (or a bare object) into scalar
/// fields and row sections.
pub fn split_result(value: &Value) -> Option<ResultParts<'_>> {
    let map: &Map<String, Value> = match value.get("result") {
        Some(Value::Object(m)) => m,
        _ => value.as_object()?,
    };

    let mut parts = ResultParts {
        scalars: Vec::new(),
        sections: Vec::new(),
    };
    for (key, val) in map {
        match val {
            Value::Array(rows) if rows.iter().all(Value::is_object) => {
                parts.sections.push((key.as_str(), rows.as_slice()));
            }
            _ => parts.scalars.push((key.as_str(), val)),
        }
    }
    Some(parts)
}

/// Column headers of a row section, in the row struct's field order (the
/// period index first).
pub fn row_headers(rows: &[Value]) -> Vec<&str> {
    match rows.first() {
        Some(Value::Object(first)) => first.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Render a JSON scalar for display.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
