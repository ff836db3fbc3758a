use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, row_headers, split_result};

/// Summary table, then one table per row section, then warnings and
/// methodology from the envelope.
pub fn print_table(value: &Value) {
    let Some(parts) = split_result(value) else {
        println!("{}", format_value(value));
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in &parts.scalars {
        builder.push_record([key.to_string(), format_value(val)]);
    }
    println!("{}", Table::from(builder));

    for (name, rows) in &parts.sections {
        println!("\n{}:", name);
        print_rows(rows);
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_rows(rows: &[Value]) {
    let headers = row_headers(rows);
    if headers.is_empty() {
        println!("(empty)");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        if let Value::Object(map) = row {
            builder.push_record(
                headers
                    .iter()
                    .map(|h| map.get(*h).map(format_value).unwrap_or_default()),
            );
        }
    }
    println!("{}", Table::from(builder));
}
